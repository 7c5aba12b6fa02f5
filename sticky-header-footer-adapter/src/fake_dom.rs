//! Arena-backed DOM used by the adapter tests.
//!
//! Layout is scripted: each node carries a document-space rect and an optional width, and
//! `bounding_rect` subtracts the current scroll position.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use sticky_header_footer::{NodeTree, Rect, TreeError};

use crate::{Dom, DomError, ListenerId, PlatformEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    width: Option<f64>,
}

#[derive(Debug)]
pub(crate) struct FakeDom {
    nodes: Vec<NodeData>,
    pub(crate) root: NodeId,
    pub(crate) scroll_y: f64,
    pub(crate) viewport_height: f64,
    pub(crate) viewport_width: f64,
    listeners: BTreeMap<ListenerId, PlatformEvent>,
    next_listener: u64,
    pub(crate) synthetic_scroll_supported: bool,
    pub(crate) synthetic_scrolls: usize,
    pub(crate) mutations: usize,
    /// Every `set_style` call, in order.
    pub(crate) style_log: Vec<(NodeId, String, String)>,
}

impl FakeDom {
    pub(crate) fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            scroll_y: 0.0,
            viewport_height,
            viewport_width,
            listeners: BTreeMap::new(),
            next_listener: 1,
            synthetic_scroll_supported: true,
            synthetic_scrolls: 0,
            mutations: 0,
            style_log: Vec::new(),
        };
        dom.root = dom.alloc("body");
        dom
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        self.nodes.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn data(&self, node: &NodeId) -> &NodeData {
        &self.nodes[node.0]
    }

    fn data_mut(&mut self, node: &NodeId) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    /// Creates `tag` as the last child of `parent`.
    pub(crate) fn el(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.alloc(tag);
        self.data_mut(&node).parent = Some(parent);
        self.data_mut(&parent).children.push(node);
        node
    }

    /// Sets the document-space vertical extent of `node`.
    pub(crate) fn set_rect(&mut self, node: NodeId, top: f64, bottom: f64) {
        self.data_mut(&node).rect = Rect::new(top, bottom, 0.0, self.viewport_width);
    }

    pub(crate) fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if name == "class" {
            self.data_mut(&node).classes = value.split_whitespace().map(String::from).collect();
        } else {
            self.data_mut(&node)
                .attrs
                .insert(name.to_string(), value.to_string());
        }
    }

    pub(crate) fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.data(&node).children.clone()
    }

    pub(crate) fn tag(&self, node: NodeId) -> &str {
        &self.data(&node).tag
    }

    pub(crate) fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.data(&node).classes.iter().any(|c| c == class)
    }

    pub(crate) fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.data(&node).styles.get(property).map(String::as_str)
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Listener ids subscribed to `event`, in subscription order.
    pub(crate) fn fire(&self, event: PlatformEvent) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, e)| **e == event)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Serializes the subtree rooted at `node` (tags, attributes, classes, styles, child order).
    pub(crate) fn snapshot(&self, node: NodeId) -> String {
        let d = self.data(&node);
        let mut out = format!("<{}", d.tag);
        for (k, v) in &d.attrs {
            out.push_str(&format!(" {k}=\"{v}\""));
        }
        if !d.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", d.classes.join(" ")));
        }
        if !d.styles.is_empty() {
            let styles: Vec<String> = d.styles.iter().map(|(k, v)| format!("{k}:{v}")).collect();
            out.push_str(&format!(" style=\"{}\"", styles.join(";")));
        }
        out.push('>');
        for child in &d.children {
            out.push_str(&self.snapshot(*child));
        }
        out.push_str(&format!("</{}>", d.tag));
        out
    }

    fn matches(&self, node: &NodeId, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.has_class(*node, class),
            None => self.data(node).tag == selector,
        }
    }

    fn is_ancestor_or_self(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cur = Some(*node);
        while let Some(n) = cur {
            if n == *ancestor {
                return true;
            }
            cur = self.data(&n).parent;
        }
        false
    }

    fn detach(&mut self, node: &NodeId) {
        if let Some(parent) = self.data_mut(node).parent.take() {
            self.data_mut(&parent).children.retain(|c| c != node);
        }
    }
}

impl NodeTree for FakeDom {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.data(node).parent
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let parent = self.data(node).parent?;
        let siblings = &self.data(&parent).children;
        let i = siblings.iter().position(|c| c == node)?;
        siblings.get(i + 1).copied()
    }

    fn insert_before(
        &mut self,
        parent: &NodeId,
        child: &NodeId,
        reference: Option<&NodeId>,
    ) -> Result<(), TreeError> {
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::HierarchyRequest);
        }
        if reference.is_some_and(|r| self.data(r).parent != Some(*parent)) {
            return Err(TreeError::HierarchyRequest);
        }
        self.mutations += 1;
        if Some(child) == reference {
            return Ok(());
        }
        self.detach(child);
        let at = match reference {
            Some(r) => self
                .data(parent)
                .children
                .iter()
                .position(|c| c == r)
                .ok_or(TreeError::HierarchyRequest)?,
            None => self.data(parent).children.len(),
        };
        self.data_mut(parent).children.insert(at, *child);
        self.data_mut(child).parent = Some(*parent);
        Ok(())
    }
}

impl Dom for FakeDom {
    fn query(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        for child in &self.data(scope).children {
            if self.matches(child, selector) {
                return Some(*child);
            }
            if let Some(found) = self.query(child, selector) {
                return Some(found);
            }
        }
        None
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.data(node).tag.clone()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let d = self.data(node);
        if name == "class" {
            return (!d.classes.is_empty()).then(|| d.classes.join(" "));
        }
        d.attrs.get(name).cloned()
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        self.mutations += 1;
        if !self.has_class(*node, class) {
            self.data_mut(node).classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.mutations += 1;
        self.data_mut(node).classes.retain(|c| c != class);
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.mutations += 1;
        self.style_log
            .push((*node, property.to_string(), value.to_string()));
        self.data_mut(node)
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        self.data(node).rect.translate_y(-self.scroll_y)
    }

    fn width(&self, node: &NodeId) -> f64 {
        let mut cur = Some(*node);
        while let Some(n) = cur {
            if let Some(w) = self.data(&n).width {
                return w;
            }
            cur = self.data(&n).parent;
        }
        self.viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(tag)
    }

    fn deep_clone(&mut self, node: &NodeId) -> NodeId {
        let mut data = self.data(node).clone();
        let children = core::mem::take(&mut data.children);
        data.parent = None;
        self.nodes.push(data);
        let copy = NodeId(self.nodes.len() - 1);
        for child in children {
            let child_copy = self.deep_clone(&child);
            self.data_mut(&child_copy).parent = Some(copy);
            self.data_mut(&copy).children.push(child_copy);
        }
        copy
    }

    fn remove(&mut self, node: &NodeId) {
        self.mutations += 1;
        self.detach(node);
    }

    fn add_listener(&mut self, event: PlatformEvent) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, event);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn dispatch_synthetic_scroll(&mut self) -> Result<(), DomError> {
        if !self.synthetic_scroll_supported {
            return Err(DomError::Unsupported("synthetic scroll event"));
        }
        self.synthetic_scrolls += 1;
        Ok(())
    }
}
