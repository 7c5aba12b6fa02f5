use alloc::string::String;

use sticky_header_footer::{NodeTree, Rect, TreeError};

/// Platform events the controller subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlatformEvent {
    /// Document scroll.
    Scroll,
    /// Window resize.
    Resize,
    /// Device orientation change.
    OrientationChange,
}

/// Handle for a subscribed listener, issued by [`Dom::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// Errors reported by a [`Dom`] binding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// A selector expected to match inside a managed subtree matched nothing.
    #[error("selector `{0}` matched nothing")]
    NoMatch(String),
    /// The platform cannot perform the requested operation (e.g. synthetic event dispatch).
    #[error("unsupported platform operation: {0}")]
    Unsupported(&'static str),
}

/// The platform layer: a DOM-like tree with layout reads, style writes and event subscription.
///
/// Node handles are cheap identities (ids, reference-counted pointers); cloning a handle never
/// clones the underlying element.
///
/// Listeners are not closures: the platform remembers the `(ListenerId, PlatformEvent)` pairs and,
/// when an event fires, hands each matching id to
/// [`Registry::dispatch`](crate::Registry::dispatch).
pub trait Dom: NodeTree {
    /// First descendant of `scope` (excluding `scope`) matching `selector`, in document order.
    fn query(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Lower-case tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn add_class(&mut self, node: &Self::Node, class: &str);

    fn remove_class(&mut self, node: &Self::Node, class: &str);

    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Viewport-relative border box.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Rendered content width in pixels.
    fn width(&self, node: &Self::Node) -> f64;

    fn viewport_height(&self) -> f64;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Detached deep copy of `node` (attributes and descendants, no listeners).
    fn deep_clone(&mut self, node: &Self::Node) -> Self::Node;

    /// Detaches `node` and its subtree from the tree.
    fn remove(&mut self, node: &Self::Node);

    fn add_listener(&mut self, event: PlatformEvent) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);

    /// Announces a synthetic scroll to other observers.
    ///
    /// The caller runs its own scroll handling when this succeeds; the platform must not
    /// re-deliver the event to the caller's listeners.
    fn dispatch_synthetic_scroll(&mut self) -> Result<(), DomError>;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError> {
        self.insert_before(parent, child, None)?;
        Ok(())
    }

    /// Inserts `node` right after `reference` under the same parent.
    fn insert_after(&mut self, reference: &Self::Node, node: &Self::Node) -> Result<(), DomError> {
        let parent = self.parent(reference).ok_or(TreeError::Detached)?;
        let next = self.next_sibling(reference);
        self.insert_before(&parent, node, next.as_ref())?;
        Ok(())
    }

    /// Inserts `node` right before `reference` under the same parent.
    fn insert_ahead(&mut self, reference: &Self::Node, node: &Self::Node) -> Result<(), DomError> {
        let parent = self.parent(reference).ok_or(TreeError::Detached)?;
        self.insert_before(&parent, node, Some(reference))?;
        Ok(())
    }
}
