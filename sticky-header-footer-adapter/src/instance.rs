use alloc::string::ToString;
use alloc::vec::Vec;

use sticky_header_footer::{
    Debounce, Role, StickyOptions, Throttle, class_names, decide_footer, decide_header,
};

use crate::geometry::{read_footer, read_header};
use crate::sticky::StickyElement;
use crate::{Dom, DomError, ListenerId, PlatformEvent};

/// What a subscribed listener does when its event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Listener {
    /// Throttled stick/unstick evaluation.
    ScrollDecision,
    /// Debounced compositing refresh.
    ScrollIdle,
    /// Throttled width sync.
    Resize,
    /// Immediate width sync.
    Orientation,
}

impl Listener {
    fn event(self) -> PlatformEvent {
        match self {
            Self::ScrollDecision | Self::ScrollIdle => PlatformEvent::Scroll,
            Self::Resize => PlatformEvent::Resize,
            Self::Orientation => PlatformEvent::OrientationChange,
        }
    }
}

/// The controller for one managed container.
///
/// Created by [`Instance::setup`], which wraps the container, builds the fixed clones and
/// subscribes to platform events. [`Instance::teardown`] reverses all of it. Instances are
/// usually owned by a [`Registry`](crate::Registry), which routes events to them.
///
/// All work is adapter-clocked: event handlers and [`Instance::tick`] take `now_ms`, and no timer
/// exists outside this struct, so dropping it cancels every pending call.
#[derive(Clone, Debug)]
pub struct Instance<N> {
    container: N,
    outer_wrapper: N,
    body: Option<N>,
    header: Option<StickyElement<N>>,
    footer: Option<StickyElement<N>>,
    options: StickyOptions,
    width: Option<f64>,

    listeners: Vec<(ListenerId, Listener)>,
    scroll_throttle: Throttle,
    resize_throttle: Throttle,
    scroll_idle: Debounce,
}

impl<N: Clone + PartialEq> Instance<N> {
    /// Decorates `container` and starts watching it.
    ///
    /// Missing header/footer/body elements are not errors: the matching role is left unmanaged.
    /// Without a header and a footer the instance is inert (wrapped, but no listeners).
    pub fn setup<D: Dom<Node = N> + ?Sized>(
        dom: &mut D,
        container: N,
        options: StickyOptions,
        now_ms: u64,
    ) -> Self {
        let body = dom.query(&container, &options.body_selector);
        let footer = dom.query(&container, &options.footer_selector);
        let header = dom.query(&container, &options.header_selector);

        let outer_wrapper = dom.create_element("div");
        dom.add_class(&outer_wrapper, class_names::OUTER_WRAPPER);
        if let Err(_err) = wrap(dom, &container, &outer_wrapper) {
            swarn!(error = %_err, "failed to wrap container");
        }

        let window = options.throttle_ms;
        let mut this = Self {
            container,
            outer_wrapper,
            body,
            header: None,
            footer: None,
            options,
            width: None,
            listeners: Vec::new(),
            scroll_throttle: Throttle::new(window),
            resize_throttle: Throttle::new(window),
            scroll_idle: Debounce::new(window),
        };

        this.footer = footer.and_then(|el| this.decorate(dom, Role::Footer, el));
        this.header = header.and_then(|el| this.decorate(dom, Role::Header, el));

        sdebug!(
            header = this.header.is_some(),
            footer = this.footer.is_some(),
            body = this.body.is_some(),
            "Instance::setup"
        );

        if this.is_inert() {
            return this;
        }

        this.listen(dom, Listener::ScrollDecision);
        if this.options.compositing_refresh.is_some() {
            this.listen(dom, Listener::ScrollIdle);
        }
        this.listen(dom, Listener::Resize);
        this.listen(dom, Listener::Orientation);

        // Prime the initial state as if a scroll had happened.
        match dom.dispatch_synthetic_scroll() {
            Ok(()) => {
                let ids: Vec<ListenerId> = this
                    .listeners
                    .iter()
                    .filter(|(_, l)| l.event() == PlatformEvent::Scroll)
                    .map(|(id, _)| *id)
                    .collect();
                for id in ids {
                    this.handle(dom, id, now_ms);
                }
            }
            Err(_err) => {
                swarn!(error = %_err, "synthetic scroll unsupported; state primes on first scroll");
            }
        }

        this
    }

    fn listen<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D, listener: Listener) {
        let id = dom.add_listener(listener.event());
        self.listeners.push((id, listener));
    }

    /// Builds the hidden fixed clone for `role` and marks the original.
    fn decorate<D: Dom<Node = N> + ?Sized>(
        &self,
        dom: &mut D,
        role: Role,
        original: N,
    ) -> Option<StickyElement<N>> {
        let wrapper = dom.create_element("div");
        match self.build_clone(dom, role, &original, &wrapper) {
            Ok(()) => {
                dom.add_class(&original, role.original_class());
                Some(StickyElement::new(role, original, wrapper))
            }
            Err(_err) => {
                swarn!(role = ?role, error = %_err, "failed to build sticky clone; role unmanaged");
                dom.remove(&wrapper);
                None
            }
        }
    }

    fn build_clone<D: Dom<Node = N> + ?Sized>(
        &self,
        dom: &mut D,
        role: Role,
        original: &N,
        wrapper: &N,
    ) -> Result<(), DomError> {
        let clone = dom.deep_clone(original);

        dom.add_class(wrapper, class_names::STICKY_WRAPPER);
        dom.add_class(wrapper, role.wrapper_class());
        let (top, bottom) = match role {
            Role::Header => (self.options.top.as_str(), "auto"),
            Role::Footer => ("auto", self.options.bottom.as_str()),
        };
        dom.set_style(wrapper, "position", "fixed");
        dom.set_style(wrapper, "top", top);
        dom.set_style(wrapper, "bottom", bottom);
        dom.set_style(wrapper, "z-index", &self.options.z_index.to_string());
        dom.set_style(wrapper, "display", "none");

        if dom.tag_name(&self.container) == "table" {
            // Table sections need a table shell to lay out; keep the container's classes so
            // table styling applies to the clone too.
            let shell = dom.create_element("table");
            if let Some(classes) = dom.attribute(&self.container, "class") {
                for class in classes.split_whitespace() {
                    dom.add_class(&shell, class);
                }
            }
            if let Some(colgroup) = dom.query(&self.container, "colgroup") {
                let colgroup = dom.deep_clone(&colgroup);
                dom.append_child(&shell, &colgroup)?;
            }
            dom.append_child(&shell, &clone)?;
            dom.append_child(wrapper, &shell)?;
        } else {
            dom.append_child(wrapper, &clone)?;
        }

        match role {
            Role::Header => dom.insert_ahead(&self.container, wrapper),
            Role::Footer => dom.insert_after(&self.container, wrapper),
        }
    }

    pub fn container(&self) -> &N {
        &self.container
    }

    /// The marker element added around the container.
    pub fn outer_wrapper(&self) -> &N {
        &self.outer_wrapper
    }

    pub fn body(&self) -> Option<&N> {
        self.body.as_ref()
    }

    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    pub fn sticky(&self, role: Role) -> Option<&StickyElement<N>> {
        match role {
            Role::Header => self.header.as_ref(),
            Role::Footer => self.footer.as_ref(),
        }
    }

    pub fn is_stuck(&self, role: Role) -> bool {
        self.sticky(role).is_some_and(|el| el.is_stuck())
    }

    /// `true` when neither a header nor a footer is managed.
    pub fn is_inert(&self) -> bool {
        self.header.is_none() && self.footer.is_none()
    }

    /// Last width pushed to the clone wrappers.
    pub fn cached_width(&self) -> Option<f64> {
        self.width
    }

    pub fn listener_ids(&self) -> impl Iterator<Item = ListenerId> + '_ {
        self.listeners.iter().map(|(id, _)| *id)
    }

    pub fn owns_listener(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(l, _)| *l == id)
    }

    /// Handles an event delivered to one of this instance's listeners.
    ///
    /// Returns `false` if `id` does not belong to this instance.
    pub fn handle<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        id: ListenerId,
        now_ms: u64,
    ) -> bool {
        let Some(&(_, listener)) = self.listeners.iter().find(|(l, _)| *l == id) else {
            return false;
        };
        match listener {
            Listener::ScrollDecision => {
                if self.scroll_throttle.call(now_ms) {
                    self.watch(dom);
                }
            }
            Listener::ScrollIdle => self.scroll_idle.call(now_ms),
            Listener::Resize => {
                if self.resize_throttle.call(now_ms) {
                    self.sync_width(dom);
                }
            }
            Listener::Orientation => self.sync_width(dom),
        }
        true
    }

    /// Runs deferred work that has come due: trailing throttled calls and the scroll-idle
    /// refresh.
    pub fn tick<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D, now_ms: u64) {
        if self.scroll_throttle.poll(now_ms) {
            self.watch(dom);
        }
        if self.resize_throttle.poll(now_ms) {
            self.sync_width(dom);
        }
        if self.scroll_idle.poll(now_ms) {
            self.refresh_compositing(dom);
        }
    }

    /// Earliest time at which [`Instance::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.scroll_throttle.deadline(),
            self.resize_throttle.deadline(),
            self.scroll_idle.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Evaluates the footer, then the header, against live geometry.
    pub fn watch<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D) {
        let Some(body) = self.body.as_ref() else {
            strace!("no body element; skipping decisions");
            return;
        };

        if let Some(footer) = self.footer.as_mut() {
            let g = read_footer(
                &*dom,
                &self.container,
                body,
                footer.original(),
                self.options.bottom_px(),
            );
            let decision = decide_footer(&g, footer.is_stuck());
            if let Some(width) = footer.apply(
                dom,
                decision,
                &self.options.footer_selector,
                &self.container,
                &self.outer_wrapper,
            ) {
                self.width = Some(width);
            }
        }

        if let Some(header) = self.header.as_mut() {
            let g = read_header(&*dom, body, header.original(), self.options.top_px());
            let decision = decide_header(&g, header.is_stuck());
            if let Some(width) = header.apply(
                dom,
                decision,
                &self.options.header_selector,
                &self.container,
                &self.outer_wrapper,
            ) {
                self.width = Some(width);
            }
        }
    }

    /// Pushes the outer wrapper's current width onto every clone wrapper if it changed.
    pub fn sync_width<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D) {
        let width = dom.width(&self.outer_wrapper);
        if self.width == Some(width) {
            return;
        }
        strace!(from = ?self.width, to = width, "sync_width");
        for el in self.header.iter().chain(self.footer.iter()) {
            el.set_width(dom, width);
        }
        self.width = Some(width);
    }

    fn refresh_compositing<D: Dom<Node = N> + ?Sized>(&self, dom: &mut D) {
        let Some(refresh) = &self.options.compositing_refresh else {
            return;
        };
        for el in self.header.iter().chain(self.footer.iter()) {
            dom.set_style(el.clone_wrapper(), &refresh.property, &refresh.value);
        }
    }

    /// Restores the container's original subtree and unsubscribes every listener.
    pub fn teardown<D: Dom<Node = N> + ?Sized>(mut self, dom: &mut D) {
        for (id, _) in self.listeners.drain(..) {
            dom.remove_listener(id);
        }
        self.scroll_throttle.cancel();
        self.resize_throttle.cancel();
        self.scroll_idle.cancel();

        for (el, selector) in [
            (self.footer.take(), &self.options.footer_selector),
            (self.header.take(), &self.options.header_selector),
        ] {
            let Some(mut el) = el else {
                continue;
            };
            if let Err(_err) = el.unstick(dom, selector, &self.container) {
                swarn!(role = ?el.role(), error = %_err, "failed to unstick during teardown");
                if let Err(_err) = self.reinsert(dom, &el) {
                    swarn!(role = ?el.role(), error = %_err, "failed to restore original element");
                }
            }
            dom.remove(el.clone_wrapper());
            dom.remove_class(el.original(), el.role().original_class());
        }

        if let Err(_err) = unwrap(dom, &self.container, &self.outer_wrapper) {
            swarn!(error = %_err, "failed to unwrap container");
        }
        sdebug!("Instance::teardown");
    }

    /// Moves a stuck original back into the container when its in-flow twin is gone: headers go
    /// before the body, footers after it, and both are appended when there is no body.
    fn reinsert<D: Dom<Node = N> + ?Sized>(
        &self,
        dom: &mut D,
        el: &StickyElement<N>,
    ) -> Result<(), DomError> {
        let original = el.original();
        let body = self
            .body
            .as_ref()
            .filter(|body| dom.parent(body).is_some() && *body != original);
        match (el.role(), body) {
            (Role::Header, Some(body)) => dom.insert_ahead(body, original),
            (Role::Footer, Some(body)) => dom.insert_after(body, original),
            (_, None) => dom.append_child(&self.container, original),
        }
    }
}

/// Puts `wrapper` in `node`'s place and moves `node` inside it.
fn wrap<D: Dom + ?Sized>(dom: &mut D, node: &D::Node, wrapper: &D::Node) -> Result<(), DomError> {
    if dom.parent(node).is_some() {
        dom.insert_ahead(node, wrapper)?;
    }
    dom.append_child(wrapper, node)
}

/// Reverses [`wrap`]: moves `node` back to `wrapper`'s place and drops the wrapper.
fn unwrap<D: Dom + ?Sized>(dom: &mut D, node: &D::Node, wrapper: &D::Node) -> Result<(), DomError> {
    if dom.parent(wrapper).is_some() {
        dom.insert_ahead(wrapper, node)?;
    } else {
        dom.remove(node);
    }
    dom.remove(wrapper);
    Ok(())
}
