use alloc::format;
use alloc::string::ToString;

use sticky_header_footer::{Decision, Role, swap_positions};

use crate::{Dom, DomError};

/// A managed header or footer: the live element plus its fixed-position twin.
///
/// Exactly one of `original` and its clone sits in the container's natural-flow slot. While
/// unstuck that is the original and the clone wrapper is hidden; while stuck the two have been
/// swapped, so the original lives inside the (visible, fixed) clone wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickyElement<N> {
    role: Role,
    original: N,
    clone_wrapper: N,
    is_stuck: bool,
}

impl<N: Clone + PartialEq> StickyElement<N> {
    pub(crate) fn new(role: Role, original: N, clone_wrapper: N) -> Self {
        Self {
            role,
            original,
            clone_wrapper,
            is_stuck: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn original(&self) -> &N {
        &self.original
    }

    /// The fixed-position wrapper holding the clone (or, while stuck, the original).
    pub fn clone_wrapper(&self) -> &N {
        &self.clone_wrapper
    }

    pub fn is_stuck(&self) -> bool {
        self.is_stuck
    }

    /// Pins the element: swaps the original with the twin inside the clone wrapper, then shows
    /// the wrapper at `width` pixels.
    ///
    /// Returns `Ok(false)` when already stuck.
    pub(crate) fn stick<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        selector: &str,
        width: f64,
    ) -> Result<bool, DomError> {
        if self.is_stuck {
            return Ok(false);
        }
        let twin = dom
            .query(&self.clone_wrapper, selector)
            .ok_or_else(|| DomError::NoMatch(selector.to_string()))?;
        swap_positions(dom, &self.original, &twin)?;

        self.is_stuck = true;
        dom.set_style(&self.clone_wrapper, "display", "block");
        dom.set_style(&self.clone_wrapper, "width", &px(width));
        strace!(role = ?self.role, width, "stick");
        Ok(true)
    }

    /// Releases the element: swaps it back with whatever now occupies its slot in `container`,
    /// then hides the clone wrapper.
    ///
    /// Returns `Ok(false)` when not stuck.
    pub(crate) fn unstick<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        selector: &str,
        container: &N,
    ) -> Result<bool, DomError> {
        if !self.is_stuck {
            return Ok(false);
        }
        let in_flow = dom
            .query(container, selector)
            .ok_or_else(|| DomError::NoMatch(selector.to_string()))?;
        swap_positions(dom, &self.original, &in_flow)?;

        self.is_stuck = false;
        dom.set_style(&self.clone_wrapper, "display", "none");
        strace!(role = ?self.role, "unstick");
        Ok(true)
    }

    /// Applies a decision. Returns the pinned width when the element was stuck by this call.
    pub(crate) fn apply<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        decision: Decision,
        selector: &str,
        container: &N,
        outer_wrapper: &N,
    ) -> Option<f64> {
        let result = match decision {
            Decision::Hold => return None,
            Decision::Stick => {
                let width = dom.width(outer_wrapper);
                self.stick(dom, selector, width).map(|stuck| stuck.then_some(width))
            }
            Decision::Unstick => self.unstick(dom, selector, container).map(|_| None),
        };
        match result {
            Ok(width) => width,
            Err(_err) => {
                swarn!(role = ?self.role, error = %_err, "sticky swap failed");
                None
            }
        }
    }

    pub(crate) fn set_width<D: Dom<Node = N> + ?Sized>(&self, dom: &mut D, width: f64) {
        dom.set_style(&self.clone_wrapper, "width", &px(width));
    }
}

pub(crate) fn px(value: f64) -> alloc::string::String {
    format!("{value}px")
}
