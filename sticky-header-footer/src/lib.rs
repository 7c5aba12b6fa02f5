//! A headless sticky header/footer engine.
//!
//! For the DOM-driven controller and registry, see the `sticky-header-footer-adapter` crate.
//!
//! This crate holds the parts of "keep a header/footer pinned while its section is in view" that
//! do not depend on any UI toolkit: the stick/unstick decision rules evaluated against live
//! bounding rects, adapter-clocked throttle/debounce state machines, and a node swap primitive
//! over an abstract tree.
//!
//! It is UI-agnostic. An adapter is expected to provide:
//! - bounding rects of the container, its body and the header/footer
//! - the viewport height
//! - a clock (`now_ms`) for throttling scroll/resize work
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod class_names;
mod decision;
mod options;
mod rate;
mod tree;
mod types;


pub use decision::{FooterGeometry, HeaderGeometry, decide_footer, decide_header};
pub use options::{
    CompositingRefresh, DEFAULT_THROTTLE_MS, StickyOptions, leading_int,
};
pub use rate::{Debounce, Throttle};
pub use tree::{NodeTree, TreeError, swap_positions};
pub use types::{Decision, Rect, Role};
