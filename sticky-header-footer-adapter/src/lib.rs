//! DOM-driven controller for the `sticky-header-footer` crate.
//!
//! The core crate decides *when* a header or footer should be pinned. This crate does the DOM
//! work around that decision:
//!
//! - wrapping the container and building hidden fixed-position clones of its header/footer
//! - swapping original and clone on stick/unstick so the page never reflows
//! - syncing clone widths on resize/orientation change
//! - subscribing to platform events and reversing everything on teardown
//!
//! The platform itself (selector queries, layout reads, style writes, event delivery) is the
//! [`Dom`] trait; nothing here is tied to a particular binding.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dom;
pub mod geometry;
mod instance;
mod registry;
mod sticky;

#[cfg(test)]
mod fake_dom;

pub use dom::{Dom, DomError, ListenerId, PlatformEvent};
pub use instance::Instance;
pub use registry::{Command, ContainerKey, Registry};
pub use sticky::StickyElement;
