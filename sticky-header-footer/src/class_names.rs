//! Marker classes added to the DOM by the adapter.
//!
//! They are part of the public surface: stylesheets may target them, and the adapter uses them to
//! tell originals from clones.

/// Added around the whole container; its width is the reference width for pinned clones.
pub const OUTER_WRAPPER: &str = "sticky-header-footer_wrapper";
/// The fixed-position wrapper holding a clone.
pub const STICKY_WRAPPER: &str = "sticky-header-footer_sticky-wrapper";
pub const STICKY_HEADER: &str = "sticky-header-footer_sticky-header";
pub const STICKY_FOOTER: &str = "sticky-header-footer_sticky-footer";
pub const ORIGINAL_HEADER: &str = "sticky-header-footer_original-header";
pub const ORIGINAL_FOOTER: &str = "sticky-header-footer_original-footer";
