use alloc::string::{String, ToString};

/// Default rate-limit window for scroll/resize handling, in milliseconds.
pub const DEFAULT_THROTTLE_MS: u64 = 66;

/// A style declaration applied to every clone wrapper once scrolling goes idle.
///
/// Some compositors leave a fixed element painted after it has been hidden; touching a
/// compositing-related property forces a repaint. This is a platform workaround, not part of the
/// stick/unstick state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositingRefresh {
    pub property: String,
    pub value: String,
}

impl CompositingRefresh {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl Default for CompositingRefresh {
    fn default() -> Self {
        Self::new("transform", "translateZ(0)")
    }
}

/// Configuration for one managed container.
///
/// Selectors are evaluated inside the container. `top` and `bottom` are CSS lengths; they are
/// applied verbatim to the fixed wrappers, while the decision rules only use their leading integer
/// (see [`leading_int`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StickyOptions {
    pub body_selector: String,
    pub footer_selector: String,
    pub header_selector: String,
    /// Offset of the pinned header from the top of the viewport.
    pub top: String,
    /// Offset of the pinned footer from the bottom of the viewport.
    pub bottom: String,
    pub z_index: i32,

    /// Window shared by the scroll throttle, the resize throttle and the scroll-idle debounce.
    pub throttle_ms: u64,

    /// Optional repaint nudge applied on scroll idle. `None` disables the hook (and its listener).
    pub compositing_refresh: Option<CompositingRefresh>,
}

impl Default for StickyOptions {
    fn default() -> Self {
        Self {
            body_selector: "tbody".to_string(),
            footer_selector: "tfoot".to_string(),
            header_selector: "thead".to_string(),
            top: "0".to_string(),
            bottom: "0".to_string(),
            z_index: 10,
            throttle_ms: DEFAULT_THROTTLE_MS,
            compositing_refresh: Some(CompositingRefresh::default()),
        }
    }
}

impl StickyOptions {
    /// Options for a table with `thead`/`tbody`/`tfoot`, pinned flush to the viewport edges.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_selector(mut self, selector: impl Into<String>) -> Self {
        self.body_selector = selector.into();
        self
    }

    pub fn with_footer_selector(mut self, selector: impl Into<String>) -> Self {
        self.footer_selector = selector.into();
        self
    }

    pub fn with_header_selector(mut self, selector: impl Into<String>) -> Self {
        self.header_selector = selector.into();
        self
    }

    pub fn with_top(mut self, top: impl Into<String>) -> Self {
        self.top = top.into();
        self
    }

    pub fn with_bottom(mut self, bottom: impl Into<String>) -> Self {
        self.bottom = bottom.into();
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_compositing_refresh(mut self, refresh: Option<CompositingRefresh>) -> Self {
        self.compositing_refresh = refresh;
        self
    }

    /// The selector locating the element for `role`.
    pub fn selector(&self, role: crate::Role) -> &str {
        match role {
            crate::Role::Header => &self.header_selector,
            crate::Role::Footer => &self.footer_selector,
        }
    }

    /// Pixel offset used by the header rules (leading integer of `top`).
    pub fn top_px(&self) -> Option<f64> {
        leading_int(&self.top).map(|v| v as f64)
    }

    /// Pixel offset used by the footer rules (leading integer of `bottom`).
    pub fn bottom_px(&self) -> Option<f64> {
        leading_int(&self.bottom).map(|v| v as f64)
    }
}

/// Parses the leading integer of a CSS length, e.g. `"12px"` → `12`, `" -3.5em"` → `-3`.
///
/// Leading whitespace and a single sign are accepted. Returns `None` when no digit follows, in
/// which case the offset takes part in no comparison.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
