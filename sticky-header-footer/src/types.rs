/// Which edge of the container an element is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Header,
    Footer,
}

impl Role {
    /// Marker class for the original (in-flow) element of this role.
    pub fn original_class(self) -> &'static str {
        match self {
            Self::Header => crate::class_names::ORIGINAL_HEADER,
            Self::Footer => crate::class_names::ORIGINAL_FOOTER,
        }
    }

    /// Role-specific marker class for the fixed clone wrapper.
    pub fn wrapper_class(self) -> &'static str {
        match self {
            Self::Header => crate::class_names::STICKY_HEADER,
            Self::Footer => crate::class_names::STICKY_FOOTER,
        }
    }
}

/// Outcome of one decision tick for one role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    Stick,
    Unstick,
    /// Keep the current state.
    Hold,
}

/// A viewport-relative bounding box, as reported by `getBoundingClientRect`.
///
/// Values may be negative (above/left of the viewport) and fractional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// A rect spanning `top..bottom` with zero horizontal extent.
    pub fn vertical(top: f64, bottom: f64) -> Self {
        Self::new(top, bottom, 0.0, 0.0)
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Whether any part of the rect overlaps a viewport of the given height.
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }

    /// Returns a copy moved vertically by `dy`.
    pub fn translate_y(self, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            bottom: self.bottom + dy,
            ..self
        }
    }
}
