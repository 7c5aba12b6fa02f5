use crate::{Decision, Rect};

/// Inputs for one header decision tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderGeometry {
    /// Bounding rect of the body element (the scroll-range reference).
    pub body: Rect,
    /// Height of the header element.
    pub header_height: f64,
    /// Pixel offset from the top of the viewport, `None` if `top` had no leading integer.
    pub offset: Option<f64>,
}

/// Inputs for one footer decision tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FooterGeometry {
    pub body: Rect,
    pub footer_height: f64,
    /// Pixel offset from the bottom of the viewport, `None` if `bottom` had no leading integer.
    pub offset: Option<f64>,
    pub viewport_height: f64,
    /// Whether the container itself overlaps the viewport.
    pub container_visible: bool,
}

/// Decides whether the header should change state.
///
/// While stuck, the header is released when the body's top drops below the pinned band
/// (`offset + height`) or when less than half a header of body remains above it. While unstuck, it
/// sticks once the body's top reaches the band and its bottom is still past it. The two
/// thresholds differ on purpose; equality is part of the contract.
pub fn decide_header(g: &HeaderGeometry, is_stuck: bool) -> Decision {
    let Some(offset) = g.offset else {
        return Decision::Hold;
    };
    let band = offset + g.header_height;

    if is_stuck {
        if g.body.top > band || g.body.bottom < offset + g.header_height / 2.0 {
            return Decision::Unstick;
        }
    } else if g.body.top <= band && g.body.bottom > band {
        return Decision::Stick;
    }
    Decision::Hold
}

/// Decides whether the footer should change state.
///
/// The pinned band starts at `viewport_height - offset - height`. While stuck, the footer is
/// released when the body ends above the band, when the body starts below the pinned position, or
/// when the container leaves the viewport. While unstuck, it sticks when all three complementary
/// conditions hold.
pub fn decide_footer(g: &FooterGeometry, is_stuck: bool) -> Decision {
    let pinned_at = g.offset.map(|o| g.viewport_height - o);
    let band = pinned_at.map(|p| p - g.footer_height);

    if is_stuck {
        let ended_early = band.is_some_and(|b| g.body.bottom < b);
        let starts_below = pinned_at.is_some_and(|p| g.body.top > p);
        if ended_early || starts_below || !g.container_visible {
            return Decision::Unstick;
        }
    } else {
        let extends_past = band.is_some_and(|b| g.body.bottom > b);
        let starts_above = pinned_at.is_some_and(|p| g.body.top < p);
        if extends_past && starts_above && g.container_visible {
            return Decision::Stick;
        }
    }
    Decision::Hold
}
