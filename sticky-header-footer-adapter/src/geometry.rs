//! Live layout reads. Nothing here is cached: rects are re-queried on every tick because a swap
//! may have just moved the measured nodes.

use sticky_header_footer::{FooterGeometry, HeaderGeometry};

use crate::Dom;

/// Whether the container overlaps the viewport (`top < viewport height && bottom > 0`).
pub fn container_visible<D: Dom + ?Sized>(dom: &D, container: &D::Node) -> bool {
    dom.bounding_rect(container)
        .intersects_viewport(dom.viewport_height())
}

pub fn read_header<D: Dom + ?Sized>(
    dom: &D,
    body: &D::Node,
    header: &D::Node,
    offset: Option<f64>,
) -> HeaderGeometry {
    HeaderGeometry {
        body: dom.bounding_rect(body),
        header_height: dom.bounding_rect(header).height(),
        offset,
    }
}

pub fn read_footer<D: Dom + ?Sized>(
    dom: &D,
    container: &D::Node,
    body: &D::Node,
    footer: &D::Node,
    offset: Option<f64>,
) -> FooterGeometry {
    FooterGeometry {
        body: dom.bounding_rect(body),
        footer_height: dom.bounding_rect(footer).height(),
        offset,
        viewport_height: dom.viewport_height(),
        container_visible: container_visible(dom, container),
    }
}
