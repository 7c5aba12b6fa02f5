// Example: drive the decision rules and the scroll throttle by hand.
use sticky_header_footer::{
    Decision, FooterGeometry, HeaderGeometry, Rect, StickyOptions, Throttle, decide_footer,
    decide_header,
};

fn main() {
    let opts = StickyOptions::new().with_top("0").with_bottom("0");
    let viewport_height = 800.0;

    // A table whose body spans 1040..2970 in document space; header 40px, footer 30px.
    let body_doc = Rect::vertical(1040.0, 2970.0);
    let container_doc = Rect::vertical(1000.0, 3000.0);

    let mut header_stuck = false;
    let mut footer_stuck = false;
    let mut throttle = Throttle::new(opts.throttle_ms);

    let frames = [
        (0u64, 0.0),
        (100, 1000.0),
        (120, 950.0),
        (300, 2300.0),
        (400, 2960.0),
    ];
    for (now_ms, scroll_y) in frames {
        if !throttle.call(now_ms) {
            println!(
                "t={now_ms}: throttled (trailing call due at {:?})",
                throttle.deadline()
            );
            continue;
        }

        let body = body_doc.translate_y(-scroll_y);
        let container = container_doc.translate_y(-scroll_y);

        let footer = FooterGeometry {
            body,
            footer_height: 30.0,
            offset: opts.bottom_px(),
            viewport_height,
            container_visible: container.intersects_viewport(viewport_height),
        };
        match decide_footer(&footer, footer_stuck) {
            Decision::Stick => footer_stuck = true,
            Decision::Unstick => footer_stuck = false,
            Decision::Hold => {}
        }

        let header = HeaderGeometry {
            body,
            header_height: 40.0,
            offset: opts.top_px(),
        };
        match decide_header(&header, header_stuck) {
            Decision::Stick => header_stuck = true,
            Decision::Unstick => header_stuck = false,
            Decision::Hold => {}
        }

        println!(
            "t={now_ms} scroll_y={scroll_y}: header_stuck={header_stuck} \
             footer_stuck={footer_stuck}"
        );
    }
}
