//! SVG serialization for composed forest scenes.

use forest_core::branch::PathFragment;
use forest_core::forest::Scene;
use std::fmt::Write;

/// Serializes a scene into a standalone SVG document.
///
/// The document is canvas-sized with a solid background rect, followed
/// by one stroke-only `<path>` per tree: stroke width 2, no fill,
/// stroke color equal to that tree's palette entry.
pub fn render_svg(scene: &Scene) -> String {
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    );
    let _ = writeln!(
        svg,
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        scene.width, scene.height
    );
    let _ = writeln!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        scene.background
    );

    for tree in &scene.trees {
        let _ = write!(
            svg,
            r#"<path d="{}" stroke="{}" stroke-width="2" fill="none"/>"#,
            path_data(&tree.fragment),
            tree.color
        );
    }

    svg.push_str("\n</svg>");
    svg
}

/// Concatenated `M x y L x y` commands for one tree, one per line-draw
/// command, coordinates rounded to two decimals.
pub fn path_data(fragment: &PathFragment) -> String {
    let mut d = String::new();
    for line in fragment {
        let _ = write!(
            d,
            "M {:.2} {:.2} L {:.2} {:.2} ",
            line.start.x, line.start.y, line.end.x, line.end.y
        );
    }
    d
}
