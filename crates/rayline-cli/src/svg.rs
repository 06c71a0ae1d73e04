//! Hand-rolled SVG writer for traced scenes.
//!
//! Emits a dark frame, styled boundary lines, one line per resolved ray
//! from its source to the nearest hit, and optional hit-point markers.

use rayline::{ResolvedRay, Scene};
use rayline_ir::SceneDoc;
use std::fmt::Write;

/// Default stroke for the frame and unstyled boundaries.
const BOUNDARY_STROKE: &str = "#ffffff";
/// Stroke for ray lines.
const RAY_STROKE: &str = "#ffffff";
/// Stroke for hit-point markers.
const HIT_STROKE: &str = "#ff0000";
/// Marker diameter, matching the legacy renderer's 5-unit hit circles.
const HIT_DIAMETER: f64 = 5.0;

/// Render a traced scene to an SVG string.
///
/// `traces` must come from `scene.trace()` on the same scene; boundary
/// stroke colors are looked up in the document (the kernel does not
/// carry styling).
pub fn render_svg(
    doc: &SceneDoc,
    scene: &Scene,
    traces: &[Vec<ResolvedRay>],
    hit_points: bool,
) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail; unwraps below are on fmt::Write.
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        doc.width, doc.height, doc.width, doc.height
    )
    .unwrap();
    writeln!(
        out,
        r##"  <rect width="{}" height="{}" fill="#000000"/>"##,
        doc.width, doc.height
    )
    .unwrap();

    // Frame first, then obstacles: styling for obstacle i lives at
    // doc.boundaries[i], offset by the four frame segments.
    for (i, seg) in scene.boundaries().iter().enumerate() {
        let stroke = i
            .checked_sub(4)
            .and_then(|obstacle| doc.boundaries.get(obstacle))
            .and_then(|b| b.stroke.as_deref())
            .unwrap_or(BOUNDARY_STROKE);
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            seg.start.x, seg.start.y, seg.end.x, seg.end.y, stroke
        )
        .unwrap();
    }

    for trace in traces {
        for resolved in trace {
            // Unresolved rays have no endpoint and are not drawn.
            let Some(hit) = resolved.hit else { continue };
            writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="0.35"/>"#,
                resolved.ray.origin.x, resolved.ray.origin.y, hit.x, hit.y, RAY_STROKE
            )
            .unwrap();
        }
    }

    if hit_points {
        for trace in traces {
            for resolved in trace {
                let Some(hit) = resolved.hit else { continue };
                writeln!(
                    out,
                    r#"  <circle cx="{}" cy="{}" r="{}" stroke="{}" fill="none"/>"#,
                    hit.x,
                    hit.y,
                    HIT_DIAMETER / 2.0,
                    HIT_STROKE
                )
                .unwrap();
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
