//! SVG output for a rendered [`Scene`].
//!
//! Writes the draw list as a standalone SVG document: the wall as a full
//! canvas rect, fills and strokes in paint order, clip regions as
//! `<clipPath>` groups, and the image blit as `<image>`.
//!
//! # Example
//!
//! ```
//! use framelayout::{ImageAsset, Pipeline, Settings, svg::render_scene_svg};
//!
//! let plan = Pipeline::new(Settings::default())
//!     .image(ImageAsset::new(3000, 4000))
//!     .plan();
//!
//! let svg = render_scene_svg(&plan.scene, Some("photo.jpg"));
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"href="photo.jpg""#));
//! ```

use crate::geometry::Rect;
use crate::render::{DrawCommand, Scene};

/// Fill used for the image rect when no `href` is given.
const PLACEHOLDER_FILL: &str = "#9aa7b4";

/// Render a scene into a complete SVG document.
///
/// `image_href` becomes the `href` of every image blit. With `None`, the
/// image rect is drawn as a flat placeholder so the placement stays visible.
pub fn render_scene_svg(scene: &Scene, image_href: Option<&str>) -> String {
    let canvas = scene.geometry.canvas;
    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(canvas.width),
        h = fmt_num(canvas.height),
    ));
    svg.push('\n');
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        fmt_num(canvas.width),
        fmt_num(canvas.height),
        scene.background
    ));

    let mut open_clips = 0usize;
    let mut next_clip_id = 0usize;

    for cmd in &scene.commands {
        match *cmd {
            DrawCommand::FillRect { rect, color } => {
                svg.push_str(&format!("<rect {} fill=\"{color}\"/>\n", rect_attrs(&rect)));
            }
            DrawCommand::StrokeRect {
                rect,
                color,
                line_width,
            } => {
                svg.push_str(&format!(
                    "<rect {} fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\"/>\n",
                    rect_attrs(&rect),
                    fmt_num(line_width)
                ));
            }
            DrawCommand::Clip(rect) => {
                let id = next_clip_id;
                next_clip_id += 1;
                svg.push_str(&format!(
                    "<clipPath id=\"clip{id}\"><rect {}/></clipPath>\n",
                    rect_attrs(&rect)
                ));
                svg.push_str(&format!("<g clip-path=\"url(#clip{id})\">\n"));
                open_clips += 1;
            }
            DrawCommand::Unclip => {
                if open_clips > 0 {
                    svg.push_str("</g>\n");
                    open_clips -= 1;
                }
            }
            DrawCommand::Image(rect) => match image_href {
                Some(href) => {
                    svg.push_str(&format!(
                        "<image {} href=\"{}\" preserveAspectRatio=\"none\"/>\n",
                        rect_attrs(&rect),
                        escape_xml(href)
                    ));
                }
                None => {
                    svg.push_str(&format!(
                        "<rect {} fill=\"{PLACEHOLDER_FILL}\"/>\n",
                        rect_attrs(&rect)
                    ));
                }
            },
        }
    }

    for _ in 0..open_clips {
        svg.push_str("</g>\n");
    }
    svg.push_str("</svg>\n");
    svg
}

fn rect_attrs(r: &Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        fmt_num(r.x),
        fmt_num(r.y),
        fmt_num(r.width.max(0.0)),
        fmt_num(r.height.max(0.0))
    )
}

/// Two decimals, trailing zeros dropped: `40`, `40.5`, `533.33`.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        String::from("0")
    } else {
        String::from(s)
    }
}

/// Escape special characters for XML attribute values.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
