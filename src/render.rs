//! Composite preview: pixel geometry and the ordered draw list.
//!
//! [`render`] converts inches to pixels at a given scale, lays out the
//! frame band, mat, and image, and emits [`DrawCommand`]s for a 2D canvas.
//! It holds no state; the whole scene is rebuilt every call.
//!
//! ```text
//!     ┌ canvas (wall) ─────────────────────────┐
//!     │  padding                               │
//!     │   ┌ outer (frame color) ───────────┐   │
//!     │   │ ┌ inner (mat color) ─────────┐ │   │
//!     │   │ │   ┌ opening (clip) ────┐   │ │   │
//!     │   │ │   │  background + image│   │ │   │
//!     │   │ │   └────────────────────┘   │ │   │
//!     │   │ └────────────────────────────┘ │   │
//!     │   └────────────────────────────────┘   │
//!     └────────────────────────────────────────┘
//! ```

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::color::Rgb;
use crate::frame::{FrameSpec, ImageAsset, MatSpec};
use crate::geometry::{ImagePlacement, Rect, Size, non_negative, place_image};

/// Wall margin around the outer frame, in pixels.
pub const PADDING_PX: f64 = 40.0;
/// Smallest canvas side, so degenerate frames still render something.
pub const MIN_CANVAS_PX: f64 = 200.0;
/// Channel shift for the frame bevel: outer edge darker, inner edge lighter.
pub const BEVEL_DELTA: i16 = 24;
/// Channel shift for the mat opening edge.
pub const MAT_EDGE_DELTA: i16 = -20;

/// One drawing primitive, in paint order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle with a solid color.
    FillRect { rect: Rect, color: Rgb },
    /// Stroke a rectangle outline. The stroke is centered on the rect edge.
    StrokeRect {
        rect: Rect,
        color: Rgb,
        line_width: f64,
    },
    /// Restrict subsequent drawing to `rect` until the matching
    /// [`Unclip`](Self::Unclip).
    Clip(Rect),
    /// Drop the most recent clip.
    Unclip,
    /// Draw the image scaled into `rect`. May extend past the active clip.
    Image(Rect),
}

/// Everything the renderer needs for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Composition {
    pub frame: FrameSpec,
    pub mat: MatSpec,
    pub show_mat: bool,
    pub placement: ImagePlacement,
    pub image: Option<ImageAsset>,
    /// Shown behind the image inside the opening.
    pub background: Rgb,
    /// Canvas background around the frame.
    pub wall: Rgb,
}

/// Pixel geometry of a rendered scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub pixels_per_inch: f64,
    /// Canvas size to allocate.
    pub canvas: Size,
    pub padding: f64,
    /// Outer edge of the frame band.
    pub outer: Rect,
    /// Inner edge of the frame band.
    pub inner: Rect,
    /// Where the image goes: the mat opening, or `inner` when the mat is hidden.
    pub opening: Rect,
    /// Image rect before clipping, when an image is drawn.
    pub image: Option<Rect>,
    /// Frame bevel stroke width.
    pub bevel_width: f64,
}

/// A rendered scene: geometry plus the ordered draw list.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub geometry: CanvasGeometry,
    /// Canvas background color (the wall).
    pub background: Rgb,
    pub commands: Vec<DrawCommand>,
}

/// Render a composition at `pixels_per_inch`.
///
/// Negative or non-finite inch values and scales count as zero. The mat
/// opening is clamped to the frame's inner size again here, so a mat that
/// skipped [`fit_mat`](crate::mat::fit_mat) still stays inside the frame.
///
/// The mat edge stroke is only emitted for an opening with area; a zero-size
/// opening would otherwise leave a stray one-pixel outline in the mat.
///
/// ```
/// use framelayout::render::{Composition, DrawCommand, render};
/// use framelayout::{FrameSpec, ImagePlacement, MatSpec, Rgb, Size};
///
/// let scene = render(
///     &Composition {
///         frame: FrameSpec::new(Size::new(8.0, 10.0), 1.0, Rgb::BLACK),
///         mat: MatSpec::new(Size::new(6.0, 8.0), Rgb::WHITE),
///         show_mat: true,
///         placement: ImagePlacement::Fit,
///         image: None,
///         background: Rgb::WHITE,
///         wall: Rgb::WALL,
///     },
///     10.0,
/// );
/// assert_eq!(scene.geometry.canvas, Size::new(200.0, 200.0));
/// assert!(matches!(scene.commands[0], DrawCommand::FillRect { .. }));
/// ```
pub fn render(composition: &Composition, pixels_per_inch: f64) -> Scene {
    let scale = non_negative(pixels_per_inch);
    let frame = &composition.frame;
    let inner_in = frame.inner.sanitized();

    let thickness_px = non_negative(frame.thickness) * scale;
    let inner_px = inner_in.scaled(scale);
    let outer_px = frame.outer().scaled(scale);
    let mat_px = composition
        .mat
        .opening
        .sanitized()
        .clamp_to(inner_in)
        .scaled(scale);

    let canvas = outer_px.expanded(PADDING_PX).at_least(MIN_CANVAS_PX);
    let outer = Rect::at(PADDING_PX, PADDING_PX, outer_px);
    let inner = Rect::at(PADDING_PX + thickness_px, PADDING_PX + thickness_px, inner_px);
    log::trace!(
        "canvas {}x{} at {scale:.3} px/in",
        canvas.width,
        canvas.height
    );

    let mut commands = Vec::with_capacity(12);
    let bevel_width = frame_band(&mut commands, outer, inner, thickness_px, frame.color);

    let opening = if composition.show_mat {
        commands.push(DrawCommand::FillRect {
            rect: inner,
            color: composition.mat.color,
        });
        inner.center_within(mat_px)
    } else {
        inner
    };

    let image = composition
        .image
        .and_then(|img| place_image(opening, img.width, img.height, composition.placement));

    commands.push(DrawCommand::Clip(opening));
    commands.push(DrawCommand::FillRect {
        rect: opening,
        color: composition.background,
    });
    if let Some(rect) = image {
        commands.push(DrawCommand::Image(rect));
    }
    commands.push(DrawCommand::Unclip);

    if composition.show_mat && !opening.is_empty() {
        commands.push(DrawCommand::StrokeRect {
            rect: opening.inset(0.5),
            color: composition.mat.color.adjust(MAT_EDGE_DELTA),
            line_width: (scale * 0.01).max(1.0),
        });
    }

    Scene {
        geometry: CanvasGeometry {
            pixels_per_inch: scale,
            canvas,
            padding: PADDING_PX,
            outer,
            inner,
            opening,
            image,
            bevel_width,
        },
        background: composition.wall,
        commands,
    }
}

/// Frame band with a simulated bevel. Returns the bevel stroke width.
fn frame_band(
    commands: &mut Vec<DrawCommand>,
    outer: Rect,
    inner: Rect,
    thickness_px: f64,
    color: Rgb,
) -> f64 {
    commands.push(DrawCommand::FillRect { rect: outer, color });
    commands.push(DrawCommand::FillRect {
        rect: inner,
        color: Rgb::WHITE,
    });

    let stroke = (thickness_px * 0.06).round().max(1.0);
    commands.push(DrawCommand::StrokeRect {
        rect: outer.inset(stroke / 2.0),
        color: color.adjust(-BEVEL_DELTA),
        line_width: stroke,
    });
    if !inner.is_empty() {
        commands.push(DrawCommand::StrokeRect {
            rect: inner.inset(0.5),
            color: color.adjust(BEVEL_DELTA),
            line_width: stroke,
        });
    }
    stroke
}

impl Scene {
    /// Canvas size in whole pixels, truncated the way a 2D canvas does.
    pub fn canvas_pixels(&self) -> (u32, u32) {
        let Size { width, height } = self.geometry.canvas;
        (width as u32, height as u32)
    }
}
