//! Frame orientation: selector modes and width/height swapping.
//!
//! Two entry points. [`resolve_orientation`] runs every cycle and applies
//! the selector mode. [`align_to_image`] runs once, right after an upload,
//! and turns the frame to match the new image whatever the mode says.
//!
//! ```text
//!     mode        rotate when                     result
//!     ─────────   ─────────────────────────────   ───────────────
//!     auto        image landscape ≠ frame         (larger, smaller)
//!                 landscape (image present)
//!     portrait    frame wider than tall           (smaller, larger)
//!     landscape   frame taller than wide          (larger, smaller)
//! ```

use crate::frame::ImageAsset;
use crate::geometry::Size;

/// Orientation selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrientationMode {
    /// Follow the uploaded image. No image, no rotation.
    #[default]
    Auto,
    /// Keep the frame taller than wide.
    Portrait,
    /// Keep the frame wider than tall.
    Landscape,
}

impl OrientationMode {
    /// Parse `auto`, `portrait`, or `landscape` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            Some(Self::Auto)
        } else if s.eq_ignore_ascii_case("portrait") {
            Some(Self::Portrait)
        } else if s.eq_ignore_ascii_case("landscape") {
            Some(Self::Landscape)
        } else {
            None
        }
    }
}

/// Frame size after orientation, and whether it differs from the input.
///
/// When `changed` is set, the caller must drop any size preset selection
/// and refit the mat.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reoriented {
    pub frame: Size,
    pub changed: bool,
}

impl Reoriented {
    fn unchanged(frame: Size) -> Self {
        Self {
            frame,
            changed: false,
        }
    }

    fn to(original: Size, frame: Size) -> Self {
        Self {
            frame,
            changed: frame != original,
        }
    }
}

/// Apply the orientation selector to a frame size.
///
/// `image_aspect` is the uploaded image's width over height, if any.
/// Squares never count as landscape, so a square image in auto mode is
/// treated as portrait.
///
/// Rotating a square frame leaves it as is and reports no change, which
/// keeps the operation idempotent.
///
/// ```
/// use framelayout::{OrientationMode, Size};
/// use framelayout::orientation::resolve_orientation;
///
/// let r = resolve_orientation(Size::new(20.0, 16.0), OrientationMode::Portrait, None);
/// assert_eq!(r.frame, Size::new(16.0, 20.0));
/// assert!(r.changed);
/// ```
pub fn resolve_orientation(
    frame: Size,
    mode: OrientationMode,
    image_aspect: Option<f64>,
) -> Reoriented {
    let needs_rotation = match mode {
        OrientationMode::Auto => match image_aspect {
            Some(aspect) => (aspect > 1.0) != frame.is_landscape(),
            None => false,
        },
        OrientationMode::Portrait => frame.is_landscape(),
        OrientationMode::Landscape => frame.is_portrait(),
    };
    if !needs_rotation {
        return Reoriented::unchanged(frame);
    }

    let (larger, smaller) = (frame.max_side(), frame.min_side());
    let rotated = match mode {
        OrientationMode::Portrait => Size::new(smaller, larger),
        OrientationMode::Landscape | OrientationMode::Auto => Size::new(larger, smaller),
    };
    Reoriented::to(frame, rotated)
}

/// Turn the frame to match a just-uploaded image.
///
/// Independent of the selector mode: the upload itself is the signal.
/// Swaps width and height when the image's landscape-ness differs from the
/// frame's. An image with a zero side carries no orientation and leaves the
/// frame alone.
pub fn align_to_image(frame: Size, image: &ImageAsset) -> Reoriented {
    if image.aspect().is_none() || image.is_landscape() == frame.is_landscape() {
        return Reoriented::unchanged(frame);
    }
    Reoriented::to(frame, frame.swapped())
}
