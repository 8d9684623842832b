//! Pixels-per-inch selection that keeps the rendered frame on screen.

use core::fmt;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::geometry::non_negative;

/// Default scale in pixels per inch, roughly 40% of [`REFERENCE_PPI`].
pub const BASE_SCALE: f64 = 38.0;
/// CSS reference resolution used for the "% of actual size" readout.
pub const REFERENCE_PPI: f64 = 96.0;
/// On-screen bounding box for the outer frame, before padding is reserved.
pub const MAX_WIDTH_PX: f64 = 1600.0;
pub const MAX_HEIGHT_PX: f64 = 800.0;
/// Pixels held back from each bounding-box axis.
pub const RESERVED_PX: f64 = 80.0;
/// Inner openings wider or taller than this (in inches) are "large" and
/// may be scaled below [`BASE_SCALE`].
pub const LARGE_FRAME_WIDTH: f64 = 9.0;
pub const LARGE_FRAME_HEIGHT: f64 = 12.0;

/// Pick a pixels-per-inch scale for a frame with the given inner opening
/// and band thickness, all in inches.
///
/// Frames up to 9×12 always get [`BASE_SCALE`]. Larger frames get the
/// largest scale ≤ [`BASE_SCALE`] at which the outer size fits the
/// bounding box.
///
/// Inputs are expected to be positive; NaN, infinite, and negative values
/// are treated as zero.
///
/// ```
/// use framelayout::scale::{BASE_SCALE, compute_scale};
///
/// assert_eq!(compute_scale(8.0, 10.0, 0.75), BASE_SCALE);
/// // 24×36 is limited by height: 720 / 37.5
/// assert_eq!(compute_scale(24.0, 36.0, 0.75), 19.2);
/// ```
pub fn compute_scale(inner_width: f64, inner_height: f64, thickness: f64) -> f64 {
    let inner_width = non_negative(inner_width);
    let inner_height = non_negative(inner_height);
    let thickness = non_negative(thickness);

    if inner_width <= LARGE_FRAME_WIDTH && inner_height <= LARGE_FRAME_HEIGHT {
        return BASE_SCALE;
    }

    let total_w = inner_width + thickness * 2.0;
    let total_h = inner_height + thickness * 2.0;
    let by_width = (MAX_WIDTH_PX - RESERVED_PX) / total_w;
    let by_height = (MAX_HEIGHT_PX - RESERVED_PX) / total_h;
    let scale = BASE_SCALE.min(by_width).min(by_height);
    log::trace!("large frame {inner_width}x{inner_height}in: {scale:.3} px/in");
    scale
}

/// The chosen scale, formatted for the status line.
///
/// ```
/// use framelayout::ScaleInfo;
///
/// let info = ScaleInfo::new(38.0);
/// assert_eq!(info.percent_of_actual(), 40.0);
/// assert_eq!(
///     info.to_string(),
///     "Scale: 1 inch = 38.0 pixels (40% of actual size)"
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleInfo {
    pub pixels_per_inch: f64,
}

impl ScaleInfo {
    pub const fn new(pixels_per_inch: f64) -> Self {
        Self { pixels_per_inch }
    }

    /// Scale relative to [`REFERENCE_PPI`], rounded to a whole percent.
    pub fn percent_of_actual(&self) -> f64 {
        (self.pixels_per_inch / REFERENCE_PPI * 100.0).round()
    }
}

impl fmt::Display for ScaleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: 1 inch = {:.1} pixels ({}% of actual size)",
            self.pixels_per_inch,
            self.percent_of_actual()
        )
    }
}
