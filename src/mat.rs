//! Mat opening sizing from a border preset or manual dimensions.
//!
//! Whatever the input, the result satisfies `0 ≤ mat ≤ frame` on both axes.

use crate::geometry::{Size, non_negative};

/// Opening always left between the two borders on the short axis, in inches
/// (`smallest / 2 - MIN_SLACK / 2` caps the border).
pub const MIN_SLACK: f64 = 0.25;

/// How the mat opening is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MatSizing {
    /// Border preset: uniform border width in inches, shrunk for small frames.
    Border(f64),
    /// Opening entered directly, only clamped to the frame.
    Manual(Size),
}

/// Compute the mat opening for a frame's inner size, in inches.
///
/// # Border presets
///
/// The border is scaled down for small frames, by the frame's shorter side:
///
/// | shorter side | border |
/// |---|---|
/// | > 12 | `border` |
/// | 6 < s ≤ 12 | `max(0.75, border × 0.75)` |
/// | ≤ 6 | `max(0.5, border × 0.5)` |
///
/// and then capped at `s / 2 − 0.125` so at least 0.25in of opening
/// remains. The opening is the frame minus the border on both sides.
///
/// # Manual sizing
///
/// Each axis is clamped to the frame.
///
/// Non-finite or negative frame sides and manual dimensions count as zero.
///
/// ```
/// use framelayout::{MatSizing, Size};
/// use framelayout::mat::fit_mat;
///
/// let mat = fit_mat(Size::new(16.0, 20.0), MatSizing::Border(2.0));
/// assert_eq!(mat, Size::new(12.0, 16.0));
///
/// let mat = fit_mat(Size::new(5.0, 7.0), MatSizing::Manual(Size::new(6.0, 5.0)));
/// assert_eq!(mat, Size::new(5.0, 5.0));
/// ```
pub fn fit_mat(frame: Size, sizing: MatSizing) -> Size {
    let frame = frame.sanitized();
    let mat = match sizing {
        MatSizing::Border(border) => {
            let border = effective_border(frame.min_side(), non_negative(border));
            Size::new(frame.width - border * 2.0, frame.height - border * 2.0)
        }
        MatSizing::Manual(current) => current.sanitized(),
    };
    let fitted = mat.clamp_to(frame).at_least(0.0);
    if let MatSizing::Manual(current) = sizing
        && fitted != current
    {
        log::debug!(
            "mat {}x{} clamped to {}x{} for frame {}x{}",
            current.width,
            current.height,
            fitted.width,
            fitted.height,
            frame.width,
            frame.height
        );
    }
    fitted
}

/// Border width actually used for a preset on a frame whose shorter side is
/// `smallest`. Never negative.
pub fn effective_border(smallest: f64, border: f64) -> f64 {
    let scaled = if smallest <= 6.0 {
        (border * 0.5).max(0.5)
    } else if smallest <= 12.0 {
        (border * 0.75).max(0.75)
    } else {
        border
    };
    scaled.min(smallest / 2.0 - MIN_SLACK / 2.0).max(0.0)
}
