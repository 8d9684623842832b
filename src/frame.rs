//! Physical inputs to one render cycle: frame, mat, image, and presets.
//!
//! All values here are plain copies. The engine never holds them across
//! calls; callers rebuild them from form state each cycle.

use crate::color::Rgb;
use crate::geometry::{Size, non_negative};

/// The frame moulding: inner opening in inches, band thickness, color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameSpec {
    /// Visible artwork area bounded by the frame's inner edge, in inches.
    pub inner: Size,
    /// Width of the moulding band on each side, in inches.
    pub thickness: f64,
    pub color: Rgb,
}

impl FrameSpec {
    pub const fn new(inner: Size, thickness: f64, color: Rgb) -> Self {
        Self {
            inner,
            thickness,
            color,
        }
    }

    /// Outer size including the band on both sides, in inches.
    ///
    /// Thickness below zero counts as zero.
    pub fn outer(&self) -> Size {
        self.inner.sanitized().expanded(non_negative(self.thickness))
    }
}

/// The mat: image-opening size in inches and mat board color.
///
/// After [`fit_mat`](crate::mat::fit_mat) the opening never exceeds the
/// frame's inner size on either axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MatSpec {
    /// Image opening cut into the mat, in inches.
    pub opening: Size,
    pub color: Rgb,
}

impl MatSpec {
    pub const fn new(opening: Size, color: Rgb) -> Self {
        Self { opening, color }
    }
}

/// Pixel dimensions of a decoded image.
///
/// Created once decoding finishes; a new upload replaces it wholesale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. `None` for a zero dimension.
    pub fn aspect(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f64 / self.height as f64)
        }
    }

    /// Strictly wider than tall.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// A named frame size such as `16x20`, in inches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizePreset {
    pub width: f64,
    pub height: f64,
}

impl SizePreset {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Parse a `WxH` token. Accepts `x`, `X`, or `×` as separator.
    ///
    /// Returns `None` (meaning "custom size") unless both parts are
    /// positive finite numbers.
    ///
    /// ```
    /// use framelayout::SizePreset;
    ///
    /// assert_eq!(SizePreset::parse("16x20"), Some(SizePreset::new(16.0, 20.0)));
    /// assert_eq!(SizePreset::parse("8.5X11"), Some(SizePreset::new(8.5, 11.0)));
    /// assert_eq!(SizePreset::parse(""), None);
    /// assert_eq!(SizePreset::parse("0x10"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (w, h) = token
            .split_once(['x', 'X'])
            .or_else(|| token.split_once('×'))?;
        let width = parse_positive(w)?;
        let height = parse_positive(h)?;
        Some(Self::new(width, height))
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

fn parse_positive(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
