//! Sizes, rectangles, and image placement inside an opening.
//!
//! Pure arithmetic on `f64`. A [`Size`] is in inches or pixels depending on
//! the caller; nothing in this module knows which. Everything here is total:
//! degenerate inputs produce empty rects or `None`, never NaN.
//!
//! # Example
//!
//! ```
//! use framelayout::{ImagePlacement, Rect};
//! use framelayout::geometry::place_image;
//!
//! // 4:3 photo in a 3:4 opening: fit matches the width, centers vertically.
//! let opening = Rect::new(0.0, 0.0, 300.0, 400.0);
//! let drawn = place_image(opening, 4000, 3000, ImagePlacement::Fit).unwrap();
//! assert_eq!(drawn, Rect::new(0.0, 87.5, 300.0, 225.0));
//! ```

/// How to place an image inside its opening.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImagePlacement {
    /// Scale so the whole image is visible, preserving aspect ratio ("contain").
    /// Leaves background margin on one axis.
    #[default]
    Fit,
    /// Scale so the image covers the whole opening, preserving aspect ratio
    /// ("cover"). Overflows one axis; the active clip crops it.
    Fill,
}

/// Width × height. Inches or pixels depending on context.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Strictly wider than tall. Squares are not landscape.
    pub fn is_landscape(self) -> bool {
        self.width > self.height
    }

    /// Strictly taller than wide.
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    /// Width and height exchanged.
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// The shorter side.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// The longer side.
    pub fn max_side(self) -> f64 {
        self.width.max(self.height)
    }

    /// Multiply both axes by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Grow both axes by `amount` on each side (`amount * 2` per axis).
    pub fn expanded(self, amount: f64) -> Self {
        Self::new(self.width + amount * 2.0, self.height + amount * 2.0)
    }

    /// Per-axis minimum with `bound`.
    pub fn clamp_to(self, bound: Size) -> Self {
        Self::new(self.width.min(bound.width), self.height.min(bound.height))
    }

    /// Per-axis maximum with `floor`.
    pub fn at_least(self, floor: f64) -> Self {
        Self::new(self.width.max(floor), self.height.max(floor))
    }

    /// Replace NaN, infinite, and negative components with zero.
    pub fn sanitized(self) -> Self {
        Self::new(non_negative(self.width), non_negative(self.height))
    }
}

/// Axis-aligned rectangle in pixel coordinates. Origin is top-left.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of `size` with its top-left corner at `(x, y)`.
    pub const fn at(x: f64, y: f64, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Zero or negative area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Shrink by `amount` on every side. Width and height stop at zero.
    pub fn inset(self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - amount * 2.0).max(0.0),
            height: (self.height - amount * 2.0).max(0.0),
        }
    }

    /// A rect of `size` centered on this one. Offsets go negative when
    /// `size` is larger on an axis.
    pub fn center(&self, size: Size) -> Self {
        Self {
            x: self.x + (self.width - size.width) / 2.0,
            y: self.y + (self.height - size.height) / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Like [`center`](Self::center), but never offsets up or left of this
    /// rect's origin.
    pub fn center_within(&self, size: Size) -> Self {
        Self {
            x: self.x + ((self.width - size.width) / 2.0).max(0.0),
            y: self.y + ((self.height - size.height) / 2.0).max(0.0),
            width: size.width,
            height: size.height,
        }
    }

    /// Whether `other` lies entirely inside this rect, with `epsilon` slack.
    pub fn contains_rect(&self, other: &Rect, epsilon: f64) -> bool {
        other.x >= self.x - epsilon
            && other.y >= self.y - epsilon
            && other.right() <= self.right() + epsilon
            && other.bottom() <= self.bottom() + epsilon
    }
}

/// Compute where an image of `image_w`×`image_h` pixels is drawn inside
/// `opening`, centered on both axes.
///
/// Returns `None` when the opening has no area or the image has a zero
/// dimension; the caller leaves the opening showing its background.
pub fn place_image(
    opening: Rect,
    image_w: u32,
    image_h: u32,
    placement: ImagePlacement,
) -> Option<Rect> {
    if opening.is_empty() || image_w == 0 || image_h == 0 {
        return None;
    }
    let image_aspect = image_w as f64 / image_h as f64;
    let drawn = scaled_to_opening(image_aspect, opening.size(), placement);
    Some(opening.center(drawn))
}

/// Scale an aspect ratio to an opening. One axis always matches the opening
/// exactly; fit keeps the other ≤ opening, fill keeps it ≥ opening.
fn scaled_to_opening(image_aspect: f64, opening: Size, placement: ImagePlacement) -> Size {
    let opening_is_wider = opening.width / opening.height > image_aspect;
    let match_width = match placement {
        ImagePlacement::Fit => !opening_is_wider,
        ImagePlacement::Fill => opening_is_wider,
    };
    if match_width {
        Size::new(opening.width, opening.width / image_aspect)
    } else {
        Size::new(opening.height * image_aspect, opening.height)
    }
}

/// NaN, infinite, and negative values become zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
