//! Parsed representation of a query string.

use crate::color::Rgb;
use crate::frame::SizePreset;
use crate::orientation::OrientationMode;

/// Configurator fields found in a query string.
///
/// `None` means the key was absent (or invalid). For the two preset
/// selections, `Some(None)` means "custom" was explicitly chosen.
///
/// Produced by [`crate::query::parse()`], consumed by
/// [`apply()`](Self::apply).
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Fields {
    pub frame_width: Option<f64>,
    pub frame_height: Option<f64>,
    pub frame_thickness: Option<f64>,
    pub frame_color: Option<Rgb>,
    pub mat_width: Option<f64>,
    pub mat_height: Option<f64>,
    pub mat_color: Option<Rgb>,
    pub background: Option<Rgb>,
    pub wall: Option<Rgb>,
    pub show_mat: Option<bool>,
    pub fill_image: Option<bool>,
    pub orientation: Option<OrientationMode>,
    pub size_preset: Option<Option<SizePreset>>,
    pub border_preset: Option<Option<f64>>,
}

impl Fields {
    /// Create empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field was set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
