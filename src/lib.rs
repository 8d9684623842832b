//! Frame, mat, and image layout for a picture-framing preview.
//!
//! Pure geometry: physical inches in, a pixel draw list out. No I/O, no
//! pixel buffers, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`]: Sizes, rects, and fit/fill image placement
//! - [`scale`]: Pixels-per-inch selection for on-screen display
//! - [`orientation`]: Portrait/landscape selector and upload alignment
//! - [`mat`]: Mat opening sizing from border presets or manual input
//! - [`render`]: Canvas geometry and ordered draw commands
//! - [`plan`]: Per-cycle pipeline from form state to a rendered scene
//! - `query`: Form field / query string parsing (feature `query`)
//! - `svg`: SVG output of a rendered scene (feature `svg`)
//!
//! # Example
//!
//! ```
//! use framelayout::{ImageAsset, Pipeline, Settings, Size};
//!
//! let settings = Settings {
//!     frame_size: Size::new(16.0, 20.0),
//!     border_preset: Some(2.0),
//!     ..Settings::default()
//! };
//! let plan = Pipeline::new(settings)
//!     .image(ImageAsset::new(3000, 4000))
//!     .plan();
//!
//! assert_eq!(plan.settings.mat_size, Size::new(12.0, 16.0));
//! // 16×20 is too tall for the base scale: 720px / 21.5in
//! assert!((plan.scale.pixels_per_inch - 720.0 / 21.5).abs() < 1e-9);
//! assert_eq!(plan.scale.to_string(), "Scale: 1 inch = 33.5 pixels (35% of actual size)");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod color;
pub mod frame;
pub mod geometry;
pub mod mat;
pub mod orientation;
pub mod scale;

#[cfg(feature = "alloc")]
pub mod plan;
#[cfg(feature = "alloc")]
pub mod render;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use color::Rgb;
pub use frame::{FrameSpec, ImageAsset, MatSpec, SizePreset};
pub use geometry::{ImagePlacement, Rect, Size, place_image};
pub use mat::{MatSizing, fit_mat};
pub use orientation::{OrientationMode, Reoriented, align_to_image, resolve_orientation};
pub use scale::{ScaleInfo, compute_scale};

#[cfg(feature = "alloc")]
pub use plan::{Pipeline, Plan, Settings};
#[cfg(feature = "alloc")]
pub use render::{CanvasGeometry, Composition, DrawCommand, Scene, render};
