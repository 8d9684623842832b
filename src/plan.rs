//! Per-cycle pipeline: form state in, resolved form state and scene out.
//!
//! Every cycle runs the same stages in the same order, whatever changed:
//!
//! 1. size preset → frame dimensions
//! 2. upload alignment (only for a just-uploaded image)
//! 3. orientation selector
//! 4. mat fitting
//! 5. scale selection
//! 6. rendering
//!
//! All stages are idempotent, so re-running the pipeline on its own output
//! changes nothing.
//!
//! # Example
//!
//! ```
//! use framelayout::{ImageAsset, OrientationMode, Pipeline, Settings, Size, SizePreset};
//!
//! let settings = Settings {
//!     size_preset: SizePreset::parse("16x20"),
//!     border_preset: Some(2.0),
//!     ..Settings::default()
//! };
//! let plan = Pipeline::new(settings)
//!     .image_uploaded(ImageAsset::new(4000, 3000))
//!     .plan();
//!
//! // Landscape photo turns the 16×20 preset into a custom 20×16 frame.
//! assert!(plan.rotated);
//! assert_eq!(plan.settings.frame_size, Size::new(20.0, 16.0));
//! assert_eq!(plan.settings.size_preset, None);
//! assert_eq!(plan.settings.mat_size, Size::new(16.0, 12.0));
//! assert_eq!(plan.settings.orientation, OrientationMode::Auto);
//! ```

use crate::color::Rgb;
use crate::frame::{FrameSpec, ImageAsset, MatSpec, SizePreset};
use crate::geometry::{ImagePlacement, Size};
use crate::mat::{MatSizing, fit_mat};
use crate::orientation::{OrientationMode, align_to_image, resolve_orientation};
use crate::render::{Composition, Scene, render};
use crate::scale::{ScaleInfo, compute_scale};

/// Default frame band thickness, in inches.
pub const DEFAULT_THICKNESS: f64 = 0.75;

/// Snapshot of every configurator input for one cycle.
///
/// The caller owns the form; the pipeline reads a copy and hands back a
/// resolved copy in [`Plan::settings`] to write back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Frame inner opening, in inches.
    pub frame_size: Size,
    /// Frame band thickness, in inches.
    pub frame_thickness: f64,
    pub frame_color: Rgb,
    /// Mat image opening, in inches. Overwritten when a border preset is set.
    pub mat_size: Size,
    pub mat_color: Rgb,
    /// Shown behind the image inside the opening.
    pub background: Rgb,
    pub wall: Rgb,
    pub show_mat: bool,
    pub placement: ImagePlacement,
    pub orientation: OrientationMode,
    /// Selected frame size, or `None` for custom dimensions.
    pub size_preset: Option<SizePreset>,
    /// Selected mat border in inches, or `None` for manual mat dimensions.
    pub border_preset: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_size: Size::new(8.0, 10.0),
            frame_thickness: DEFAULT_THICKNESS,
            frame_color: Rgb::BLACK,
            mat_size: Size::new(6.0, 8.0),
            mat_color: Rgb::WHITE,
            background: Rgb::WHITE,
            wall: Rgb::WALL,
            show_mat: true,
            placement: ImagePlacement::Fit,
            orientation: OrientationMode::Auto,
            size_preset: None,
            border_preset: None,
        }
    }
}

impl Settings {
    /// How the mat is sized: from the border preset if one is selected.
    pub fn mat_sizing(&self) -> MatSizing {
        match self.border_preset {
            Some(border) => MatSizing::Border(border),
            None => MatSizing::Manual(self.mat_size),
        }
    }

    pub fn frame_spec(&self) -> FrameSpec {
        FrameSpec::new(self.frame_size, self.frame_thickness, self.frame_color)
    }

    pub fn mat_spec(&self) -> MatSpec {
        MatSpec::new(self.mat_size, self.mat_color)
    }

    /// Renderer input for these settings.
    pub fn composition(&self, image: Option<ImageAsset>) -> Composition {
        Composition {
            frame: self.frame_spec(),
            mat: self.mat_spec(),
            show_mat: self.show_mat,
            placement: self.placement,
            image,
            background: self.background,
            wall: self.wall,
        }
    }
}

/// Builder for one pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    settings: Settings,
    image: Option<ImageAsset>,
    just_uploaded: bool,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            image: None,
            just_uploaded: false,
        }
    }

    /// An image already on screen from an earlier cycle.
    pub fn image(mut self, image: ImageAsset) -> Self {
        self.image = Some(image);
        self.just_uploaded = false;
        self
    }

    /// An image that finished decoding this cycle.
    ///
    /// The frame is turned to match the image regardless of the selector.
    /// If that changes the frame, the selector goes back to
    /// [`OrientationMode::Auto`] and the size preset is cleared, so later
    /// cycles keep the new orientation.
    pub fn image_uploaded(mut self, image: ImageAsset) -> Self {
        self.image = Some(image);
        self.just_uploaded = true;
        self
    }

    /// Run every stage and render.
    pub fn plan(&self) -> Plan {
        let mut s = self.settings;
        let mut rotated = false;

        if let Some(preset) = s.size_preset {
            s.frame_size = preset.size();
        }

        if let (true, Some(image)) = (self.just_uploaded, &self.image) {
            let aligned = align_to_image(s.frame_size, image);
            if aligned.changed {
                log::debug!(
                    "upload {}x{} turned frame to {}x{}",
                    image.width,
                    image.height,
                    aligned.frame.width,
                    aligned.frame.height
                );
                s.frame_size = aligned.frame;
                s.size_preset = None;
                s.orientation = OrientationMode::Auto;
                rotated = true;
            }
        }

        let image_aspect = self.image.and_then(|img| img.aspect());
        let oriented = resolve_orientation(s.frame_size, s.orientation, image_aspect);
        if oriented.changed {
            log::debug!(
                "{:?} turned frame to {}x{}, size preset cleared",
                s.orientation,
                oriented.frame.width,
                oriented.frame.height
            );
            s.frame_size = oriented.frame;
            s.size_preset = None;
            rotated = true;
        }

        s.mat_size = fit_mat(s.frame_size, s.mat_sizing());

        let pixels_per_inch = compute_scale(
            s.frame_size.width,
            s.frame_size.height,
            s.frame_thickness,
        );
        let scene = render(&s.composition(self.image), pixels_per_inch);

        Plan {
            settings: s,
            rotated,
            scale: ScaleInfo::new(pixels_per_inch),
            scene,
        }
    }
}

/// Result of one pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    /// Resolved form state: frame possibly turned, size preset possibly
    /// cleared, mat fitted.
    pub settings: Settings,
    /// The frame's width and height were exchanged this cycle.
    pub rotated: bool,
    /// Scale used, for the status line.
    pub scale: ScaleInfo,
    pub scene: Scene,
}
