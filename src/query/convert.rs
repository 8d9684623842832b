//! Overlay parsed [`Fields`] onto [`Settings`].

use crate::geometry::ImagePlacement;
use crate::plan::Settings;

use super::fields::Fields;

impl Fields {
    /// Copy of `base` with every present field replaced.
    pub fn apply(&self, base: &Settings) -> Settings {
        let mut s = *base;

        if let Some(w) = self.frame_width {
            s.frame_size.width = w;
        }
        if let Some(h) = self.frame_height {
            s.frame_size.height = h;
        }
        if let Some(t) = self.frame_thickness {
            s.frame_thickness = t;
        }
        if let Some(c) = self.frame_color {
            s.frame_color = c;
        }

        if let Some(w) = self.mat_width {
            s.mat_size.width = w;
        }
        if let Some(h) = self.mat_height {
            s.mat_size.height = h;
        }
        if let Some(c) = self.mat_color {
            s.mat_color = c;
        }

        if let Some(c) = self.background {
            s.background = c;
        }
        if let Some(c) = self.wall {
            s.wall = c;
        }
        if let Some(show) = self.show_mat {
            s.show_mat = show;
        }
        if let Some(fill) = self.fill_image {
            s.placement = if fill {
                ImagePlacement::Fill
            } else {
                ImagePlacement::Fit
            };
        }
        if let Some(mode) = self.orientation {
            s.orientation = mode;
        }
        if let Some(preset) = self.size_preset {
            s.size_preset = preset;
        }
        if let Some(border) = self.border_preset {
            s.border_preset = border;
        }

        s
    }
}
