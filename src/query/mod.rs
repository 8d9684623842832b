//! Form field / query string parsing into [`Settings`](crate::Settings).
//!
//! Parses strings like `?w=16&h=20&border=2&frame_color=%238B4513` and
//! produces [`Fields`], which overlay onto a base [`Settings`](crate::Settings).
//! Malformed values never abort parsing: the field keeps its previous value
//! and a [`ParseWarning`] is recorded.
//!
//! # Example
//!
//! ```
//! use framelayout::{Pipeline, Size, query};
//!
//! let result = query::parse("size=16x20&border=2&orientation=landscape");
//! assert!(result.warnings.is_empty());
//!
//! let plan = Pipeline::new(result.settings()).plan();
//! assert_eq!(plan.settings.frame_size, Size::new(20.0, 16.0));
//! assert_eq!(plan.settings.mat_size, Size::new(16.0, 12.0));
//! ```
//!
//! # Keys
//!
//! | key (aliases) | value |
//! |---|---|
//! | `frame_width` (`w`, `width`) | inches, > 0 |
//! | `frame_height` (`h`, `height`) | inches, > 0 |
//! | `frame_thickness` (`thickness`) | inches, ≥ 0 |
//! | `frame_color`, `mat_color` | `#RRGGBB` or `#RGB` |
//! | `bg_color` (`bg`), `wall_color` (`wall`) | `#RRGGBB` or `#RGB` |
//! | `mat_width`, `mat_height` | inches, ≥ 0 |
//! | `show_mat`, `fill_image` (`fill`) | `true|false|1|0|yes|no|on|off` |
//! | `orientation` | `auto|portrait|landscape` |
//! | `frame_size` (`size`) | `WxH`, empty = custom |
//! | `mat_border` (`border`) | inches, empty = custom |
//!
//! A frame size preset, when selected, takes precedence over
//! `frame_width` / `frame_height` in the pipeline.

mod convert;
pub mod fields;
mod parse;

pub use fields::Fields;

use alloc::string::String;
use alloc::vec::Vec;

use crate::plan::Settings;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Fields that were present and valid.
    pub fields: Fields,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

impl ParseResult {
    /// Parsed fields applied over [`Settings::default()`].
    pub fn settings(&self) -> Settings {
        self.fields.apply(&Settings::default())
    }
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last valid value wins).
    DuplicateKey { key: &'static str, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (fields, warnings) = parse::parse_query(query);
    if !warnings.is_empty() {
        log::debug!("query parsed with {} warning(s)", warnings.len());
    }
    ParseResult { fields, warnings }
}
