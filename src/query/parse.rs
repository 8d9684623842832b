//! Query string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::fields::Fields;
use crate::color::Rgb;
use crate::frame::SizePreset;
use crate::orientation::OrientationMode;

/// Parse a query string into Fields + warnings.
pub(crate) fn parse_query(query: &str) -> (Fields, Vec<ParseWarning>) {
    let mut fields = Fields::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        match canonical_key(key.trim()) {
            Some(key) => dispatch_key(key, &value, &mut fields, &mut warnings),
            None => warnings.push(ParseWarning::KeyNotRecognized { key, value }),
        }
    }

    (fields, warnings)
}

/// Map aliases onto one canonical key name.
fn canonical_key(key: &str) -> Option<&'static str> {
    let canonical = match key {
        "frame_width" | "w" | "width" => "frame_width",
        "frame_height" | "h" | "height" => "frame_height",
        "frame_thickness" | "thickness" => "frame_thickness",
        "frame_color" => "frame_color",
        "mat_width" => "mat_width",
        "mat_height" => "mat_height",
        "mat_color" => "mat_color",
        "bg_color" | "bg" => "bg_color",
        "wall_color" | "wall" => "wall_color",
        "show_mat" => "show_mat",
        "fill_image" | "fill" => "fill_image",
        "orientation" => "orientation",
        "frame_size" | "size" => "frame_size",
        "mat_border" | "border" => "mat_border",
        _ => return None,
    };
    Some(canonical)
}

fn dispatch_key(
    key: &'static str,
    value: &str,
    fields: &mut Fields,
    warnings: &mut Vec<ParseWarning>,
) {
    let mut out = Setter {
        key,
        value,
        warnings,
    };
    match key {
        // Dimensions
        "frame_width" => out.set(&mut fields.frame_width, parse_positive(value), POSITIVE_REASON),
        "frame_height" => out.set(&mut fields.frame_height, parse_positive(value), POSITIVE_REASON),
        "frame_thickness" => {
            out.set(&mut fields.frame_thickness, parse_non_negative(value), NON_NEGATIVE_REASON);
        }
        "mat_width" => out.set(&mut fields.mat_width, parse_non_negative(value), NON_NEGATIVE_REASON),
        "mat_height" => out.set(&mut fields.mat_height, parse_non_negative(value), NON_NEGATIVE_REASON),

        // Colors
        "frame_color" => out.set(&mut fields.frame_color, Rgb::parse(value), COLOR_REASON),
        "mat_color" => out.set(&mut fields.mat_color, Rgb::parse(value), COLOR_REASON),
        "bg_color" => out.set(&mut fields.background, Rgb::parse(value), COLOR_REASON),
        "wall_color" => out.set(&mut fields.wall, Rgb::parse(value), COLOR_REASON),

        // Flags
        "show_mat" => out.set(&mut fields.show_mat, parse_bool(value), BOOL_REASON),
        "fill_image" => out.set(&mut fields.fill_image, parse_bool(value), BOOL_REASON),
        "orientation" => out.set(
            &mut fields.orientation,
            OrientationMode::parse(value),
            "expected auto|portrait|landscape",
        ),

        // Presets: empty selects custom
        "frame_size" => {
            let parsed = if value.trim().is_empty() {
                Some(None)
            } else {
                SizePreset::parse(value).map(Some)
            };
            out.set(&mut fields.size_preset, parsed, "expected WxH (e.g. 16x20) or empty");
        }
        "mat_border" => {
            let parsed = if value.trim().is_empty() {
                Some(None)
            } else {
                parse_non_negative(value).map(Some)
            };
            out.set(&mut fields.border_preset, parsed, "expected inches >= 0 or empty");
        }

        _ => unreachable!("canonical_key returned {key}"),
    }
}

const POSITIVE_REASON: &str = "expected inches > 0";
const NON_NEGATIVE_REASON: &str = "expected inches >= 0";
const COLOR_REASON: &str = "expected #RRGGBB or #RGB";
const BOOL_REASON: &str = "expected true|false|1|0|yes|no|on|off";

/// Records a parsed value, or a warning when parsing failed or the key
/// repeats.
struct Setter<'a> {
    key: &'static str,
    value: &'a str,
    warnings: &'a mut Vec<ParseWarning>,
}

impl Setter<'_> {
    fn set<T>(&mut self, field: &mut Option<T>, parsed: Option<T>, reason: &'static str) {
        match parsed {
            Some(v) => {
                if field.is_some() {
                    self.warnings.push(ParseWarning::DuplicateKey {
                        key: self.key,
                        value: String::from(self.value),
                    });
                }
                *field = Some(v);
            }
            None => self.warnings.push(ParseWarning::ValueInvalid {
                key: self.key,
                value: String::from(self.value),
                reason,
            }),
        }
    }
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_positive(s: &str) -> Option<f64> {
    parse_f64(s).filter(|&v| v > 0.0)
}

fn parse_non_negative(s: &str) -> Option<f64> {
    parse_f64(s).filter(|&v| v >= 0.0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
/// Invalid UTF-8 after decoding is replaced, not rejected.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
