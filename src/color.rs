//! Opaque sRGB colors: `#RRGGBB` parsing, formatting, and bevel shading.

use core::fmt;

/// An opaque 8-bit-per-channel sRGB color.
///
/// Formats as lowercase `#rrggbb`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Default wall color behind the frame.
    pub const WALL: Self = Self::new(0xFB, 0xFB, 0xFB);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB`. The leading `#` is optional and
    /// surrounding whitespace is ignored.
    ///
    /// ```
    /// use framelayout::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#8B4513"), Some(Rgb::new(0x8b, 0x45, 0x13)));
    /// assert_eq!(Rgb::parse("fff"), Some(Rgb::WHITE));
    /// assert_eq!(Rgb::parse("#12345"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => Some(Self::new(
                expand_nibble(bytes[0])?,
                expand_nibble(bytes[1])?,
                expand_nibble(bytes[2])?,
            )),
            6 => Some(Self::new(
                parse_byte(bytes[0], bytes[1])?,
                parse_byte(bytes[2], bytes[3])?,
                parse_byte(bytes[4], bytes[5])?,
            )),
            _ => None,
        }
    }

    /// Shift every channel by `delta`, saturating at 0 and 255.
    ///
    /// Negative deltas darken, positive lighten. The frame bevel uses ±24,
    /// the mat opening edge −20.
    pub fn adjust(self, delta: i16) -> Self {
        let shift = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn parse_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}
