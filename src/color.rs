//! SwatchColor type — the single logical color entity.
//!
//! Stores the RGB triple as 0–255 channels. The hex and HSL representations
//! are derived on demand, never stored alongside it.

use crate::constants;
use crate::math;

/// RGB color with components in the 0–255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwatchColor {
    r: u8,
    g: u8,
    b: u8,
}

impl SwatchColor {
    /// Red component (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green component (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue component (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
}

impl Default for SwatchColor {
    /// The color the picker is seeded with before any user input.
    fn default() -> Self {
        let (r, g, b) = constants::DEFAULT_COLOR;
        Self { r, g, b }
    }
}

impl SwatchColor {
    /// Create from 0–255 RGB values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex string (with or without a single `#`, 3 or 6 digits,
    /// either case). 3-digit shorthand doubles each nibble.
    ///
    /// Anything else yields `None`. Unparseable input is not an error at
    /// this seam; the caller simply does not propagate it.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }

    /// Format as the canonical uppercase `#RRGGBB` string, zero-padded.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL. Returns (hue in degrees 0–360, saturation and
    /// lightness in percent 0–100), unrounded.
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (h, s, l) = math::rgb_to_hsl(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        );
        (h * 360.0, s * 100.0, l * 100.0)
    }

    /// Create from HSL values (hue in degrees, saturation/lightness in
    /// percent). Channels are rounded to the nearest integer and clamped
    /// to 0–255.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = math::hsl_to_rgb(h / 360.0, s / 100.0, l / 100.0);
        Self {
            r: (r * 255.0).round().clamp(0.0, 255.0) as u8,
            g: (g * 255.0).round().clamp(0.0, 255.0) as u8,
            b: (b * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    use super::SwatchColor;

    #[test_case("16a085", (22, 160, 133); "lowercase without prefix")]
    #[test_case("#16A085", (22, 160, 133); "uppercase with prefix")]
    #[test_case("0f0", (0, 255, 0); "shorthand")]
    #[test_case("#0F0", (0, 255, 0); "shorthand with prefix")]
    #[test_case("000000", (0, 0, 0); "black")]
    #[test_case("#FFFFFF", (255, 255, 255); "white")]
    fn parses_valid_hex(input: &str, expected: (u8, u8, u8)) {
        let color = SwatchColor::from_hex(input).unwrap();
        assert_eq!((color.r(), color.g(), color.b()), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("#"; "prefix only")]
    #[test_case("12345"; "five digits")]
    #[test_case("1234567"; "seven digits")]
    #[test_case("16a085ff"; "eight digits")]
    #[test_case("ggg"; "non hex digits")]
    #[test_case("##fff"; "double prefix")]
    #[test_case("#fff "; "trailing space")]
    fn rejects_invalid_hex(input: &str) {
        assert_eq!(SwatchColor::from_hex(input), None);
    }

    #[test]
    fn hex_formatting_zero_pads_and_uppercases() {
        assert_eq!(SwatchColor::from_rgb(0, 0, 0).to_hex(), "#000000");
        assert_eq!(SwatchColor::from_rgb(1, 2, 3).to_hex(), "#010203");
        assert_eq!(SwatchColor::from_rgb(22, 160, 133).to_hex(), "#16A085");
        assert_eq!(SwatchColor::from_rgb(255, 255, 255).to_hex(), "#FFFFFF");
    }

    #[test]
    fn hsl_boundaries() {
        let (h, s, l) = SwatchColor::from_rgb(0, 0, 0).to_hsl();
        assert_eq!((h, s, l), (0.0, 0.0, 0.0));
        let (h, s, l) = SwatchColor::from_rgb(255, 255, 255).to_hsl();
        assert_eq!((h, s, l), (0.0, 0.0, 100.0));
    }

    #[test]
    fn from_hsl_hits_known_colors() {
        assert_eq!(
            SwatchColor::from_hsl(120.0, 100.0, 50.0),
            SwatchColor::from_rgb(0, 255, 0)
        );
        assert_eq!(
            SwatchColor::from_hsl(180.0, 50.0, 50.0),
            SwatchColor::from_rgb(64, 191, 191)
        );
        assert_eq!(
            SwatchColor::from_hsl(0.0, 0.0, 100.0),
            SwatchColor::from_rgb(255, 255, 255)
        );
    }

    #[test]
    fn default_is_the_seed_color() {
        assert_eq!(SwatchColor::default(), SwatchColor::from_rgb(22, 160, 133));
    }

    proptest! {
        #[test]
        fn hex_round_trip_is_lossless(r: u8, g: u8, b: u8) {
            let color = SwatchColor::from_rgb(r, g, b);
            let parsed = SwatchColor::from_hex(&color.to_hex()).unwrap();
            prop_assert_eq!(parsed, color);
        }

        #[test]
        fn hsl_round_trip_within_one_per_channel(r: u8, g: u8, b: u8) {
            let color = SwatchColor::from_rgb(r, g, b);
            let (h, s, l) = color.to_hsl();
            let back = SwatchColor::from_hsl(h, s, l);
            prop_assert!((back.r() as i16 - r as i16).abs() <= 1);
            prop_assert!((back.g() as i16 - g as i16).abs() <= 1);
            prop_assert!((back.b() as i16 - b as i16).abs() <= 1);
        }
    }
}
