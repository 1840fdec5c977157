//! sRGB color type
//!
//! 8-bit sRGB is what hex color tokens in stylesheets, markup and source
//! code describe. This is the entry point of the conversion pipeline.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color in 8-bit-per-channel sRGB.
///
/// Channels are always in 0..=255 by construction; there is no way to build
/// an out-of-range value, so no later stage re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Srgb {
    /// Create a new Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use delta_e::Srgb;
    /// let red = Srgb::new(255, 0, 0);
    /// assert_eq!(red.to_hex(), "#FF0000");
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as `#` followed by six uppercase hex digits.
    ///
    /// # Example
    /// ```
    /// use delta_e::Srgb;
    /// let light_blue: Srgb = "#add8e6".parse().unwrap();
    /// assert_eq!(light_blue.to_hex(), "#ADD8E6");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Value of a single ASCII hex digit. Callers validate first.
#[inline]
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Anything else is
    /// rejected: no whitespace trimming, no 3-digit shorthand, no alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use delta_e::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Srgb::new(255, 255, 255));
    ///
    /// let teal: Srgb = "008080".parse().unwrap();
    /// assert_eq!(teal, Srgb::new(0, 128, 128));
    ///
    /// assert!("#FFF".parse::<Srgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (offset, digits) = match s.strip_prefix('#') {
            Some(rest) => (1, rest),
            None => (0, s),
        };

        let len = digits.chars().count();
        if len != 6 {
            return Err(ParseColorError::InvalidLength { len });
        }

        if let Some((index, found)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ParseColorError::InvalidHex {
                position: index + offset,
                found,
            });
        }

        // All six characters are ASCII hex digits, so byte indexing is safe.
        let bytes = digits.as_bytes();
        let channel = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
        Ok(Self::new(channel(0), channel(2), channel(4)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Srgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Srgb::new(255, 255, 255));

        let black: Srgb = "#000000".parse().unwrap();
        assert_eq!(black, Srgb::new(0, 0, 0));

        let red: Srgb = "#FF0000".parse().unwrap();
        assert_eq!(red, Srgb::new(255, 0, 0));

        let mixed: Srgb = "#12AB3c".parse().unwrap();
        assert_eq!(mixed, Srgb::new(0x12, 0xAB, 0x3C));
    }

    #[test]
    fn test_hex_parsing_without_hash() {
        let color: Srgb = "123456".parse().unwrap();
        assert_eq!(color, Srgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_hex_parsing_case_insensitive() {
        let upper: Srgb = "#ABCDEF".parse().unwrap();
        let lower: Srgb = "#abcdef".parse().unwrap();
        let mixed: Srgb = "#AbCdEf".parse().unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_hex_parsing_length_errors() {
        for input in ["", "#", "#12345", "#1234567", "12345", "#FFF", "##123456"] {
            let result = input.parse::<Srgb>();
            assert!(
                matches!(result, Err(ParseColorError::InvalidLength { .. })),
                "{input:?} should fail with InvalidLength, got {result:?}"
            );
        }

        assert_eq!(
            "#12345".parse::<Srgb>(),
            Err(ParseColorError::InvalidLength { len: 5 })
        );
    }

    #[test]
    fn test_hex_parsing_invalid_characters() {
        assert_eq!(
            "#GGHHII".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex {
                position: 1,
                found: 'G'
            })
        );
        assert_eq!(
            "12345z".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex {
                position: 5,
                found: 'z'
            })
        );
        // Sign characters are accepted by from_str_radix but are not hex digits
        assert!(matches!(
            "#+12345".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex { .. })
        ));
        // Six characters, but not six ASCII digits
        assert!(matches!(
            "#12345é".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_hex_parsing_rejects_whitespace() {
        assert!(" #123456".parse::<Srgb>().is_err());
        assert!("#123456 ".parse::<Srgb>().is_err());
        assert!("#12 456".parse::<Srgb>().is_err());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let colors = [
            "#000000", "#111111", "#FF0000", "#00FF00", "#0000FF", "#ADD8E6", "#FFFF00",
            "#D2B48C",
        ];
        for hex in colors {
            let color: Srgb = hex.parse().unwrap();
            assert_eq!(color.to_hex(), hex);
            assert_eq!(color.to_string(), hex);
        }
    }

    #[test]
    fn test_to_hex_normalizes_case_and_hash() {
        let color: Srgb = "add8e6".parse().unwrap();
        assert_eq!(color.to_hex(), "#ADD8E6");

        let color: Srgb = "#0a0B0c".parse().unwrap();
        assert_eq!(color.to_hex(), "#0A0B0C");
    }

    #[test]
    fn test_round_trip_all_channel_values() {
        for v in 0..=255u8 {
            let color = Srgb::new(v, 255 - v, v / 2);
            let parsed: Srgb = color.to_hex().parse().unwrap();
            assert_eq!(parsed, color);
            let lower: Srgb = color.to_hex().to_lowercase().parse().unwrap();
            assert_eq!(lower.to_hex(), color.to_hex());
        }
    }
}
