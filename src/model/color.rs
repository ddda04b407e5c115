use crate::error::{ModelError, Result};

/// An RGB color with 8-bit channels.
///
/// All drawing code works on parsed channels; hex parsing happens once,
/// here, with a hard error on malformed input instead of silently
/// falling back to black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from explicit channels.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidColor`] unless the input is `#`
    /// followed by exactly 6 hex digits.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || -> crate::error::ScavoError {
            ModelError::InvalidColor {
                value: value.to_owned(),
            }
            .into()
        };

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Returns the color brightened by `delta` per channel, clamped to 255.
    #[must_use]
    pub fn lighten(&self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_add(delta),
            g: self.g.saturating_add(delta),
            b: self.b.saturating_add(delta),
        }
    }

    /// Returns the color darkened by `delta` per channel, clamped to 0.
    #[must_use]
    pub fn darken(&self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_sub(delta),
            g: self.g.saturating_sub(delta),
            b: self.b.saturating_sub(delta),
        }
    }

    /// Formats the color as `#rrggbb` for serialization.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_color() {
        let c = Rgb::parse("#8B5A2B").unwrap();
        assert_eq!(c, Rgb::new(0x8B, 0x5A, 0x2B));
    }

    #[test]
    fn parse_lowercase_color() {
        let c = Rgb::parse("#a0b1c2").unwrap();
        assert_eq!(c, Rgb::new(0xA0, 0xB1, 0xC2));
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert!(Rgb::parse("8B5A2B").is_err());
    }

    #[test]
    fn parse_rejects_short_string() {
        assert!(Rgb::parse("#fff").is_err());
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert!(Rgb::parse("#12345g").is_err());
    }

    #[test]
    fn parse_rejects_trailing_garbage() {
        assert!(Rgb::parse("#12345678").is_err());
    }

    #[test]
    fn lighten_clamps_at_white() {
        let c = Rgb::new(250, 10, 128).lighten(25);
        assert_eq!(c, Rgb::new(255, 35, 153));
    }

    #[test]
    fn darken_clamps_at_black() {
        let c = Rgb::new(10, 200, 0).darken(15);
        assert_eq!(c, Rgb::new(0, 185, 0));
    }

    #[test]
    fn hex_round_trip() {
        let c = Rgb::parse("#d2b48c").unwrap();
        assert_eq!(c.to_hex(), "#d2b48c");
    }
}
