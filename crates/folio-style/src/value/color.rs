//! CSS Color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The CSS 2.1 basic set plus `orange`.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("magenta", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("cyan", [0, 255, 255]),
    ("orange", [255, 165, 0]),
];

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// [§ 6.2 The transparent keyword](https://www.w3.org/TR/css-color-4/#transparent-color)
    /// "transparent black"
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Whether the color is fully transparent.
    #[must_use]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let digit = |range: std::ops::Range<usize>| -> Option<u8> {
            let part = &hex[range];
            if part.len() == 1 {
                // "The three-digit RGB notation (#RGB) is converted into six-digit form
                // (#RRGGBB) by replicating digits, not by adding zeros."
                u8::from_str_radix(&part.repeat(2), 16).ok()
            } else {
                u8::from_str_radix(part, 16).ok()
            }
        };
        match hex.len() {
            3 => Some(Self::rgb(digit(0..1)?, digit(1..2)?, digit(2..3)?)),
            4 => Some(Self {
                r: digit(0..1)?,
                g: digit(1..2)?,
                b: digit(2..3)?,
                a: digit(3..4)?,
            }),
            6 => Some(Self::rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            8 => Some(Self {
                r: digit(0..2)?,
                g: digit(2..4)?,
                b: digit(4..6)?,
                a: digit(6..8)?,
            }),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    /// "CSS defines a large set of named colors..."
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        NAMED_COLORS
            .iter()
            .find(|(named, _)| named.eq_ignore_ascii_case(name))
            .map(|&(_, [r, g, b])| Self::rgb(r, g, b))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not opaque.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex_forms() {
        assert_eq!(ColorValue::from_hex("#f00"), Some(ColorValue::rgb(255, 0, 0)));
        assert_eq!(ColorValue::from_hex("00ff00"), Some(ColorValue::rgb(0, 255, 0)));
        assert_eq!(
            ColorValue::from_hex("#0000ff80"),
            Some(ColorValue {
                r: 0,
                g: 0,
                b: 255,
                a: 128
            })
        );
        assert_eq!(ColorValue::from_hex("#12345"), None);
        assert_eq!(ColorValue::from_hex("#ggg"), None);
    }

    #[test]
    fn test_color_from_named() {
        assert_eq!(ColorValue::from_named("Orange"), Some(ColorValue::rgb(255, 165, 0)));
        assert_eq!(ColorValue::from_named("transparent"), Some(ColorValue::TRANSPARENT));
        assert_eq!(ColorValue::from_named("chartreuse-ish"), None);
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(ColorValue::rgb(255, 165, 0).to_hex_string(), "#ffa500");
        assert_eq!(ColorValue::TRANSPARENT.to_hex_string(), "#00000000");
    }
}
