// Color conversion utilities

use crate::error::KeypadError;

/// Convert a hex color string to RGB channels.
///
/// A leading `#` is stripped. The remainder is split into three
/// equal-length components, each parsed as a base-16 integer, so the
/// usual form is six digits (`"FF8800"`). A length that does not divide
/// into three, or a component outside 0-255, is an error.
pub fn hex_to_rgb(value: &str) -> Result<(u8, u8, u8), KeypadError> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.is_empty() || hex.len() % 3 != 0 {
        return Err(KeypadError::InvalidColor(value.to_string()));
    }

    let width = hex.len() / 3;
    let channel = |i: usize| -> Result<u8, KeypadError> {
        u8::from_str_radix(&hex[i * width..(i + 1) * width], 16)
            .map_err(|_| KeypadError::InvalidColor(value.to_string()))
    };

    Ok((channel(0)?, channel(1)?, channel(2)?))
}

/// Convert RGB channels into a six-digit uppercase hex string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{r:02X}{g:02X}{b:02X}")
}

/// Linearly interpolate between two colors.
///
/// `percent = 0.0` returns `from` exactly and `percent = 1.0` returns
/// `to` exactly. Channels are computed in f32 and truncated toward
/// zero, not rounded.
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), percent: f32) -> (u8, u8, u8) {
    let channel = |from: u8, to: u8| -> u8 {
        (f32::from(from) + (f32::from(to) - f32::from(from)) * percent) as u8
    };
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("FF0000").unwrap(), (255, 0, 0));
        assert_eq!(hex_to_rgb("00FF00").unwrap(), (0, 255, 0));
        assert_eq!(hex_to_rgb("0000FF").unwrap(), (0, 0, 255));
        assert_eq!(hex_to_rgb("112233").unwrap(), (0x11, 0x22, 0x33));
    }

    #[test]
    fn test_hex_to_rgb_strips_hash() {
        assert_eq!(hex_to_rgb("#FFFFFF").unwrap(), (255, 255, 255));
    }

    #[test]
    fn test_hex_to_rgb_lowercase() {
        assert_eq!(hex_to_rgb("ff8800").unwrap(), (255, 0x88, 0));
    }

    #[test]
    fn test_hex_to_rgb_short_form() {
        // Three digits split into one-digit channels
        assert_eq!(hex_to_rgb("F00").unwrap(), (15, 0, 0));
    }

    #[test]
    fn test_hex_to_rgb_bad_length() {
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("FFFF").is_err());
        assert!(hex_to_rgb("#12345").is_err());
    }

    #[test]
    fn test_hex_to_rgb_bad_digits() {
        assert!(hex_to_rgb("GG0000").is_err());
        assert!(hex_to_rgb("FF00Z0").is_err());
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0), "FF0000");
        assert_eq!(rgb_to_hex(0, 0, 0), "000000");
        assert_eq!(rgb_to_hex(0x0A, 0xB4, 0xFF), "0AB4FF");
    }

    #[test]
    fn test_roundtrip() {
        for hex in ["000000", "FFFFFF", "123456", "ABCDEF", "0A0B0C"] {
            let (r, g, b) = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(r, g, b), hex);
        }
    }

    #[test]
    fn test_blend_endpoints() {
        let from = (0x11, 0x22, 0x33);
        let to = (0xFF, 0xEE, 0xDD);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
    }

    #[test]
    fn test_blend_truncates() {
        // 255 * 0.5 = 127.5 truncates to 127
        assert_eq!(blend((0, 0, 0), (255, 255, 255), 0.5), (127, 127, 127));
    }

    #[test]
    fn test_blend_descending() {
        // Interpolation also works when `to` is darker than `from`
        assert_eq!(blend((200, 200, 200), (100, 100, 100), 0.5), (150, 150, 150));
    }
}
