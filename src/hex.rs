//! Fixed-width hex encoding helpers.
//!
//! Every helper emits uppercase, zero-padded digits of a fixed width, so the
//! fragments can be concatenated into a packet without separators.

use crate::color::HexColor;
use crate::types::Brightness;
use core::fmt::Write;
use heapless::String;

/// Width of an encoded color fragment (`RRGGBB`).
pub const COLOR_HEX_WIDTH: usize = 6;

/// Width of a one-byte fragment.
pub const BYTE_HEX_WIDTH: usize = 2;

/// Hex token for `true`.
pub const TRUE_HEX: &str = "01";

/// Hex token for `false`.
pub const FALSE_HEX: &str = "00";

/// Encodes a color as `RRGGBB`.
pub fn color_to_hex(color: HexColor) -> String<COLOR_HEX_WIDTH> {
    let mut out = String::new();
    // Three bytes always fill exactly six digits.
    let _ = write!(out, "{:02X}{:02X}{:02X}", color.red(), color.green(), color.blue());
    out
}

/// Encodes a brightness level as two hex digits (`100` becomes `64`).
pub fn brightness_to_hex(brightness: Brightness) -> String<BYTE_HEX_WIDTH> {
    number_to_hex(brightness.level())
}

/// Encodes a small ordinal as two hex digits.
pub fn number_to_hex(value: u8) -> String<BYTE_HEX_WIDTH> {
    let mut out = String::new();
    let _ = write!(out, "{value:02X}");
    out
}

/// Encodes a flag as `01` or `00`.
pub fn bool_to_hex(flag: bool) -> &'static str {
    if flag { TRUE_HEX } else { FALSE_HEX }
}

/// Decodes a single hex digit, accepting either case.
pub(crate) fn digit_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

pub(crate) fn digits_invalid(text: &str) -> bool {
    !text.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_six_uppercase_digits() {
        assert_eq!(color_to_hex(HexColor::new(0xFF, 0x00, 0x00)).as_str(), "FF0000");
        assert_eq!(color_to_hex(HexColor::new(0x0a, 0xbc, 0x01)).as_str(), "0ABC01");
        assert_eq!(color_to_hex(HexColor::BLACK).as_str(), "000000");
    }

    #[test]
    fn brightness_is_zero_padded() {
        assert_eq!(brightness_to_hex(Brightness::MIN).as_str(), "00");
        assert_eq!(brightness_to_hex(Brightness::saturating(5)).as_str(), "05");
        assert_eq!(brightness_to_hex(Brightness::saturating(50)).as_str(), "32");
        assert_eq!(brightness_to_hex(Brightness::MAX).as_str(), "64");
    }

    #[test]
    fn numbers_use_full_byte_range() {
        assert_eq!(number_to_hex(0).as_str(), "00");
        assert_eq!(number_to_hex(4).as_str(), "04");
        assert_eq!(number_to_hex(0xAB).as_str(), "AB");
        assert_eq!(number_to_hex(u8::MAX).as_str(), "FF");
    }

    #[test]
    fn every_byte_fills_its_fragment() {
        for value in 0..=u8::MAX {
            let text = number_to_hex(value);
            assert_eq!(text.len(), BYTE_HEX_WIDTH);
            assert_eq!(text.as_str(), format!("{value:02X}"));
        }

        let color = color_to_hex(HexColor::new(0x01, 0x00, 0xF0));
        assert_eq!(color.len(), COLOR_HEX_WIDTH);
        assert_eq!(color.as_str(), "0100F0");
    }

    #[test]
    fn booleans_map_to_fixed_tokens() {
        assert_eq!(bool_to_hex(true), "01");
        assert_eq!(bool_to_hex(false), "00");
    }

    #[test]
    fn digit_value_accepts_both_cases() {
        assert_eq!(digit_value(b'7'), Some(7));
        assert_eq!(digit_value(b'c'), Some(12));
        assert_eq!(digit_value(b'C'), Some(12));
        assert_eq!(digit_value(b'g'), None);
    }
}
