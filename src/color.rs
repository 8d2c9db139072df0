//! Color normalization.
//!
//! Turns the color inputs accepted by channels (hex strings, color names,
//! `rgb()`/`hsl()`/`hsv()` notation, 8-bit triplets, floating-point sRGB,
//! HSL and HSV) into a canonical [`HexColor`], or reports the input as
//! invalid. Alpha is accepted wherever it can be written and then dropped.

use crate::hex;
use crate::types::ChannelError;
use core::str::FromStr;
use heapless::{String, Vec};
use palette::{Clamp, FromColor, Hsl, Hsv, Srgb};

/// Longest color text accepted, after trimming.
const MAX_TEXT_LEN: usize = 64;

/// A validated RGB triplet, rendered as `RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl HexColor {
    pub const BLACK: Self = HexColor::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = HexColor::new(0xFF, 0xFF, 0xFF);

    /// Creates a color from 8-bit components.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Normalizes any supported color input.
    ///
    /// # Errors
    /// * `InvalidColor` - The input is unparseable or out of gamut
    pub fn normalize<'a>(input: impl Into<ColorInput<'a>>) -> Result<Self, ChannelError> {
        input.into().normalize()
    }

    /// Creates a color from HSV components (hue in degrees, saturation and
    /// value in `0.0..=1.0`).
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Result<Self, ChannelError> {
        ColorInput::Hsv(Hsv::new(hue, saturation, value)).normalize()
    }

    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the canonical `RRGGBB` form.
    pub fn to_hex(&self) -> String<{ hex::COLOR_HEX_WIDTH }> {
        hex::color_to_hex(*self)
    }

    /// Converts to a floating-point sRGB color.
    pub fn into_srgb(self) -> Srgb {
        Srgb::<u8>::from(self).into_format()
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Srgb<u8>> for HexColor {
    fn from(color: Srgb<u8>) -> Self {
        HexColor::new(color.red, color.green, color.blue)
    }
}

impl From<HexColor> for Srgb<u8> {
    fn from(color: HexColor) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

impl FromStr for HexColor {
    type Err = ChannelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        ColorInput::Text(text).normalize()
    }
}

impl core::fmt::Display for HexColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Color input accepted by channel options and setters.
#[derive(Debug, Clone, Copy)]
pub enum ColorInput<'a> {
    /// Case-insensitive text: hex (`#FF0000`, `ff0000`, `#f00`,
    /// `#FF000080`), a color name (`"crimson"`), or `rgb`/`rgba`/`hsl`/
    /// `hsla`/`hsv`/`hsva` notation such as `rgb(100%, 0%, 0%)` or
    /// `hsl 0 100% 50%`.
    Text(&'a str),

    /// An already normalized color.
    Hex(HexColor),

    /// 8-bit sRGB.
    Rgb8(Srgb<u8>),

    /// Floating-point sRGB; components must lie in `0.0..=1.0`.
    Rgb(Srgb),

    /// HSL; saturation and lightness must lie in `0.0..=1.0`.
    Hsl(Hsl),

    /// HSV; saturation and value must lie in `0.0..=1.0`.
    Hsv(Hsv),
}

impl ColorInput<'_> {
    /// Normalizes the input into a canonical triplet.
    ///
    /// # Errors
    /// * `InvalidColor` - The input is unparseable or out of gamut
    pub fn normalize(&self) -> Result<HexColor, ChannelError> {
        let normalized = match *self {
            ColorInput::Text(text) => parse_text(text),
            ColorInput::Hex(color) => Some(color),
            ColorInput::Rgb8(color) => Some(HexColor::from(color)),
            ColorInput::Rgb(color) => from_srgb(color),
            ColorInput::Hsl(color) => from_hsl(color),
            ColorInput::Hsv(color) => from_hsv(color),
        };

        normalized.ok_or(ChannelError::InvalidColor)
    }

    /// Returns `true` if the input normalizes to a color.
    pub fn is_valid(&self) -> bool {
        self.normalize().is_ok()
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(text: &'a str) -> Self {
        ColorInput::Text(text)
    }
}

impl From<HexColor> for ColorInput<'_> {
    fn from(color: HexColor) -> Self {
        ColorInput::Hex(color)
    }
}

impl From<Srgb<u8>> for ColorInput<'_> {
    fn from(color: Srgb<u8>) -> Self {
        ColorInput::Rgb8(color)
    }
}

impl From<Srgb> for ColorInput<'_> {
    fn from(color: Srgb) -> Self {
        ColorInput::Rgb(color)
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(color: Hsl) -> Self {
        ColorInput::Hsl(color)
    }
}

impl From<Hsv> for ColorInput<'_> {
    fn from(color: Hsv) -> Self {
        ColorInput::Hsv(color)
    }
}

impl From<(u8, u8, u8)> for ColorInput<'_> {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        ColorInput::Hex(HexColor::new(red, green, blue))
    }
}

fn parse_text(text: &str) -> Option<HexColor> {
    let mut lower: String<MAX_TEXT_LEN> = String::new();
    lower.push_str(text.trim()).ok()?;
    lower.make_ascii_lowercase();
    let text = lower.as_str();

    if let Some(digits) = text.strip_prefix('#') {
        return parse_hex(digits);
    }

    parse_function(text)
        .or_else(|| lookup_name(text))
        .or_else(|| parse_hex(text))
}

/// Parses 3, 4, 6 or 8 hex digits without a leading `#`. Alpha digits are
/// dropped.
fn parse_hex(digits: &str) -> Option<HexColor> {
    // palette slices the string by byte offsets and also tolerates a
    // leading '#' or sign; only plain ASCII hex digits get through here.
    if hex::digits_invalid(digits) {
        return None;
    }

    let rgb = match digits.len() {
        3 | 6 => digits,
        4 => &digits[..3],
        8 => &digits[..6],
        _ => return None,
    };
    Srgb::<u8>::from_str(rgb).ok().map(HexColor::from)
}

/// Parses `rgb`, `hsl` and `hsv` notation and their `a` variants, whose
/// alpha is checked but dropped. Parentheses are optional and components
/// may be separated by commas or whitespace.
fn parse_function(text: &str) -> Option<HexColor> {
    let name_len = text.find(|c: char| !c.is_ascii_alphabetic())?;
    let (name, args) = text.split_at(name_len);
    let (space, with_alpha) = match name.strip_suffix('a') {
        Some(space) => (space, true),
        None => (name, false),
    };

    let args = args.trim();
    let args = args.strip_prefix('(').unwrap_or(args);
    let args = args.strip_suffix(')').unwrap_or(args);

    let mut parts: Vec<&str, 4> = Vec::new();
    for part in args
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|part| !part.is_empty())
    {
        parts.push(part).ok()?;
    }

    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    if with_alpha {
        unit_component(parts[3])?;
    }

    match space {
        "rgb" => from_srgb(Srgb::new(
            rgb_component(parts[0])?,
            rgb_component(parts[1])?,
            rgb_component(parts[2])?,
        )),
        "hsl" => from_hsl(Hsl::new(
            hue_component(parts[0])?,
            unit_component(parts[1])?,
            unit_component(parts[2])?,
        )),
        "hsv" => from_hsv(Hsv::new(
            hue_component(parts[0])?,
            unit_component(parts[1])?,
            unit_component(parts[2])?,
        )),
        _ => None,
    }
}

/// `0-255` or a percentage, scaled to `0.0..=1.0`. Range is checked later.
fn rgb_component(part: &str) -> Option<f32> {
    match part.strip_suffix('%') {
        Some(percent) => Some(percent.parse::<f32>().ok()? / 100.0),
        None => Some(part.parse::<f32>().ok()? / 255.0),
    }
}

/// A fraction or a percentage; bare numbers above 1 count as percent.
fn unit_component(part: &str) -> Option<f32> {
    match part.strip_suffix('%') {
        Some(percent) => Some(percent.parse::<f32>().ok()? / 100.0),
        None => {
            let value = part.parse::<f32>().ok()?;
            Some(if value > 1.0 { value / 100.0 } else { value })
        }
    }
}

/// Degrees, with or without a `deg` suffix.
fn hue_component(part: &str) -> Option<f32> {
    part.strip_suffix("deg").unwrap_or(part).parse::<f32>().ok()
}

/// Looks up an SVG/CSS color name; `name` is already lowercase.
fn lookup_name(name: &str) -> Option<HexColor> {
    if !name.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    palette::named::from_str(name).map(HexColor::from)
}

fn in_unit_range(component: f32) -> bool {
    (0.0..=1.0).contains(&component)
}

fn from_srgb(color: Srgb) -> Option<HexColor> {
    let in_gamut =
        in_unit_range(color.red) && in_unit_range(color.green) && in_unit_range(color.blue);
    if !in_gamut {
        return None;
    }

    Some(HexColor::from(color.into_format::<u8>()))
}

fn from_hsv(color: Hsv) -> Option<HexColor> {
    let valid = color.hue.into_degrees().is_finite()
        && in_unit_range(color.saturation)
        && in_unit_range(color.value);
    if !valid {
        return None;
    }

    // Conversion can land a hair outside the unit range.
    from_srgb(Srgb::from_color(color).clamp())
}

fn from_hsl(color: Hsl) -> Option<HexColor> {
    let valid = color.hue.into_degrees().is_finite()
        && in_unit_range(color.saturation)
        && in_unit_range(color.lightness);
    if !valid {
        return None;
    }

    from_srgb(Srgb::from_color(color).clamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#FF0000".parse::<HexColor>(), Ok(HexColor::new(0xFF, 0, 0)));
        assert_eq!("ff0000".parse::<HexColor>(), Ok(HexColor::new(0xFF, 0, 0)));
        assert_eq!("#0f0".parse::<HexColor>(), Ok(HexColor::new(0, 0xFF, 0)));
        assert_eq!("  #0000ff ".parse::<HexColor>(), Ok(HexColor::new(0, 0, 0xFF)));
    }

    #[test]
    fn hex_alpha_is_dropped() {
        assert_eq!("#FF000080".parse::<HexColor>(), Ok(HexColor::new(0xFF, 0, 0)));
        assert_eq!("#F008".parse::<HexColor>(), Ok(HexColor::new(0xFF, 0, 0)));
        assert_eq!("00ff0000".parse::<HexColor>(), Ok(HexColor::new(0, 0xFF, 0)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!("#FF000".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("#GG0000".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("##FF0000".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("#+f+f+f".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("#FF0000800".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("".parse::<HexColor>(), Err(ChannelError::InvalidColor));
    }

    #[test]
    fn parses_color_names_case_insensitively() {
        assert_eq!("white".parse::<HexColor>(), Ok(HexColor::WHITE));
        assert_eq!("Red".parse::<HexColor>(), Ok(HexColor::new(0xFF, 0, 0)));
        assert_eq!("not-a-color".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("notacolor".parse::<HexColor>(), Err(ChannelError::InvalidColor));
    }

    #[test]
    fn parses_rgb_function() {
        assert_eq!("rgb(255, 128, 0)".parse::<HexColor>(), Ok(HexColor::new(255, 128, 0)));
        assert_eq!("rgb(256, 0, 0)".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("rgb(1, 2)".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("rgb(1, 2, 3, 4)".parse::<HexColor>(), Err(ChannelError::InvalidColor));
    }

    #[test]
    fn function_names_and_separators_are_lenient() {
        let red = Ok(HexColor::new(0xFF, 0, 0));
        assert_eq!("RGB(255, 0, 0)".parse::<HexColor>(), red);
        assert_eq!("rgb 255 0 0".parse::<HexColor>(), red);
        assert_eq!("rgb(100%, 0%, 0%)".parse::<HexColor>(), red);
        assert_eq!("rgba(255, 0, 0, 0.5)".parse::<HexColor>(), red);
        assert_eq!("rgba(255, 0, 0)".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("rgb(255, x, 0)".parse::<HexColor>(), Err(ChannelError::InvalidColor));
        assert_eq!("cmyk(0, 0, 0)".parse::<HexColor>(), Err(ChannelError::InvalidColor));
    }

    #[test]
    fn parses_hsl_and_hsv_functions() {
        let red = Ok(HexColor::new(0xFF, 0, 0));
        assert_eq!("hsl(0, 100%, 50%)".parse::<HexColor>(), red);
        assert_eq!("hsla(0, 1, 0.5, 50%)".parse::<HexColor>(), red);
        assert_eq!("hsv(0, 100%, 100%)".parse::<HexColor>(), red);
        assert_eq!("hsv(120deg 100 100)".parse::<HexColor>(), Ok(HexColor::new(0, 0xFF, 0)));
        assert_eq!("hsl(0, 150%, 50%)".parse::<HexColor>(), Err(ChannelError::InvalidColor));
    }

    #[test]
    fn float_components_must_be_in_gamut() {
        assert_eq!(
            HexColor::normalize(Srgb::<f32>::new(1.0, 0.0, 0.0)),
            Ok(HexColor::new(0xFF, 0, 0))
        );
        assert!(!ColorInput::Rgb(Srgb::new(1.5, 0.0, 0.0)).is_valid());
        assert!(!ColorInput::Rgb(Srgb::new(f32::NAN, 0.0, 0.0)).is_valid());
    }

    #[test]
    fn displays_canonical_uppercase() {
        let color = HexColor::new(0xab, 0xcd, 0xef);
        assert_eq!(format!("{}", color), "ABCDEF");
    }
}
