use smart_leds::White;

use crate::color::Rgbw;
use crate::error::{Error, Result};

/// Create a color from its white, red, green and blue channels
pub const fn rgbw(w: u8, r: u8, g: u8, b: u8) -> Rgbw {
    Rgbw { r, g, b, a: White(w) }
}

/// White channel of a color
#[inline]
pub const fn white(color: Rgbw) -> u8 {
    color.a.0
}

/// Create an RGBW color from a u32 value (0xWWRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgbw_from_u32(color: u32) -> Rgbw {
    rgbw(
        ((color >> 24) & 0xFF) as u8,
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Pack an RGBW color into a u32 value (0xWWRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgbw_to_u32(color: Rgbw) -> u32 {
    ((white(color) as u32) << 24)
        | ((color.r as u32) << 16)
        | ((color.g as u32) << 8)
        | (color.b as u32)
}

/// Blend two RGBW colors
///
/// Each channel is interpolated linearly and truncated towards zero.
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0.0 = all a, 1.0 = all b)
#[inline]
pub fn blend_colors(a: Rgbw, b: Rgbw, amount_of_b: f32) -> Rgbw {
    rgbw(
        blend_channel(white(a), white(b), amount_of_b),
        blend_channel(a.r, b.r, amount_of_b),
        blend_channel(a.g, b.g, amount_of_b),
        blend_channel(a.b, b.b, amount_of_b),
    )
}

// (1 - t) * a + t * b, rearranged to stay exact when a == b.
// Float to int casts saturate: alphas outside [0, 1] clip instead of wrapping.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(a: u8, b: u8, amount_of_b: f32) -> u8 {
    let a = f32::from(a);
    (a + (f32::from(b) - a) * amount_of_b) as u8
}

/// Parse a hexadecimal `WWRRGGBB` color code
///
/// An optional `0x` prefix is accepted. Shorter codes are zero-extended on
/// the left, so `ff0000` is full red without white.
pub fn parse_hex_color(input: &str) -> Result<Rgbw> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if digits.is_empty()
        || digits.len() > 8
        || !digits.bytes().all(|digit| digit.is_ascii_hexdigit())
    {
        return Err(Error::InvalidColor(input.to_owned()));
    }

    u32::from_str_radix(digits, 16)
        .map(rgbw_from_u32)
        .map_err(|_| Error::InvalidColor(input.to_owned()))
}
