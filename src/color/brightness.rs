//! Perceived brightness of RGBW colors
//!
//! The estimate is a weighted channel average. White dominates because the
//! dedicated white emitter of an SK6812 is noticeably brighter than any single
//! color die.

use super::{Rgbw, rgbw, white};

const WHITE_WEIGHT: u32 = 5;
const RED_WEIGHT: u32 = 2;
const GREEN_WEIGHT: u32 = 3;
const BLUE_WEIGHT: u32 = 2;
const WEIGHT_SUM: u32 = WHITE_WEIGHT + RED_WEIGHT + GREEN_WEIGHT + BLUE_WEIGHT;

/// Perceived brightness of a color in `[0.0, 1.0]`
#[allow(clippy::cast_precision_loss)]
pub fn brightness(color: Rgbw) -> f32 {
    let weighted = u32::from(white(color)) * WHITE_WEIGHT
        + u32::from(color.r) * RED_WEIGHT
        + u32::from(color.g) * GREEN_WEIGHT
        + u32::from(color.b) * BLUE_WEIGHT;

    weighted as f32 / (WEIGHT_SUM * 255) as f32
}

/// Bound the brightness of `color` by the brightness of `reference`
///
/// A color brighter than the reference is scaled down channel by channel,
/// keeping its hue. A black reference limits any lit color to black. A black
/// color, or one no brighter than the reference, is returned unchanged.
pub fn limit_brightness(color: Rgbw, reference: Rgbw) -> Rgbw {
    let current = brightness(color);
    let limit = brightness(reference);
    if current <= 0.0 || limit >= current {
        return color;
    }

    rgbw(
        scale_channel(white(color), limit, current),
        scale_channel(color.r, limit, current),
        scale_channel(color.g, limit, current),
        scale_channel(color.b, limit, current),
    )
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, limit: f32, current: f32) -> u8 {
    (f32::from(value) * limit / current) as u8
}
