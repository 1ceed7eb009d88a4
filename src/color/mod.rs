mod brightness;
mod utils;

pub use brightness::{brightness, limit_brightness};
use smart_leds::RGBW;
pub use smart_leds::White;
pub use utils::{blend_colors, parse_hex_color, rgbw, rgbw_from_u32, rgbw_to_u32, white};

pub type Rgbw = RGBW<u8>;

/// All channels off
pub const OFF: Rgbw = rgbw(0, 0, 0, 0);
