use crate::color::{Rgbw, blend_colors, limit_brightness};

/// Fade of a single channel from its restored colors to a target color
///
/// Every LED keeps its own start and end color, so a strip that was left in
/// a gradient fades out of it pixel by pixel.
#[derive(Debug, Clone)]
pub struct ChannelTransition {
    /// Colors at the start of the fade
    start: Vec<Rgbw>,
    /// Colors at the end of the fade
    end: Vec<Rgbw>,
}

impl ChannelTransition {
    /// Create a transition from `start` to a flat `color`
    ///
    /// With `not_brighter` set, each LED's target is limited to the
    /// brightness it starts from.
    pub fn new(start: Vec<Rgbw>, color: Rgbw, not_brighter: bool) -> Self {
        let end = start
            .iter()
            .map(|&from| {
                if not_brighter {
                    limit_brightness(color, from)
                } else {
                    color
                }
            })
            .collect();
        Self { start, end }
    }

    pub fn start(&self) -> &[Rgbw] {
        &self.start
    }

    pub fn end(&self) -> &[Rgbw] {
        &self.end
    }

    /// Number of LEDs in the channel
    pub fn len(&self) -> usize {
        self.start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }

    /// Write the colors at `progress` (0.0-1.0) into `leds`
    pub fn render(&self, progress: f32, leds: &mut [Rgbw]) {
        for ((led, &from), &to) in leds.iter_mut().zip(&self.start).zip(&self.end) {
            *led = blend_colors(from, to, progress);
        }
    }
}
