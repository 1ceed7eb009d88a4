//! Strip layout: per-channel hardware configuration and frame buffers.

use std::path::PathBuf;

use crate::color::{OFF, Rgbw};

/// Maximum number of channels a single controller can drive
pub const MAX_CHANNELS: usize = 2;

/// Default WS281x/SK6812 data rate
pub const DEFAULT_FREQUENCY_HZ: u32 = 800_000;

/// LED chip family and the byte order it expects on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripType {
    Ws2812,
    Sk6812Rgbw,
    Sk6812Rbgw,
    #[default]
    Sk6812Grbw,
    Sk6812Gbrw,
    Sk6812Brgw,
    Sk6812Bgrw,
}

/// Configuration of one physical strip
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// GPIO pin the strip's data line is attached to
    pub gpio: u8,
    /// Number of LEDs on the strip
    pub count: usize,
    /// Invert the output signal (for inverting level shifters)
    pub invert: bool,
    /// Hardware brightness cap (0-255)
    pub brightness: u8,
    pub strip_type: StripType,
    /// File holding the last rendered colors of this strip
    pub state_path: PathBuf,
}

/// Configuration of the LED controller and all its channels
#[derive(Debug, Clone)]
pub struct StripConfig {
    pub frequency_hz: u32,
    /// DMA channel used by the hardware backend
    pub dma: u8,
    pub channels: heapless::Vec<ChannelConfig, MAX_CHANNELS>,
}

impl StripConfig {
    /// Total number of LEDs across all channels
    pub fn led_count(&self) -> usize {
        self.channels.iter().map(|channel| channel.count).sum()
    }
}

/// One color buffer per channel, sized once from the strip configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    channels: heapless::Vec<Vec<Rgbw>, MAX_CHANNELS>,
}

impl Frame {
    /// Create a frame with every LED off
    pub fn new(config: &StripConfig) -> Self {
        let mut channels = heapless::Vec::new();
        for channel in &config.channels {
            // Cannot overflow, both vectors share the same capacity
            let _ = channels.push(vec![OFF; channel.count]);
        }
        Self { channels }
    }

    /// Number of channels in the frame
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Colors of one channel
    ///
    /// Returns an empty slice for an unknown channel.
    pub fn channel(&self, index: usize) -> &[Rgbw] {
        match self.channels.get(index) {
            Some(colors) => colors.as_slice(),
            None => &[],
        }
    }

    pub(crate) fn channel_mut(&mut self, index: usize) -> &mut [Rgbw] {
        self.channels[index].as_mut_slice()
    }

    /// Iterate over the channels in configuration order
    pub fn channels(&self) -> impl Iterator<Item = &[Rgbw]> {
        self.channels.iter().map(Vec::as_slice)
    }
}
