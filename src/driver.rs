//! Output drivers and their error type.

use core::fmt;

use crate::OutputDriver;
use crate::color::rgbw_to_u32;
use crate::strip::Frame;

/// Failure reported by an LED driver
///
/// `code` is the driver's native status code, it becomes the exit status of
/// the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverError {
    pub code: i32,
    pub message: String,
}

impl DriverError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for DriverError {}

/// Driver without hardware behind it
///
/// Keeps the last rendered frame so it can be inspected, and traces every
/// frame through `log`.
#[derive(Debug, Default)]
pub struct VirtualDriver {
    last_frame: Option<Frame>,
    frames: usize,
    finalized: bool,
}

impl VirtualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last frame passed to `render`
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Whether `finalize` has been called
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl OutputDriver for VirtualDriver {
    fn render(&mut self, frame: &Frame) -> Result<(), DriverError> {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            for (index, channel) in frame.channels().enumerate() {
                let first = channel.first().copied().map(rgbw_to_u32);
                log::trace!(
                    "[VirtualDriver] frame {} channel {}: {} leds, first {:08x?}",
                    self.frames,
                    index,
                    channel.len(),
                    first
                );
            }
        }
        match &mut self.last_frame {
            Some(last) => last.clone_from(frame),
            None => self.last_frame = Some(frame.clone()),
        }
        Ok(())
    }

    fn finalize(&mut self) {
        self.finalized = true;
    }
}
