pub mod cancel;
pub mod color;
pub mod driver;
pub mod error;
pub mod frame_scheduler;
pub mod math;
pub mod renderer;
pub mod state_store;
pub mod strip;
pub mod transition;

pub use cancel::CancelFlag;
pub use color::{Rgbw, brightness, limit_brightness, parse_hex_color};
pub use driver::{DriverError, VirtualDriver};
pub use error::{Error, Result};
pub use frame_scheduler::{FadeSummary, FrameClock, FrameScheduler, SystemClock};
pub use renderer::{FadeRenderer, FadeRequest};
pub use state_store::StateStore;
pub use strip::{ChannelConfig, Frame, StripConfig, StripType};
pub use transition::ChannelTransition;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Initialization happens when the driver is constructed.
pub trait OutputDriver {
    /// Push a frame to the LED strips
    fn render(&mut self, frame: &Frame) -> core::result::Result<(), DriverError>;

    /// Release the hardware
    fn finalize(&mut self) {}
}
