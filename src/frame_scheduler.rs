//! Frame scheduling and timing utilities.
//!
//! Drives a [`FadeRenderer`] at a fixed frame rate until the fade completes,
//! the driver fails, or the run is cancelled. Time and sleeping go through
//! [`FrameClock`] so the loop runs the same against the OS clock and a
//! simulated one.

use embassy_time::{Duration, Instant};

use crate::cancel::CancelFlag;
use crate::error::Result;
use crate::renderer::FadeRenderer;
use crate::OutputDriver;

/// Default target frame rate (100 FPS).
pub const DEFAULT_FPS: u32 = 100;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Source of time for the render loop
pub trait FrameClock {
    /// Current monotonic time
    fn now(&mut self) -> Instant;

    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Monotonic OS clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl FrameClock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(std::time::Duration::from_micros(duration.as_micros()));
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Progress of the rendered frame (0.0-1.0)
    pub progress: f32,
    /// How long to wait until the next frame
    pub sleep_duration: Duration,
}

impl FrameResult {
    /// Whether the rendered frame was the last one of the fade
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Outcome of a complete render loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeSummary {
    /// Number of frames sent to the driver
    pub frames: usize,
    /// Progress of the last rendered frame
    pub progress: f32,
    /// The loop stopped because of a cancellation request
    pub cancelled: bool,
}

/// Frame scheduler that paces a fade renderer.
///
/// Every frame is followed by a fixed sleep of one frame duration; time
/// spent rendering is not compensated, so heavy frames stretch the loop
/// instead of speeding up the next one. Progress is always computed from
/// the clock, so the fade still ends on time.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
/// let summary = scheduler.run(&mut SystemClock, &cancel)?;
/// scheduler.finalize();
/// ```
pub struct FrameScheduler<O: OutputDriver> {
    output: O,
    renderer: FadeRenderer,
    frame_duration: Duration,
}

impl<O: OutputDriver> FrameScheduler<O> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (100 FPS) for frame timing.
    pub fn new(renderer: FadeRenderer, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(renderer: FadeRenderer, driver: O, frame_duration: Duration) -> Self {
        Self {
            output: driver,
            renderer,
            frame_duration,
        }
    }

    /// Render and persist one frame.
    ///
    /// The caller is responsible for waiting `sleep_duration` before calling
    /// `tick` again, unless the result is complete.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult> {
        let progress = self.renderer.render(now, &mut self.output)?;
        Ok(FrameResult {
            progress,
            sleep_duration: self.frame_duration,
        })
    }

    /// Run frames until the fade completes or `cancel` is raised.
    ///
    /// A cancelled run persists the last rendered frame once more so the
    /// displayed colors are what the next run starts from. A driver error
    /// stops the loop immediately.
    pub fn run<C: FrameClock>(&mut self, clock: &mut C, cancel: &CancelFlag) -> Result<FadeSummary> {
        let mut summary = FadeSummary {
            frames: 0,
            progress: 0.0,
            cancelled: false,
        };

        loop {
            if cancel.is_cancelled() {
                log::debug!("[FrameScheduler.run] cancelled after {} frames", summary.frames);
                self.renderer.persist();
                summary.cancelled = true;
                return Ok(summary);
            }

            let result = self.tick(clock.now())?;
            summary.frames += 1;
            summary.progress = result.progress;

            if result.is_complete() {
                log::debug!("[FrameScheduler.run] fade complete after {} frames", summary.frames);
                return Ok(summary);
            }

            clock.sleep(result.sleep_duration);
        }
    }

    /// Release the output driver.
    pub fn finalize(&mut self) {
        self.output.finalize();
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &FadeRenderer {
        &self.renderer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Consume the scheduler, returning the output driver.
    pub fn into_output(self) -> O {
        self.output
    }
}
