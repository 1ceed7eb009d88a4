use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::color::Rgbw;
use crate::error::Result;
use crate::math::progress;
use crate::state_store::StateStore;
use crate::strip::{Frame, MAX_CHANNELS, StripConfig};
use crate::transition::ChannelTransition;

/// Request to fade the whole strip to one color
#[derive(Debug, Clone, Copy)]
pub struct FadeRequest {
    /// Target color
    pub color: Rgbw,
    /// Duration of the fade, zero jumps straight to the target
    pub duration: Duration,
    /// Never end brighter than each LED started
    pub not_brighter: bool,
}

#[derive(Debug)]
struct ChannelSlot {
    transition: ChannelTransition,
    store: StateStore,
}

/// Fade renderer - computes frames and keeps the state files current
pub struct FadeRenderer {
    channels: heapless::Vec<ChannelSlot, MAX_CHANNELS>,
    frame: Frame,
    duration: Duration,
    started_at: Instant,
    rendered: bool,
}

impl FadeRenderer {
    /// Restore every channel from its state file and plan the fade
    ///
    /// `started_at` is the origin for all progress calculations.
    pub fn new(config: &StripConfig, request: &FadeRequest, started_at: Instant) -> Self {
        let mut channels = heapless::Vec::new();
        for channel in &config.channels {
            let store = StateStore::new(&channel.state_path);
            let start = store.load(channel.count);
            let transition = ChannelTransition::new(start, request.color, request.not_brighter);
            // Cannot overflow, the config holds at most MAX_CHANNELS channels
            let _ = channels.push(ChannelSlot { transition, store });
        }
        log::debug!(
            "[FadeRenderer.new] fading {} leds in {} channels over {} ms",
            config.led_count(),
            channels.len(),
            request.duration.as_millis()
        );

        Self {
            channels,
            frame: Frame::new(config),
            duration: request.duration,
            started_at,
            rendered: false,
        }
    }

    /// Progress of the fade at `now`
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now
            .checked_duration_since(self.started_at)
            .unwrap_or(Duration::from_millis(0));
        progress(elapsed, self.duration)
    }

    /// Render the frame for `now` and persist it
    ///
    /// Returns the progress of the rendered frame. A driver failure is
    /// returned before anything is persisted.
    pub fn render<O: OutputDriver>(&mut self, now: Instant, output: &mut O) -> Result<f32> {
        let progress = self.progress(now);

        for (index, slot) in self.channels.iter().enumerate() {
            slot.transition.render(progress, self.frame.channel_mut(index));
        }

        output.render(&self.frame)?;
        self.rendered = true;
        self.persist();

        Ok(progress)
    }

    /// Write the last rendered frame to the state files
    ///
    /// Does nothing before the first frame, the stored state still matches
    /// what the strip shows.
    pub fn persist(&self) {
        if !self.rendered {
            return;
        }
        for (index, slot) in self.channels.iter().enumerate() {
            slot.store.save(self.frame.channel(index));
        }
    }

    /// Last rendered frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Transition of one channel
    pub fn transition(&self, channel: usize) -> Option<&ChannelTransition> {
        self.channels.get(channel).map(|slot| &slot.transition)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
