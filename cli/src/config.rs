use lightctl::strip::DEFAULT_FREQUENCY_HZ;
use lightctl::{ChannelConfig, StripConfig, StripType};

pub(crate) struct ControllerSettings {
    pub frequency_hz: u32,
    pub dma: u8,
}

pub(crate) struct ChannelSettings {
    pub gpio: u8,
    pub count: usize,
    pub invert: bool,
    pub brightness: u8,
    pub strip_type: StripType,
    pub state_path: &'static str,
}

pub(crate) const CONTROLLER: ControllerSettings = ControllerSettings {
    frequency_hz: DEFAULT_FREQUENCY_HZ,
    dma: 4,
};

// State files belong on a tmpfs, they are rewritten on every frame
pub(crate) const CHANNELS: [ChannelSettings; 2] = [
    ChannelSettings {
        gpio: 18,
        count: 167,
        invert: false,
        brightness: 255,
        strip_type: StripType::Sk6812Grbw,
        state_path: "/tmp/leds0",
    },
    ChannelSettings {
        gpio: 13,
        count: 109,
        invert: true,
        brightness: 255,
        strip_type: StripType::Sk6812Grbw,
        state_path: "/tmp/leds1",
    },
];

/// Build the strip layout from the compiled-in settings
pub(crate) fn strip_config() -> StripConfig {
    let mut channels = heapless::Vec::new();
    for settings in &CHANNELS {
        let channel = ChannelConfig {
            gpio: settings.gpio,
            count: settings.count,
            invert: settings.invert,
            brightness: settings.brightness,
            strip_type: settings.strip_type,
            state_path: settings.state_path.into(),
        };
        // CHANNELS never holds more than the controller supports
        let _ = channels.push(channel);
    }

    StripConfig {
        frequency_hz: CONTROLLER.frequency_hz,
        dma: CONTROLLER.dma,
        channels,
    }
}

/// Human readable list of the state files, for the usage text
pub(crate) fn state_files() -> String {
    CHANNELS
        .iter()
        .map(|channel| channel.state_path)
        .collect::<Vec<_>>()
        .join(" and ")
}
