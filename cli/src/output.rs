//! Output driver selection.
//!
//! With the `ws281x` feature the strip is driven through the Raspberry Pi
//! PWM/PCM peripheral. Without it frames go to a [`VirtualDriver`], which makes
//! the binary a dry run that still reads and writes the state files.

use lightctl::{DriverError, StripConfig};

#[cfg(feature = "ws281x")]
pub(crate) type Driver = ws281x::Ws281xDriver;

#[cfg(not(feature = "ws281x"))]
pub(crate) type Driver = lightctl::VirtualDriver;

/// Initialize the output driver for `config`
#[cfg(feature = "ws281x")]
pub(crate) fn open(config: &StripConfig) -> Result<Driver, DriverError> {
    ws281x::Ws281xDriver::new(config)
}

/// Initialize the output driver for `config`
#[cfg(not(feature = "ws281x"))]
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn open(config: &StripConfig) -> Result<Driver, DriverError> {
    log::warn!(
        "built without the ws281x feature, rendering {} leds to a virtual strip",
        config.led_count()
    );
    Ok(lightctl::VirtualDriver::new())
}

#[cfg(feature = "ws281x")]
mod ws281x {
    use lightctl::color::rgbw_to_u32;
    use lightctl::{DriverError, Frame, OutputDriver, StripConfig, StripType};
    use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, WS2811Error};

    /// SK6812/WS2812 strips on the Raspberry Pi via `rpi_ws281x`
    ///
    /// The library finalizes the hardware when the controller is dropped.
    pub(crate) struct Ws281xDriver {
        controller: Controller,
    }

    impl Ws281xDriver {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        pub(crate) fn new(config: &StripConfig) -> Result<Self, DriverError> {
            let mut builder = ControllerBuilder::new();
            builder
                .freq(config.frequency_hz)
                .dma(i32::from(config.dma));
            for (index, channel) in config.channels.iter().enumerate() {
                builder.channel(
                    index,
                    ChannelBuilder::new()
                        .pin(i32::from(channel.gpio))
                        .count(channel.count as i32)
                        .invert(channel.invert)
                        .brightness(channel.brightness)
                        .strip_type(strip_type(channel.strip_type))
                        .build(),
                );
            }

            let controller = builder.build().map_err(driver_error)?;
            log::debug!("[Ws281xDriver.new] initialized {} channels", config.channels.len());
            Ok(Self { controller })
        }
    }

    impl OutputDriver for Ws281xDriver {
        fn render(&mut self, frame: &Frame) -> Result<(), DriverError> {
            for (index, colors) in frame.channels().enumerate() {
                let leds = self.controller.leds_mut(index);
                for (led, &color) in leds.iter_mut().zip(colors) {
                    // The library reads each raw color as a native 0xWWRRGGBB word
                    *led = rgbw_to_u32(color).to_le_bytes();
                }
            }
            self.controller.render().map_err(driver_error)
        }
    }

    fn strip_type(strip_type: StripType) -> rs_ws281x::StripType {
        match strip_type {
            StripType::Ws2812 => rs_ws281x::StripType::Ws2812,
            StripType::Sk6812Rgbw => rs_ws281x::StripType::Sk6812Rgbw,
            StripType::Sk6812Rbgw => rs_ws281x::StripType::Sk6812Rbgw,
            StripType::Sk6812Grbw => rs_ws281x::StripType::Sk6812Grbw,
            StripType::Sk6812Gbrw => rs_ws281x::StripType::Sk6812Gbrw,
            StripType::Sk6812Brgw => rs_ws281x::StripType::Sk6812Brgw,
            StripType::Sk6812Bgrw => rs_ws281x::StripType::Sk6812Bgrw,
        }
    }

    /// Map library errors back to their `ws2811_return_t` status codes
    #[allow(unreachable_patterns)]
    fn driver_error(err: WS2811Error) -> DriverError {
        let code = match err {
            WS2811Error::Generic => -1,
            WS2811Error::OutOfMemory => -2,
            WS2811Error::HwNotSupported => -3,
            WS2811Error::MemLock => -4,
            WS2811Error::Mmap => -5,
            WS2811Error::MapRegisters => -6,
            WS2811Error::GpioInit => -7,
            WS2811Error::PwmSetup => -8,
            WS2811Error::MailboxDevice => -9,
            WS2811Error::Dma => -10,
            WS2811Error::IllegalGpio => -11,
            WS2811Error::PcmSetup => -12,
            WS2811Error::SpiSetup => -13,
            WS2811Error::SpiTransfer => -14,
            _ => -1,
        };
        DriverError::new(code, format!("{err:?}"))
    }
}
