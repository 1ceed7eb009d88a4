use clap::Parser;
use lightctl::math::duration_from_secs_f64;
use lightctl::{Duration, FadeRequest, Rgbw, parse_hex_color};

/// Light Control Utility
#[derive(Debug, Parser)]
#[command(name = "lightctl")]
#[command(about = "Sets light color to the hexadecimal color code 0xWWRRGGBB", long_about = None)]
pub(crate) struct Cli {
    /// Target color as WWRRGGBB
    #[arg(value_name = "WWRRGGBB", value_parser = color_parser)]
    pub color: Rgbw,

    /// Time in seconds for the color fade
    #[arg(short = 't', long = "time", value_name = "SECONDS", default_value = "0", value_parser = duration_parser)]
    pub time: Duration,

    /// If the specified color is brighter than the current color, its brightness is bounded
    #[arg(long)]
    pub not_brighter: bool,
}

impl Cli {
    pub(crate) fn fade_request(&self) -> FadeRequest {
        FadeRequest {
            color: self.color,
            duration: self.time,
            not_brighter: self.not_brighter,
        }
    }
}

fn color_parser(value: &str) -> Result<Rgbw, String> {
    parse_hex_color(value).map_err(|err| err.to_string())
}

fn duration_parser(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("expected floating point number, got {value:?}"))?;
    duration_from_secs_f64(secs)
        .ok_or_else(|| format!("expected a non-negative number of seconds, got {value:?}"))
}
