//! Command line front end for lightctl
//!
//! Fades both LED strips from their saved colors to the requested one.

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches};
use lightctl::{CancelFlag, Error, FadeRenderer, FrameClock, FrameScheduler, SystemClock};
use signal_hook::consts::{SIGINT, SIGTERM};

mod args;
mod config;
mod output;

use args::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // Help is printed the same way, and like any usage error it is not a success
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> Result<Cli, clap::Error> {
    let command = Cli::command().after_help(format!(
        "The current color is saved to {}",
        config::state_files()
    ));
    let mut matches = command.try_get_matches()?;
    Cli::from_arg_matches_mut(&mut matches)
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cancel = CancelFlag::new();
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, cancel.as_atomic())
            .with_context(|| format!("failed to register handler for signal {signal}"))?;
    }

    let config = config::strip_config();
    let mut clock = SystemClock;
    let renderer = FadeRenderer::new(&config, &cli.fade_request(), clock.now());

    let driver = match output::open(&config) {
        Ok(driver) => driver,
        Err(err) => {
            log::error!("failed to initialize LED driver: {err}");
            return Ok(driver_exit_code(err.code));
        }
    };

    let mut scheduler = FrameScheduler::new(renderer, driver);
    let result = scheduler.run(&mut clock, &cancel);
    scheduler.finalize();
    drop(scheduler);

    match result {
        Ok(summary) => {
            log::info!(
                "rendered {} frames, progress {:.2}{}",
                summary.frames,
                summary.progress,
                if summary.cancelled { " (cancelled)" } else { "" }
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Driver(err)) => {
            log::error!("failed to render: {err}");
            Ok(driver_exit_code(err.code))
        }
        Err(err) => Err(err.into()),
    }
}

/// Exit status for a driver status code, truncated to a byte like a C `main` return
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn driver_exit_code(code: i32) -> ExitCode {
    match (code & 0xFF) as u8 {
        0 => ExitCode::FAILURE,
        status => ExitCode::from(status),
    }
}
