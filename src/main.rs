#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::ensure;
use chronoshift_core::EmissionPolicy;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::AppSettings;

/// Global settings, set from command line
static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Get the settings (set from command line or default)
pub fn get_settings() -> AppSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// ChronoShift - convert times between locations
#[derive(Parser, Debug)]
#[command(name = "chronoshift-desktop")]
#[command(about = "ChronoShift - convert times between different time zones")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 1000.0)]
    height: f64,

    /// Report partially typed times as well as complete ones
    #[arg(long)]
    partial_emission: bool,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    ensure!(
        args.width > 0.0 && args.height > 0.0,
        "window size must be positive, got {}x{}",
        args.width,
        args.height
    );

    let settings = AppSettings {
        emission: if args.partial_emission {
            EmissionPolicy::Partial
        } else {
            EmissionPolicy::Complete
        },
    };
    let _ = SETTINGS.set(settings.clone());

    tracing::info!(?settings, "Starting ChronoShift");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(theme::APP_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
