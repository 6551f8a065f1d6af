#![allow(non_snake_case)]

mod app;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Prism Design System - component showcase
#[derive(Parser, Debug)]
#[command(name = "prism-desktop")]
#[command(about = "Prism Design System - component showcase")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    tracing::info!("starting Prism showcase");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Prism Design System")
            .with_inner_size(dioxus::desktop::LogicalSize::new(700.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
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
