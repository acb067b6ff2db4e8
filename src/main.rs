#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use cardforge_core::{logging, CardConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global configuration, resolved once from file, env and command line
static CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the resolved configuration (defaults if startup did not set one)
pub fn get_config() -> CardConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Cardforge - business card builder
#[derive(Parser, Debug)]
#[command(name = "cardforge-desktop")]
#[command(about = "Cardforge - build a digital business card with live preview")]
struct Args {
    /// Config file (default: <config dir>/cardforge/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Card server base URL
    #[arg(short, long)]
    server: Option<String>,
}

fn main() -> Result<()> {
    logging::init(1);

    let args = Args::parse();

    let mut config = CardConfig::load(args.config.as_deref())?;
    if let Some(server) = args.server {
        config.server_url = server;
    }

    tracing::info!("Starting Cardforge against {}", config.create_card_url());
    let _ = CONFIG.set(config);

    // Wide enough for form and preview side by side
    let window_width = 1100.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardforge")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
