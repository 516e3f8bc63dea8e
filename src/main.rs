#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod content;
mod dom;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::config::{Args, SiteConfig};

/// Global configuration, set from command line
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (set from command line or default)
pub fn get_config() -> SiteConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

fn main() {
    let config = SiteConfig::from(Args::parse());
    folio_core::logging::init(&config.log_filter);

    tracing::info!(
        title = %config.title,
        emailjs = config.sender.has_emailjs(),
        "Starting portfolio"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    let _ = CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
