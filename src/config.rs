//! Command line and environment configuration.

use std::time::Duration;

use clap::Parser;
use folio_core::{SenderConfig, DEFAULT_EMAILJS_ENDPOINT};

/// Folio - single page portfolio
#[derive(Parser, Debug, Clone)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - a single page portfolio with a working contact form")]
pub struct Args {
    /// Window title
    #[arg(long, env = "FOLIO_TITLE", default_value = "Portfolio")]
    pub title: String,

    /// Window width in logical pixels
    #[arg(long, env = "FOLIO_WIDTH", default_value_t = 1280.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, env = "FOLIO_HEIGHT", default_value_t = 900.0)]
    pub height: f64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "FOLIO_LOG", default_value = "info")]
    pub log: String,

    /// EmailJS service id
    #[arg(long, env = "FOLIO_EMAILJS_SERVICE_ID")]
    pub emailjs_service_id: Option<String>,

    /// EmailJS template id
    #[arg(long, env = "FOLIO_EMAILJS_TEMPLATE_ID")]
    pub emailjs_template_id: Option<String>,

    /// EmailJS public key
    #[arg(long, env = "FOLIO_EMAILJS_PUBLIC_KEY")]
    pub emailjs_public_key: Option<String>,

    /// EmailJS API base URL
    #[arg(long, env = "FOLIO_EMAILJS_ENDPOINT", default_value = DEFAULT_EMAILJS_ENDPOINT)]
    pub emailjs_endpoint: String,

    /// Delay of the simulated sender, in milliseconds
    #[arg(long, env = "FOLIO_SIMULATED_DELAY_MS", default_value_t = 1500)]
    pub simulated_delay_ms: u64,

    /// Give up on a delivery after this many seconds (no deadline when unset)
    #[arg(long, env = "FOLIO_SEND_TIMEOUT_SECS")]
    pub send_timeout_secs: Option<u64>,
}

/// Resolved configuration, shared through `context::get_config`.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub window_width: f64,
    pub window_height: f64,
    pub log_filter: String,
    pub sender: SenderConfig,
}

impl From<Args> for SiteConfig {
    fn from(args: Args) -> Self {
        Self {
            title: args.title,
            window_width: args.width.max(320.0),
            window_height: args.height.max(240.0),
            log_filter: args.log,
            sender: SenderConfig {
                emailjs_service_id: args.emailjs_service_id,
                emailjs_template_id: args.emailjs_template_id,
                emailjs_public_key: args.emailjs_public_key,
                emailjs_endpoint: args.emailjs_endpoint,
                simulated_delay: Duration::from_millis(args.simulated_delay_ms),
                timeout: args
                    .send_timeout_secs
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs),
            },
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            window_width: 1280.0,
            window_height: 900.0,
            log_filter: folio_core::logging::DEFAULT_FILTER.to_string(),
            sender: SenderConfig::default(),
        }
    }
}
