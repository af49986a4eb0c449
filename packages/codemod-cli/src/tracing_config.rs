//! Tracing configuration.
//!
//! Output format is controlled by `OBJECT_SHORTHAND_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `json`: one JSON object per event
//!
//! The filter comes from `OBJECT_SHORTHAND_LOG`, then `RUST_LOG`, then the
//! `-v` count. Everything is written to stderr so printed sources on stdout
//! stay clean.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

pub const LOG_ENV: &str = "OBJECT_SHORTHAND_LOG";
pub const LOG_FORMAT_ENV: &str = "OBJECT_SHORTHAND_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// Level used when no filter is set in the environment.
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(val)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_level(verbose))
    }
}

/// Initialise the global tracing subscriber. Safe to call more than once.
pub fn init_tracing(verbose: u8) {
    let filter = build_filter(verbose);

    let result = match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
