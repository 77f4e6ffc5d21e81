#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use env::EnvError;
pub use server::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level VAS service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
