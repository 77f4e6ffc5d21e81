//! Logging setup for VAS
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer in the configured format.

#![allow(clippy::must_use_candidate)]

use tracing_subscriber::EnvFilter;
use vas_config::{LogFormat, TelemetryConfig};

/// Effective filter directives
///
/// The configured `log_filter` wins over `default_filter`. Invalid
/// directives fall back to `info`.
pub fn build_filter(config: Option<&TelemetryConfig>, default_filter: &str) -> EnvFilter {
    let directives = config
        .and_then(|c| c.log_filter.as_deref())
        .unwrap_or(default_filter);

    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize global logging from configuration
///
/// Must be called once, before the first log event.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = build_filter(config, default_filter);
    let format = config.map(|c| c.format).unwrap_or_default();

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Plain => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            registry
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true);

            registry
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;
        }
    }

    if let Some(config) = config {
        tracing::debug!(service_name = %config.service_name, format = ?format, "logging initialized");
    }

    Ok(())
}
