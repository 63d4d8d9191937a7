//! Log subscriber setup for the runner.

use anyhow::Result;
use aquasim_core::LogFormat;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,aquasim_world=debug";

/// Install the global subscriber. Logs go to stderr; stdout carries the tank.
pub fn init_telemetry(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (text_layer, json_layer) = match format {
        LogFormat::Text => (
            Some(fmt::layer().with_target(true).with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()?;

    info!(format = ?format, "Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_enables_world_debug() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("aquasim_world=debug"), "{rendered}");
        assert!(rendered.contains("info"), "{rendered}");
    }
}
