//! Tracing subscriber setup.

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::infrastructure::paths::{get_data_dir, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "tie-archive";

/// Level used when `trace_level` is unset or not a valid filter.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to the plugin data directory.
///
/// Traces go to `~/.local/share/zellij/tie-archive/tie-archive-otlp.json` on
/// the host. Observability is optional: if the directory cannot be created
/// nothing is installed, and only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let filter = env_filter(config.trace_level.as_deref());

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        RotationPolicy::default(),
        resource,
        SERVICE_NAME,
    );
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}

/// Parses the configured level, falling back to [`DEFAULT_LEVEL`].
fn env_filter(level: Option<&str>) -> EnvFilter {
    level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn invalid_level_falls_back_to_default() {
        assert_eq!(env_filter(Some("tie_archive=loud")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
