//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "almostevery";
const TRACE_FILE: &str = "almostevery-otlp.json";

/// Installs the global subscriber: an [`EnvFilter`] built from
/// `config.trace_level` (default `info`) in front of an OpenTelemetry layer
/// that writes to `almostevery-otlp.json` in the plugin data directory.
///
/// Tracing is optional. If the data directory cannot be created or a
/// subscriber is already installed, this returns without doing anything.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource, SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
