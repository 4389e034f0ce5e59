//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "spellbook";

const DEFAULT_LEVEL: &str = "info";

/// Where spans are written.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    crate::infrastructure::get_data_dir().join("spellbook-otlp.json")
}

/// Installs the global subscriber.
///
/// Only the first call in a process takes effect. If the data directory cannot
/// be created the plugin runs without tracing.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let trace_file = trace_file_path();
    if let Some(dir) = trace_file.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(trace_file, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
