//! Tracing subscriber setup.

use super::exporter;
use super::rotating_file::{RotatingFile, RotationPolicy};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "charbrowser-otlp.json";

const SERVICE_NAME: &str = "charbrowser";

/// Installs the global subscriber.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without tracing. Only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let file = RotatingFile::new(data_dir.join(TRACE_FILE_NAME), RotationPolicy::default());
    let provider = exporter::tracer_provider(file, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();

    tracing::info!(api = %config.character_api_url, location = %config.location, "tracing initialized");
}
