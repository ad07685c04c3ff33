//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK TracerProvider → OtlpFileExporter → RotatingFile
//! ```
//!
//! Spans land as OTLP JSON lines in `/data/charbrowser-otlp.json`, the
//! plugin's sandboxed data directory. The file rotates at 5 MB and keeps
//! three backups stamped with the rotation time.
//!
//! The filter comes from the `trace_level` configuration key (default
//! `info`) and accepts any `EnvFilter` directive, e.g.
//! `charbrowser::app=debug,info`.
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` writing OTLP JSON batches
//! - [`rotating_file`]: Size-rotated append-only file

mod exporter;
mod init;
mod rotating_file;

pub use init::{init_tracing, TRACE_FILE_NAME};
pub use rotating_file::{RotatingFile, RotationPolicy};
