//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider → OtlpFileExporter → rotated JSON lines
//! ```
//!
//! The level comes from the `trace_level` plugin option (default `info`).
//! Call [`init_tracing`] once, early in `load`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider and file span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: size-rotated trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotatingWriter, RotationPolicy};
pub use init::init_tracing;
