//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → OTLP/JSON lines → rotating file
//! ```
//!
//! Traces land in `~/.local/share/zellij/almostevery/almostevery-otlp.json`
//! (seen from the sandbox under `/host`), rotated at 10 MiB with three numbered
//! backups. The filter level comes from the `trace_level` plugin option and
//! accepts any `EnvFilter` directive, e.g. `almostevery=debug`.
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: file span exporter and provider
//! - [`span_formatter`]: OTLP/JSON encoding
//! - [`file_writer`]: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
