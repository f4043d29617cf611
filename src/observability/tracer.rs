//! Tracer provider that exports finished spans to a local file.
//!
//! Zellij plugins have no network access worth relying on, so instead of an
//! OTLP collector the spans go through [`OtlpJsonEncoder`] into a
//! [`RotatingFile`]. Export is synchronous (simple span processor): each span
//! is written as it ends.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::span_formatter::OtlpJsonEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

struct FileSpanExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    is_shutdown: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("file exporter is shut down"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("encoder", &self.encoder)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider whose spans are appended to `file_path` as OTLP/JSON.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path, RotationPolicy::default()),
        encoder: OtlpJsonEncoder::new(resource.clone(), scope),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
