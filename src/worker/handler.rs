//! Zellij worker that loads the domain list.
//!
//! The worker is stateless: each [`WorkerMessage::LoadDomains`] reads the file
//! from scratch. Tracing is initialized on the first message because the worker
//! runs in its own instance and does not share the plugin's subscriber.

use crate::domain::list::load_domain_list;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

#[derive(Serialize, Deserialize, Default)]
pub struct DomainLoaderWorker;

impl DomainLoaderWorker {
    fn handle_load_domains(path: String) -> WorkerResponse {
        match load_domain_list(Path::new(&path)) {
            Ok(domains) => {
                tracing::debug!(domain_count = domains.len(), source = %path, "domain list read");
                WorkerResponse::DomainsLoaded { domains, source: path }
            }
            Err(e) => WorkerResponse::Error {
                message: e.to_string(),
            },
        }
    }

    /// Re-parents the worker's spans under the span that posted `message`.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one request. Never panics; failures become [`WorkerResponse::Error`].
    #[must_use]
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadDomains { path, .. } => Self::handle_load_domains(path),
        }
    }
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

impl ZellijWorker<'_> for DomainLoaderWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed worker message: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}
