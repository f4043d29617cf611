//! Messages exchanged between the plugin thread and the domain loader worker.
//!
//! Both directions are JSON encoded by the caller. Requests carry an optional
//! [`TraceContext`] so the worker's spans join the trace that posted them.

use serde::{Deserialize, Serialize};

/// W3C-style trace identifiers captured from the current span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// 32 hex characters.
    pub trace_id: String,
    /// 16 hex characters.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current tracing span.
    ///
    /// Returns `None` outside an exported span, e.g. before tracing is set up.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that fill `trace_context` from the current span.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Creates a ", stringify!($variant), " message with the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_domains(LoadDomains { path: String }),
}

/// Requests from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read and parse the domain list at `path`, a path as seen by the plugin
    /// sandbox (usually under `/host`).
    LoadDomains {
        path: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadDomains { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Replies from the worker to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The raw list in file order. Shuffling happens on the plugin side.
    DomainsLoaded {
        domains: Vec<String>,
        /// Path the list was read from.
        source: String,
    },

    Error {
        message: String,
    },
}
