//! Messages exchanged with the worker thread.
//!
//! Requests go to the worker as JSON [`WorkerMessage`]s. The worker answers with
//! [`WorkerResponse`]s, which `worker::bridge` puts on the catalog or status
//! channel. Requests carry the caller's trace context so worker spans join the
//! same trace.

use crate::domain::Spell;
use serde::{Deserialize, Serialize};

/// Trace and span IDs captured on the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID, 32 hex chars.
    pub trace_id: String,

    /// Span ID of the sender, 16 hex chars.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the current span's OpenTelemetry context.
    ///
    /// Returns `None` when there is no valid span, e.g. before tracing is set up.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
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
    load_catalog(LoadCatalog { path: String }),
}

/// Requests from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load (or reload) the catalog at `path`.
    LoadCatalog {
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// What the worker produces, one value per delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A complete catalog. At most one per load request.
    CatalogLoaded { spells: Vec<Spell> },

    /// Free-form text for the status surface.
    Status { text: String },
}

impl WorkerResponse {
    pub fn status(text: impl Into<String>) -> Self {
        Self::Status { text: text.into() }
    }
}
