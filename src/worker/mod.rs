//! Background worker that reads the domain list off the plugin thread.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: the Zellij worker and its message processing

pub mod handler;
pub mod messages;

pub use handler::DomainLoaderWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
