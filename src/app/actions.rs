//! Side effects produced by the event handler.
//!
//! [`handle_event`](super::handle_event) never talks to Zellij itself; it
//! returns actions and the plugin shim performs them in order.

use crate::worker::WorkerMessage;

/// Commands to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker.
    PostToWorker(WorkerMessage),

    /// Opens `url` with the configured opener command.
    OpenUrl {
        url: String,
    },
}
