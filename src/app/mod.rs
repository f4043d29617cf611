//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the domain, UI and worker
//! layers:
//!
//! ```text
//! Zellij input → Event → handle_event → AppState mutation → Actions → Zellij
//!                            ↑                                 ↓
//!                            └──────── worker responses ───────┘
//! ```
//!
//! - [`actions`]: side effects emitted by the handler
//! - [`handler`]: event dispatch
//! - [`state`]: load state, selection, scrolling and view model computation

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{AppState, ListOptions, LoadState};
