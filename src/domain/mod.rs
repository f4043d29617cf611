//! Domain layer: the domain list and everything derived from it.
//!
//! Nothing in here knows about Zellij, rendering or threads. The application
//! layer owns a [`DomainBrowser`] and feeds it queries; the worker uses
//! [`list`] to turn the data resource into the raw list.
//!
//! # Organization
//!
//! - [`browser`]: shuffled list, query and filtered view
//! - [`filter`]: case-insensitive substring matching
//! - [`list`]: parsing and loading of the newline-delimited resource
//! - [`shuffle`]: injectable permutation strategies
//! - [`error`]: error types and result alias

pub mod browser;
pub mod error;
pub mod filter;
pub mod list;
pub mod shuffle;

pub use browser::DomainBrowser;
pub use error::{AlmostEveryError, Result};
pub use shuffle::{RandomShuffler, Shuffler};

/// The address a domain row links to.
#[must_use]
pub fn domain_url(domain: &str) -> String {
    format!("https://{domain}")
}
