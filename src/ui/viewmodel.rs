//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only; rows are already windowed
//! so the renderer never sees more than the viewport plus overscan.

use crate::ui::virtual_list::RowStyle;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub count: CountInfo,

    /// Materialized rows, in list order.
    pub rows: Vec<RowItem>,

    pub footer: FooterInfo,

    /// Replaces the list while loading or after a fatal load error.
    pub empty_state: Option<EmptyState>,

    /// Whether rows and header links are emitted as OSC 8 hyperlinks.
    pub hyperlinks: bool,
}

/// One row of the virtualized list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowItem {
    /// Index in the filtered view.
    pub index: usize,
    pub domain: String,
    /// `https://<domain>`.
    pub url: String,
    /// Placement relative to the list viewport.
    pub style: RowStyle,
    pub is_selected: bool,
    /// Character range of the matched query, if highlighted.
    pub highlight_range: Option<(usize, usize)>,
}

/// Title block at the top of the pane.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub description: String,
    /// Shown next to the description.
    pub about: LinkInfo,
    /// Right-aligned on the title row.
    pub links: Vec<LinkInfo>,
}

/// An outbound link with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInfo {
    pub label: String,
    pub url: String,
}

/// Search input state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Shown dimmed while `query` is empty.
    pub placeholder: String,
}

/// Live match counter.
#[derive(Debug, Clone)]
pub struct CountInfo {
    /// Formatted text, e.g. `"12,345 domains found"`.
    pub text: String,
}

/// Keybinding hints for the bottom of the pane.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown in place of the list.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Rendered in the theme's error color.
    pub is_error: bool,
}
