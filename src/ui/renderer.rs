//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from
//! [`AppState`](crate::app::AppState), then hand it to the components. Only
//! the view model step knows about the domain browser; the components only see
//! display-ready strings and row placements.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::ScreenLayout;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen: every component pads its lines to the full
/// width instead.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(rows, cols, materialized = viewmodel.rows.len(), "render");

    components::render_screen(&viewmodel, &state.theme, ScreenLayout::new(rows, cols));
}
