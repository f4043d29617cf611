//! Loading and load-failure message, drawn in place of the list.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    print_centered(row, &empty.message, &Theme::fg(color), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_centered(row + 1, &empty.subtitle, &subtitle_style, cols);
}
