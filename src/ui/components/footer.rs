//! Footer component renderer.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the centered keybinding hints at `row` and returns `row + 1`.
///
/// Hints wider than the pane are truncated rather than wrapped.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    print_centered(row, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
    row + 1
}
