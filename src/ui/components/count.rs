//! Match counter line.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CountInfo;

/// Indented to line up with the search box text.
const COUNT_INDENT: usize = 6;

/// Renders the counter at `row` and returns the next row.
pub fn render_count(row: usize, count: &CountInfo, theme: &Theme, cols: usize) -> usize {
    let text_len = count.text.chars().count();

    position_cursor(row, 1);
    print!("{}", " ".repeat(COUNT_INDENT));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", count.text);
    print!("{}", " ".repeat(cols.saturating_sub(COUNT_INDENT + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
