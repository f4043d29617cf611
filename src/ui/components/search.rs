//! Search box component renderer.
//!
//! A three-line framed input. The query is always live: there is no separate
//! search mode, every keystroke goes to the box.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search box at `row` and returns `row + 3`.
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ Search domains...    │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
///
/// While the query is empty the placeholder is shown dimmed. A long query is
/// cut from the left so the cursor end stays visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let text_width = inner_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (text, color) = if search.query.is_empty() {
        (truncate(&search.placeholder, text_width), &theme.colors.placeholder_fg)
    } else {
        (tail(&search.query, text_width.saturating_sub(1)) + "▏", &theme.colors.text_normal)
    };
    let padding = text_width.saturating_sub(text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│ ");
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!(" │");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `max` characters of `text`.
fn tail(text: &str, max: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(max)).collect()
}
