//! Domain list renderer.
//!
//! Draws only the rows the view model materialized. Each row is placed by its
//! [`RowStyle`](crate::ui::virtual_list::RowStyle), clipped to the viewport,
//! and every viewport line not covered by a row is blanked so stale content
//! from the previous frame never survives a scroll.

use crate::ui::helpers::{hyperlink_start, position_cursor, render_highlighted_text, truncate, HYPERLINK_END};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::RowItem;

/// Width of the selection marker column (`"→ "` or two spaces).
const MARKER_WIDTH: usize = 2;
const LEFT_PADDING: usize = 2;

/// Renders `rows` into a viewport of `height` lines whose first line is `top_row`.
pub fn render_list(top_row: usize, height: usize, rows: &[RowItem], theme: &Theme, cols: usize, hyperlinks: bool) {
    let mut covered = vec![false; height];

    for item in rows {
        for (line, line_in_row) in item.style.visible_lines(height) {
            covered[line] = true;
            position_cursor(top_row + line, 1);
            if line_in_row == 0 {
                render_row_text(item, theme, cols, hyperlinks);
            } else {
                render_row_filler(item, theme, cols);
            }
        }
    }

    for (line, _) in covered.iter().enumerate().filter(|(_, c)| !**c) {
        position_cursor(top_row + line, 1);
        print!("{}", " ".repeat(cols));
    }
}

/// First line of a row: marker, domain, padding to the full width.
fn render_row_text(item: &RowItem, theme: &Theme, cols: usize, hyperlinks: bool) {
    let row_color = if item.is_selected {
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    print!("{}", " ".repeat(LEFT_PADDING));
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{}", Theme::fg(row_color));
        print!("→ ");
    } else {
        print!("{}", Theme::fg(row_color));
        print!("{}", " ".repeat(MARKER_WIDTH));
    }

    let available = item.style.width.min(cols).saturating_sub(LEFT_PADDING + MARKER_WIDTH + 1);
    let text = truncate(&item.domain, available);
    // A truncated domain may have lost part of the match.
    let highlight = item
        .highlight_range
        .filter(|&(_, end)| end <= text.chars().count());

    if hyperlinks {
        print!("{}", hyperlink_start(&item.url));
    }
    render_highlighted_text(&text, highlight, theme, item.is_selected);
    if hyperlinks {
        print!("{HYPERLINK_END}");
    }

    let used = LEFT_PADDING + MARKER_WIDTH + text.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
}

/// Extra lines of a row taller than one line.
fn render_row_filler(item: &RowItem, theme: &Theme, cols: usize) {
    print!("{}", " ".repeat(LEFT_PADDING));
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
    print!("{}", " ".repeat(cols.saturating_sub(LEFT_PADDING)));
    print!("{}", Theme::reset());
}
