//! Composable UI component renderers.
//!
//! Each component draws one band of the screen at the rows given by
//! [`ScreenLayout`](crate::ui::layout::ScreenLayout) and returns the next free
//! row where that is meaningful.
//!
//! - [`header`]: title, description and outbound links
//! - [`search`]: always-live search box
//! - [`count`]: match counter
//! - [`list`]: virtualized domain rows
//! - [`empty`]: loading and load-failure message
//! - [`footer`]: keybinding hints

mod count;
mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{self, ScreenLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use count::render_count;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
///
/// The header, search box and counter are always drawn so typing stays
/// possible while the list is replaced by the loading or error message.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, screen: ScreenLayout) {
    let cols = screen.cols;

    render_header(layout::HEADER_ROW, &vm.header, theme, cols, vm.hyperlinks);
    render_border(layout::HEADER_BORDER_ROW, &theme.colors.border, cols);
    render_search_bar(layout::SEARCH_ROW, &vm.search_bar, theme, cols);
    render_count(layout::COUNT_ROW, &vm.count, theme, cols);
    render_border(layout::LIST_BORDER_ROW, &theme.colors.border, cols);

    let height = screen.list_height();
    match &vm.empty_state {
        Some(empty) => {
            render_list(layout::LIST_TOP_ROW, height, &[], theme, cols, false);
            if height > 0 {
                render_empty_state(layout::LIST_TOP_ROW + height.saturating_sub(2) / 2, empty, theme, cols);
            }
        }
        None => render_list(layout::LIST_TOP_ROW, height, &vm.rows, theme, cols, vm.hyperlinks),
    }

    if screen.rows > layout::LIST_TOP_ROW {
        render_border(screen.footer_border_row(), &theme.colors.border, cols);
        render_footer(screen.footer_row(), &vm.footer, theme, cols);
    }
}
