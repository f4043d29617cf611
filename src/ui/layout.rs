//! Screen layout shared by the renderer and mouse hit testing.
//!
//! ```text
//! row 1      (blank)
//! row 2      title                               links
//! row 3      description  about
//! row 4      ──────────────────────────────────────────
//! row 5-7    ┌ search box ┐
//! row 8      N domains found
//! row 9      ──────────────────────────────────────────
//! row 10..   list viewport
//! rows-1     ──────────────────────────────────────────
//! rows       footer
//! ```
//!
//! Rows are 1-indexed to match [`position_cursor`](super::helpers::position_cursor).

/// First row of the header block.
pub const HEADER_ROW: usize = 2;
/// Row of the top border under the header.
pub const HEADER_BORDER_ROW: usize = 4;
/// First row of the three-line search box.
pub const SEARCH_ROW: usize = 5;
/// Row of the match counter.
pub const COUNT_ROW: usize = 8;
/// Row of the border above the list.
pub const LIST_BORDER_ROW: usize = 9;
/// First row of the list viewport.
pub const LIST_TOP_ROW: usize = 10;

/// Rows not available to the list: everything above it plus bottom border and footer.
const CHROME_ROWS: usize = LIST_TOP_ROW - 1 + 2;

/// Resolved positions for one pane size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub rows: usize,
    pub cols: usize,
}

impl ScreenLayout {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Height of the list viewport in lines.
    #[must_use]
    pub const fn list_height(&self) -> usize {
        self.rows.saturating_sub(CHROME_ROWS)
    }

    /// Row of the border below the list.
    #[must_use]
    pub const fn footer_border_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Row of the footer.
    #[must_use]
    pub const fn footer_row(&self) -> usize {
        self.rows
    }

    /// Maps a 0-based pane line, as Zellij reports mouse positions, to a list viewport line.
    #[must_use]
    pub const fn list_line(&self, pane_line: usize) -> Option<usize> {
        let top = LIST_TOP_ROW - 1;
        if pane_line < top || pane_line >= top + self.list_height() {
            None
        } else {
            Some(pane_line - top)
        }
    }
}
