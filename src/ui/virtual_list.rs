//! Fixed-height list virtualization.
//!
//! Only rows inside the viewport (plus a small overscan margin on each side)
//! are materialized, so the cost of a frame depends on the viewport size and not
//! on how many domains match. Geometry is expressed in abstract layout units:
//! terminal lines when rendering, but nothing here assumes that.
//!
//! The window is recomputed from scratch on every scroll or resize. There is no
//! incremental state beyond the scroll offset.

use std::ops::Range;

/// Everything the window calculation depends on apart from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGeometry {
    /// Height of the scrollable area.
    pub viewport_height: usize,
    /// Width of the scrollable area. Does not affect which rows are visible.
    pub viewport_width: usize,
    /// Number of rows in the filtered view.
    pub item_count: usize,
    /// Height of every row. Zero is treated as one.
    pub item_height: usize,
    /// Extra rows materialized above and below the visible ones.
    pub overscan: usize,
}

impl ListGeometry {
    #[must_use]
    pub const fn new(viewport_height: usize, viewport_width: usize, item_count: usize, item_height: usize) -> Self {
        Self {
            viewport_height,
            viewport_width,
            item_count,
            item_height,
            overscan: 0,
        }
    }

    #[must_use]
    pub const fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    const fn row_height(&self) -> usize {
        if self.item_height == 0 {
            1
        } else {
            self.item_height
        }
    }

    /// Total height of all rows.
    #[must_use]
    pub const fn content_height(&self) -> usize {
        self.item_count.saturating_mul(self.row_height())
    }

    /// Largest scroll offset that still fills the viewport. Zero when the content fits.
    #[must_use]
    pub const fn max_scroll(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// Number of rows that fit entirely in the viewport, at least one.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        let rows = self.viewport_height / self.row_height();
        if rows == 0 {
            1
        } else {
            rows
        }
    }
}

/// The index range to materialize for one scroll position.
///
/// All bounds are inclusive indices into the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualWindow {
    pub first_visible: usize,
    pub last_visible: usize,
    pub first_rendered: usize,
    pub last_rendered: usize,
    /// Scroll offset the window was computed for, after clamping.
    pub scroll_offset: usize,
}

impl VirtualWindow {
    /// Computes the visible and rendered ranges for `scroll_offset`.
    ///
    /// Returns `None` when there is nothing to draw: no rows or a zero-height
    /// viewport. Offsets past the end are clamped to [`ListGeometry::max_scroll`].
    #[must_use]
    pub fn compute(geometry: &ListGeometry, scroll_offset: usize) -> Option<Self> {
        if geometry.item_count == 0 || geometry.viewport_height == 0 {
            return None;
        }

        let height = geometry.row_height();
        let last_index = geometry.item_count - 1;
        let offset = scroll_offset.min(geometry.max_scroll());

        let first_visible = (offset / height).min(last_index);
        let bottom = offset + geometry.viewport_height;
        let last_visible = (bottom.div_ceil(height).saturating_sub(1)).min(last_index);

        Some(Self {
            first_visible,
            last_visible,
            first_rendered: first_visible.saturating_sub(geometry.overscan),
            last_rendered: last_visible.saturating_add(geometry.overscan).min(last_index),
            scroll_offset: offset,
        })
    }

    /// Indices intersecting the viewport.
    #[must_use]
    pub const fn visible_range(&self) -> Range<usize> {
        self.first_visible..self.last_visible + 1
    }

    /// Indices to materialize, overscan included.
    #[must_use]
    pub const fn rendered_range(&self) -> Range<usize> {
        self.first_rendered..self.last_rendered + 1
    }

    /// Position of row `index` relative to the viewport top.
    ///
    /// Overscan rows above the viewport get a negative `top`.
    #[must_use]
    pub fn row_style(&self, geometry: &ListGeometry, index: usize) -> RowStyle {
        let height = geometry.row_height();
        let top = index as isize * height as isize - self.scroll_offset as isize;
        RowStyle {
            top,
            height,
            width: geometry.viewport_width,
        }
    }
}

/// Placement of one materialized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub top: isize,
    pub height: usize,
    pub width: usize,
}

impl RowStyle {
    /// Viewport lines covered by this row, clipped to `viewport_height`.
    pub fn visible_lines(&self, viewport_height: usize) -> impl Iterator<Item = (usize, usize)> {
        let top = self.top;
        (0..self.height).filter_map(move |line_in_row| {
            let line = top + line_in_row as isize;
            usize::try_from(line)
                .ok()
                .filter(|&l| l < viewport_height)
                .map(|l| (l, line_in_row))
        })
    }
}

/// Scroll position of the list, in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
}

impl ScrollState {
    /// Scrolls by `delta` units, positive is down, clamped to the content.
    pub fn scroll_by(&mut self, delta: isize, geometry: &ListGeometry) {
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.offset = target.min(geometry.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Puts row `index` at the top of the viewport, as far as the content allows.
    pub fn scroll_to_index(&mut self, index: usize, geometry: &ListGeometry) {
        self.offset = index
            .saturating_mul(geometry.row_height())
            .min(geometry.max_scroll());
    }

    /// Scrolls the minimum distance needed to show all of row `index`.
    pub fn ensure_visible(&mut self, index: usize, geometry: &ListGeometry) {
        let height = geometry.row_height();
        let row_top = index.saturating_mul(height);
        let row_bottom = row_top.saturating_add(height);

        if row_top < self.offset {
            self.offset = row_top;
        } else if row_bottom > self.offset + geometry.viewport_height {
            self.offset = row_bottom.saturating_sub(geometry.viewport_height);
        }
        self.clamp(geometry);
    }

    pub fn clamp(&mut self, geometry: &ListGeometry) {
        self.offset = self.offset.min(geometry.max_scroll());
    }

    /// Maps a viewport line to the row drawn there, if any.
    #[must_use]
    pub fn index_at(&self, line: usize, geometry: &ListGeometry) -> Option<usize> {
        if line >= geometry.viewport_height {
            return None;
        }
        let index = (self.offset + line) / geometry.row_height();
        (index < geometry.item_count).then_some(index)
    }
}
