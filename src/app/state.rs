//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the pane shows:
//! whether the domain list has loaded, the current selection, the scroll
//! position of the list and the pane size it was laid out for. The domain
//! list itself and the query live in the [`DomainBrowser`] held by
//! [`LoadState::Ready`].
//!
//! Selection and scrolling are independent. Keyboard navigation moves the
//! selection and scrolls just enough to keep it on screen; mouse scrolling
//! moves the list and drags the selection along only when it would leave the
//! viewport.

use crate::domain::filter::match_range;
use crate::domain::{domain_url, DomainBrowser, RandomShuffler, Shuffler};
use crate::ui::helpers::format_count;
use crate::ui::layout::ScreenLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CountInfo, EmptyState, FooterInfo, HeaderInfo, LinkInfo, RowItem, SearchBarInfo, UIViewModel,
};
use crate::ui::virtual_list::{ListGeometry, ScrollState, VirtualWindow};
use std::fmt;

const TITLE: &str = "every vercel.app";
const DESCRIPTION: &str = "well, almost every...";
const ABOUT_URL: &str = "https://owenmc.dev/posts/every-vercel-app";
const AUTHOR_URL: &str = "https://owenmc.dev";
const X_URL: &str = "https://x.com/owenmcdev";
const SOURCE_URL: &str = "https://github.com/owenmccadden/almostevery";
const PLACEHOLDER: &str = "Search domains...";
const KEYBINDINGS: &str = "↑/↓ select  PgUp/PgDn page  Enter open  Esc clear/close";

/// Progress of the one-time domain list load.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Waiting for the worker.
    Loading,
    /// The list is loaded, shuffled and searchable.
    Ready(DomainBrowser),
    /// The resource could not be read. Not retried within a session.
    Failed(String),
}

/// List rendering options taken from the plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Lines per row.
    pub item_height: usize,
    /// Rows materialized beyond each edge of the viewport.
    pub overscan: usize,
    /// Emit OSC 8 hyperlinks for rows and header links.
    pub hyperlinks: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            item_height: 1,
            overscan: 2,
            hyperlinks: true,
        }
    }
}

/// Central application state container.
pub struct AppState {
    pub load: LoadState,

    /// Index into the filtered view. Meaningless while the view is empty.
    pub selected_index: usize,

    pub scroll: ScrollState,

    /// Pane size the scroll position was last clamped against.
    pub screen: ScreenLayout,

    pub theme: Theme,

    pub options: ListOptions,

    /// Whether the worker has been asked for the list.
    load_requested: bool,

    /// Used once, when the list arrives.
    shuffler: Box<dyn Shuffler>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("load", &self.load)
            .field("selected_index", &self.selected_index)
            .field("scroll", &self.scroll)
            .field("screen", &self.screen)
            .field("theme", &self.theme.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates a state waiting for the domain list, shuffling with OS entropy.
    #[must_use]
    pub fn new(theme: Theme, options: ListOptions) -> Self {
        Self {
            load: LoadState::Loading,
            selected_index: 0,
            scroll: ScrollState::default(),
            screen: ScreenLayout::default(),
            theme,
            options,
            load_requested: false,
            shuffler: Box::new(RandomShuffler::from_entropy()),
        }
    }

    /// Replaces the shuffle strategy used when the list arrives.
    #[must_use]
    pub fn with_shuffler<S: Shuffler + 'static>(mut self, shuffler: S) -> Self {
        self.shuffler = Box::new(shuffler);
        self
    }

    #[must_use]
    pub const fn browser(&self) -> Option<&DomainBrowser> {
        match &self.load {
            LoadState::Ready(browser) => Some(browser),
            _ => None,
        }
    }

    /// The active query, empty until the list has loaded.
    #[must_use]
    pub fn query(&self) -> &str {
        self.browser().map_or("", DomainBrowser::query)
    }

    /// Number of domains in the filtered view.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.browser().map_or(0, DomainBrowser::count)
    }

    /// List geometry for the current pane size.
    #[must_use]
    pub fn geometry(&self) -> ListGeometry {
        self.geometry_for(self.screen)
    }

    fn geometry_for(&self, screen: ScreenLayout) -> ListGeometry {
        ListGeometry::new(
            screen.list_height(),
            screen.cols,
            self.item_count(),
            self.options.item_height,
        )
        .with_overscan(self.options.overscan)
    }

    /// Marks the list as requested. Returns `false` if it already was.
    pub fn request_load(&mut self) -> bool {
        !std::mem::replace(&mut self.load_requested, true)
    }

    /// Installs the loaded list. Only the first load is accepted.
    ///
    /// Returns `true` if the state changed.
    pub fn finish_loading(&mut self, domains: Vec<String>) -> bool {
        if !matches!(self.load, LoadState::Loading) {
            tracing::debug!(domain_count = domains.len(), "domain list already loaded, ignoring");
            return false;
        }

        let browser = DomainBrowser::initialize(domains, self.shuffler.as_mut());
        tracing::info!(domain_count = browser.total(), "domain list ready");

        self.load = LoadState::Ready(browser);
        self.selected_index = 0;
        self.scroll.scroll_to_top();
        true
    }

    /// Records a fatal load error. Ignored once the list has loaded.
    pub fn fail_loading(&mut self, message: &str) -> bool {
        if !matches!(self.load, LoadState::Loading) {
            return false;
        }
        tracing::error!(error = %message, "domain list failed to load");
        self.load = LoadState::Failed(message.to_string());
        true
    }

    /// Replaces the query, moving the selection and the scroll back to the top
    /// when the query text changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        let LoadState::Ready(browser) = &mut self.load else {
            return false;
        };
        if !browser.set_query(query) {
            return false;
        }
        self.selected_index = 0;
        self.scroll.scroll_to_top();
        true
    }

    pub fn push_char(&mut self, c: char) -> bool {
        let mut query = self.query().to_string();
        query.push(c);
        self.set_query(&query)
    }

    pub fn pop_char(&mut self) -> bool {
        let mut query = self.query().to_string();
        if query.pop().is_none() {
            return false;
        }
        self.set_query(&query)
    }

    pub fn clear_query(&mut self) -> bool {
        self.set_query("")
    }

    /// Moves the selection down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) -> bool {
        let count = self.item_count();
        if count == 0 {
            return false;
        }
        self.select((self.selected_index + 1) % count)
    }

    /// Moves the selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) -> bool {
        let count = self.item_count();
        if count == 0 {
            return false;
        }
        let index = if self.selected_index == 0 {
            count - 1
        } else {
            self.selected_index - 1
        };
        self.select(index)
    }

    pub fn page_down(&mut self) -> bool {
        let count = self.item_count();
        if count == 0 {
            return false;
        }
        let page = self.geometry().page_size();
        self.select((self.selected_index + page).min(count - 1))
    }

    pub fn page_up(&mut self) -> bool {
        if self.item_count() == 0 {
            return false;
        }
        let page = self.geometry().page_size();
        self.select(self.selected_index.saturating_sub(page))
    }

    pub fn select_first(&mut self) -> bool {
        if self.item_count() == 0 {
            return false;
        }
        self.select(0)
    }

    pub fn select_last(&mut self) -> bool {
        let count = self.item_count();
        if count == 0 {
            return false;
        }
        self.select(count - 1)
    }

    /// Selects `index` and scrolls the minimum needed to show it.
    fn select(&mut self, index: usize) -> bool {
        let geometry = self.geometry();
        let before = (self.selected_index, self.scroll);
        self.selected_index = index;
        self.scroll.ensure_visible(index, &geometry);
        before != (self.selected_index, self.scroll)
    }

    /// Scrolls the list by `delta` lines, positive is down.
    ///
    /// The selection is pulled back into the viewport if the scroll moved it out.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let geometry = self.geometry();
        let before = self.scroll;
        self.scroll.scroll_by(delta, &geometry);
        if self.scroll == before {
            return false;
        }

        if let Some(window) = VirtualWindow::compute(&geometry, self.scroll.offset) {
            self.selected_index = self
                .selected_index
                .clamp(window.first_visible, window.last_visible);
        }
        true
    }

    /// Selects the row under a 0-based pane line and returns its URL.
    ///
    /// Returns `None` for clicks outside the list or below its last row.
    pub fn click(&mut self, pane_line: usize) -> Option<String> {
        let line = self.screen.list_line(pane_line)?;
        let index = self.scroll.index_at(line, &self.geometry())?;
        self.selected_index = index;
        self.selected_url()
    }

    /// Adopts a new pane size, keeping the selection visible.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        let screen = ScreenLayout::new(rows, cols);
        if screen == self.screen {
            return false;
        }
        tracing::debug!(rows, cols, "pane resized");

        self.screen = screen;
        let geometry = self.geometry();
        self.scroll.clamp(&geometry);
        if self.item_count() > 0 && geometry.viewport_height > 0 {
            self.scroll.ensure_visible(self.selected_index, &geometry);
        }
        true
    }

    #[must_use]
    pub fn selected_domain(&self) -> Option<&str> {
        self.browser()?.get(self.selected_index)
    }

    #[must_use]
    pub fn selected_url(&self) -> Option<String> {
        self.selected_domain().map(domain_url)
    }

    /// Computes the view model for a `rows` by `cols` pane.
    ///
    /// Only rows in the virtual window (visible rows plus overscan) are
    /// materialized, whatever the size of the filtered view.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let geometry = self.geometry_for(ScreenLayout::new(rows, cols));

        let (rows, empty_state) = match &self.load {
            LoadState::Loading => (
                vec![],
                Some(EmptyState {
                    message: "Loading domains...".to_string(),
                    subtitle: String::new(),
                    is_error: false,
                }),
            ),
            LoadState::Failed(error) => (
                vec![],
                Some(EmptyState {
                    message: "Failed to load the domain list".to_string(),
                    subtitle: error.clone(),
                    is_error: true,
                }),
            ),
            LoadState::Ready(browser) => (self.compute_rows(browser, &geometry), None),
        };

        UIViewModel {
            header: Self::compute_header(),
            search_bar: SearchBarInfo {
                query: self.query().to_string(),
                placeholder: PLACEHOLDER.to_string(),
            },
            count: CountInfo {
                text: format!("{} domains found", format_count(self.item_count())),
            },
            rows,
            footer: FooterInfo {
                keybindings: KEYBINDINGS.to_string(),
            },
            empty_state,
            hyperlinks: self.options.hyperlinks,
        }
    }

    fn compute_rows(&self, browser: &DomainBrowser, geometry: &ListGeometry) -> Vec<RowItem> {
        let Some(window) = VirtualWindow::compute(geometry, self.scroll.offset) else {
            return vec![];
        };
        let query = browser.query();

        window
            .rendered_range()
            .filter_map(|index| {
                let domain = browser.get(index)?;
                Some(RowItem {
                    index,
                    domain: domain.to_string(),
                    url: domain_url(domain),
                    style: window.row_style(geometry, index),
                    is_selected: index == self.selected_index,
                    highlight_range: match_range(domain, query),
                })
            })
            .collect()
    }

    fn compute_header() -> HeaderInfo {
        let link = |label: &str, url: &str| LinkInfo {
            label: label.to_string(),
            url: url.to_string(),
        };
        HeaderInfo {
            title: TITLE.to_string(),
            description: DESCRIPTION.to_string(),
            about: link("about", ABOUT_URL),
            links: vec![
                link("owenmcdev", AUTHOR_URL),
                link("x", X_URL),
                link("source", SOURCE_URL),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("app-{i}.vercel.app")).collect()
    }

    /// Ready state with the list kept in its given order and a 20x80 pane,
    /// which leaves 9 list lines.
    fn ready(list: Vec<String>) -> AppState {
        let mut state = AppState::new(Theme::default(), ListOptions::default())
            .with_shuffler(|_: &mut [String]| {});
        state.resize(20, 80);
        assert!(state.finish_loading(list));
        state
    }

    #[test]
    fn starts_loading_with_nothing_selectable() {
        let mut state = AppState::new(Theme::default(), ListOptions::default());
        assert!(matches!(state.load, LoadState::Loading));
        assert_eq!(state.item_count(), 0);
        assert!(!state.push_char('a'));
        assert!(!state.move_selection_down());
        assert_eq!(state.selected_url(), None);
    }

    #[test]
    fn load_shuffles_with_the_injected_strategy() {
        let mut state = AppState::new(Theme::default(), ListOptions::default())
            .with_shuffler(|d: &mut [String]| d.reverse());
        state.finish_loading(domains(&["a.vercel.app", "b.vercel.app", "c.vercel.app"]));

        let browser = state.browser().unwrap();
        assert_eq!(browser.domains(), domains(&["c.vercel.app", "b.vercel.app", "a.vercel.app"]));
        assert_eq!(state.selected_domain(), Some("c.vercel.app"));
    }

    #[test]
    fn only_the_first_load_is_accepted() {
        let mut state = ready(domains(&["a.vercel.app"]));
        assert!(!state.finish_loading(domains(&["b.vercel.app"])));
        assert!(!state.fail_loading("late error"));
        assert_eq!(state.selected_domain(), Some("a.vercel.app"));
    }

    #[test]
    fn failed_load_shows_error_screen() {
        let mut state = AppState::new(Theme::default(), ListOptions::default());
        assert!(state.fail_loading("no such file"));

        let vm = state.compute_viewmodel(20, 80);
        let empty = vm.empty_state.unwrap();
        assert!(empty.is_error);
        assert_eq!(empty.subtitle, "no such file");
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn typing_filters_and_resets_position() {
        let mut state = ready(domains(&["foo.vercel.app", "bar.vercel.app", "foobar.vercel.app"]));
        state.move_selection_down();

        assert!(state.push_char('f'));
        assert!(state.push_char('o'));
        assert_eq!(state.item_count(), 2);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.scroll.offset, 0);

        assert!(state.pop_char());
        assert!(state.pop_char());
        assert!(!state.pop_char());
        assert_eq!(state.item_count(), 3);
    }

    #[test]
    fn clear_query_restores_full_list() {
        let mut state = ready(domains(&["foo.vercel.app", "bar.vercel.app"]));
        state.set_query("bar");
        assert_eq!(state.item_count(), 1);
        assert!(state.clear_query());
        assert!(!state.clear_query());
        assert_eq!(state.item_count(), 2);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = ready(numbered(3));
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn keyboard_navigation_keeps_selection_visible() {
        let mut state = ready(numbered(100));
        for _ in 0..12 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 12);
        assert_eq!(state.scroll.offset, 4);

        state.select_last();
        assert_eq!(state.scroll.offset, 91);

        state.select_first();
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn paging_moves_by_viewport_rows() {
        let mut state = ready(numbered(20));
        state.page_down();
        assert_eq!(state.selected_index, 9);
        state.page_down();
        state.page_down();
        assert_eq!(state.selected_index, 19);
        state.page_up();
        assert_eq!(state.selected_index, 10);
    }

    #[test]
    fn scrolling_drags_selection_into_view() {
        let mut state = ready(numbered(100));
        assert!(state.scroll_by(30));
        assert_eq!(state.scroll.offset, 30);
        assert_eq!(state.selected_index, 30);

        assert!(state.scroll_by(1_000));
        assert_eq!(state.scroll.offset, 91);
        assert_eq!(state.selected_index, 91);
        assert!(!state.scroll_by(5));

        assert!(state.scroll_by(-200));
        assert_eq!(state.scroll.offset, 0);
        assert_eq!(state.selected_index, 8);
    }

    #[test]
    fn click_selects_row_and_returns_its_url() {
        let mut state = ready(numbered(100));
        state.scroll_by(10);

        // Pane line 9 is the first list line.
        assert_eq!(state.click(11), Some("https://app-12.vercel.app".to_string()));
        assert_eq!(state.selected_index, 12);

        assert_eq!(state.click(2), None);
        assert_eq!(state.selected_index, 12);
    }

    #[test]
    fn click_below_last_row_is_ignored() {
        let mut state = ready(numbered(2));
        assert_eq!(state.click(12), None);
    }

    #[test]
    fn resize_keeps_selection_on_screen() {
        let mut state = ready(numbered(100));
        state.select(50);
        assert!(state.resize(40, 80));
        assert!(!state.resize(40, 80));

        let window = VirtualWindow::compute(&state.geometry(), state.scroll.offset).unwrap();
        assert!(window.visible_range().contains(&50));
    }

    #[test]
    fn viewmodel_materializes_only_the_window() {
        let mut state = ready(numbered(500_000));
        state.scroll_by(1_000);

        let vm = state.compute_viewmodel(20, 80);
        // 9 visible rows plus 2 overscan on each side.
        assert_eq!(vm.rows.len(), 13);
        assert_eq!(vm.rows.first().map(|r| r.index), Some(998));
        assert_eq!(vm.rows.last().map(|r| r.index), Some(1_010));
        assert_eq!(vm.count.text, "500,000 domains found");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_marks_selection_and_matches() {
        let mut state = ready(domains(&["foo.vercel.app", "bar.vercel.app", "foobar.vercel.app"]));
        state.set_query("BAR");
        state.move_selection_down();

        let vm = state.compute_viewmodel(20, 80);
        assert_eq!(vm.search_bar.query, "BAR");
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].domain, "bar.vercel.app");
        assert_eq!(vm.rows[0].highlight_range, Some((0, 3)));
        assert!(!vm.rows[0].is_selected);
        assert_eq!(vm.rows[1].url, "https://foobar.vercel.app");
        assert_eq!(vm.rows[1].highlight_range, Some((3, 6)));
        assert!(vm.rows[1].is_selected);
    }

    #[test]
    fn no_matches_leaves_an_empty_list() {
        let mut state = ready(numbered(500_000));
        state.set_query("xyz123nonexistent");

        let vm = state.compute_viewmodel(20, 80);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.count.text, "0 domains found");
        assert_eq!(state.selected_url(), None);
    }
}
