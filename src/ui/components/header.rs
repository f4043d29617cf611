//! Header component renderer.
//!
//! Two lines: the bold title with the author and source links pushed to the
//! right edge, then the dimmed description followed by the about link.

use crate::ui::helpers::{hyperlink, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, LinkInfo};

/// Left margin shared by the title and description.
const MARGIN: usize = 2;

/// Renders the header block starting at `row`.
///
/// Returns the next available row (`row + 2`). Links are dropped from the
/// title line when the pane is too narrow to hold them next to the title.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize, hyperlinks: bool) -> usize {
    let links_text: String = header
        .links
        .iter()
        .map(|link| link.label.as_str())
        .collect::<Vec<_>>()
        .join("  ");
    let title_len = header.title.chars().count();
    let links_len = links_text.chars().count();
    let show_links = MARGIN + title_len + 2 + links_len + MARGIN <= cols;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(MARGIN));
    print!("{}", header.title);
    print!("{}", Theme::reset());

    if show_links {
        let gap = cols.saturating_sub(MARGIN + title_len + links_len + MARGIN);
        print!("{}", " ".repeat(gap));
        print!("{}", Theme::fg(&theme.colors.link_fg));
        for (i, link) in header.links.iter().enumerate() {
            if i > 0 {
                print!("  ");
            }
            print!("{}", render_link(link, hyperlinks));
        }
        print!("{}", Theme::reset());
    }

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", header.description);
    print!("  ");
    print!("{}", Theme::fg(&theme.colors.link_fg));
    print!("{}", render_link(&header.about, hyperlinks));
    print!("{}", Theme::reset());

    row + 2
}

fn render_link(link: &LinkInfo, hyperlinks: bool) -> String {
    if hyperlinks {
        hyperlink(&link.url, &link.label)
    } else {
        link.label.clone()
    }
}
