//! Shared rendering utilities.
//!
//! Cursor positioning, match highlighting, OSC 8 hyperlinks and the small
//! formatting helpers used by several components. Widths are counted in
//! characters.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Ends the hyperlink started by [`hyperlink_start`].
pub const HYPERLINK_END: &str = "\u{1b}]8;;\u{1b}\\";

/// Starts an OSC 8 hyperlink to `url`; everything printed until
/// [`HYPERLINK_END`] is clickable.
#[must_use]
pub fn hyperlink_start(url: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\")
}

/// Wraps `text` in an OSC 8 hyperlink to `url`.
///
/// Terminals without OSC 8 support print `text` unchanged.
#[must_use]
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("{}{text}{HYPERLINK_END}", hyperlink_start(url))
}

/// Formats a count with thousands separators, e.g. `1234567` as `"1,234,567"`.
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Cuts `text` to at most `max` characters, ending in `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Prints `text` centered on a full-width line at `row`, in `style`.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);

    position_cursor(row, 1);
    print!("{style}{}{text}{}{}", " ".repeat(left), " ".repeat(right), Theme::reset());
}

/// Splits `text` around a character range into `(before, matched, after)`.
///
/// The range is clamped to the text, so a stale or truncated range never panics.
#[must_use]
pub fn split_highlight(text: &str, range: (usize, usize)) -> (String, String, String) {
    let chars: Vec<char> = text.chars().collect();
    let start = range.0.min(chars.len());
    let end = range.1.clamp(start, chars.len());
    (
        chars[..start].iter().collect(),
        chars[start..end].iter().collect(),
        chars[end..].iter().collect(),
    )
}

/// Prints `text` with the matched range highlighted.
///
/// Selected rows are printed without the highlight so the selection colors stay
/// intact. After the highlighted part the normal row color is restored.
pub fn render_highlighted_text(text: &str, range: Option<(usize, usize)>, theme: &Theme, is_selected: bool) {
    let Some(range) = range.filter(|_| !is_selected) else {
        print!("{text}");
        return;
    };

    let (before, matched, after) = split_highlight(text, range);
    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{after}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(512_345), "512,345");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn truncate_marks_shortened_text() {
        assert_eq!(truncate("foo.vercel.app", 20), "foo.vercel.app");
        assert_eq!(truncate("foo.vercel.app", 8), "foo.v...");
        assert_eq!(truncate("foo.vercel.app", 2), "fo");
    }

    #[test]
    fn highlight_split_is_clamped() {
        assert_eq!(
            split_highlight("foobar", (3, 6)),
            ("foo".to_string(), "bar".to_string(), String::new())
        );
        assert_eq!(
            split_highlight("foo", (2, 10)),
            ("fo".to_string(), "o".to_string(), String::new())
        );
        assert_eq!(
            split_highlight("foo", (7, 9)),
            ("foo".to_string(), String::new(), String::new())
        );
    }

    #[test]
    fn hyperlink_uses_osc_8() {
        assert_eq!(
            hyperlink("https://a.vercel.app", "a.vercel.app"),
            "\u{1b}]8;;https://a.vercel.app\u{1b}\\a.vercel.app\u{1b}]8;;\u{1b}\\"
        );
    }
}
