//! Case-insensitive substring matching.
//!
//! Matching lowercases both sides and tests plain substring containment. The
//! empty query matches every domain, including the empty one.

/// Returns `true` if an already-lowercased domain contains an already-lowercased query.
#[inline]
#[must_use]
pub fn matches(lowered_domain: &str, lowered_query: &str) -> bool {
    lowered_domain.contains(lowered_query)
}

/// Filters `domains` by case-insensitive substring match, preserving order.
///
/// This is the straightforward form of the filter. [`DomainBrowser`] computes
/// the same result over cached lowercase copies.
///
/// [`DomainBrowser`]: super::browser::DomainBrowser
#[must_use]
pub fn filter_domains<'a, S: AsRef<str>>(domains: &'a [S], query: &str) -> Vec<&'a str> {
    let lowered_query = query.to_lowercase();
    domains
        .iter()
        .map(|domain| AsRef::<str>::as_ref(domain))
        .filter(|domain| matches(&domain.to_lowercase(), &lowered_query))
        .collect()
}

/// Character range `(start, end)` of the first case-insensitive occurrence of `query`.
///
/// Returns `None` for an empty query, for no match, or when lowercasing changes
/// the character count of `domain` (the positions would no longer line up with
/// the original text).
#[must_use]
pub fn match_range(domain: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let lowered_domain = domain.to_lowercase();
    if lowered_domain.chars().count() != domain.chars().count() {
        return None;
    }

    let lowered_query = query.to_lowercase();
    let byte_start = lowered_domain.find(&lowered_query)?;
    let start = lowered_domain[..byte_start].chars().count();
    let end = start + lowered_query.chars().count();
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> Vec<Vec<&'static str>> {
        vec![
            vec![],
            vec![""],
            vec!["foo.vercel.app", "bar.vercel.app", "foobar.vercel.app"],
            vec!["Foo.Vercel.App", "fOO.vercel.app", "baz.vercel.app", "foo.vercel.app"],
            vec!["my-app.vercel.app", "", "dup.vercel.app", "dup.vercel.app", "MY-APP-2.vercel.app"],
        ]
    }

    fn queries() -> Vec<&'static str> {
        vec!["", "foo", "FOO", "vercel", ".app", "dup", "my-app", "zzzzzznomatch", "o.v"]
    }

    fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == s))
    }

    #[test]
    fn result_is_an_order_preserving_subsequence() {
        for list in lists() {
            for query in queries() {
                let filtered = filter_domains(&list, query);
                assert!(is_subsequence(&filtered, &list), "{query:?} over {list:?}");
            }
        }
    }

    #[test]
    fn kept_elements_match_and_dropped_elements_do_not() {
        for list in lists() {
            for query in queries() {
                let filtered = filter_domains(&list, query);
                let q = query.to_lowercase();
                for domain in &filtered {
                    assert!(domain.to_lowercase().contains(&q));
                }
                let kept = list.iter().filter(|d| d.to_lowercase().contains(&q)).count();
                assert_eq!(kept, filtered.len(), "{query:?} over {list:?}");
            }
        }
    }

    #[test]
    fn empty_query_is_identity() {
        for list in lists() {
            assert_eq!(filter_domains(&list, ""), list);
        }
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        for list in lists() {
            for query in queries() {
                let once = filter_domains(&list, query);
                let twice = filter_domains(&once, query);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn foo_scenario_keeps_original_order() {
        let list = ["foo.vercel.app", "bar.vercel.app", "foobar.vercel.app"];
        assert_eq!(
            filter_domains(&list, "foo"),
            vec!["foo.vercel.app", "foobar.vercel.app"]
        );
    }

    #[test]
    fn match_range_finds_first_occurrence() {
        assert_eq!(match_range("foobar.vercel.app", "BAR"), Some((3, 6)));
        assert_eq!(match_range("foo.foo", "foo"), Some((0, 3)));
        assert_eq!(match_range("foo", ""), None);
        assert_eq!(match_range("foo", "x"), None);
    }

    #[test]
    fn match_range_counts_characters_not_bytes() {
        assert_eq!(match_range("café.vercel.app", "vercel"), Some((5, 11)));
    }
}
