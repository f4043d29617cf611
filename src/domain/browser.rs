//! Session state for the domain list: the shuffled domains, the query, and the
//! filtered view derived from them.
//!
//! The filtered view is stored as indices into the full list, so narrowing the
//! list never copies domain strings. Every query change recomputes the view
//! before [`DomainBrowser::set_query`] returns; a reader can never observe a
//! view that belongs to an older query.

use super::filter;
use super::shuffle::Shuffler;

/// The full domain list and its current filtered view.
#[derive(Clone)]
pub struct DomainBrowser {
    /// Shuffled domains, immutable after initialization.
    domains: Vec<String>,

    /// Lowercase copy of `domains`, computed once so keystrokes don't allocate.
    lowered: Vec<String>,

    query: String,
    lowered_query: String,

    /// Indices into `domains` matching `query`, in list order.
    view: Vec<usize>,
}

impl DomainBrowser {
    /// Shuffles `raw` once and builds a browser whose view holds every domain.
    ///
    /// Duplicates and empty strings are kept as they are.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use almostevery::domain::{DomainBrowser, RandomShuffler};
    ///
    /// let raw = vec!["foo.vercel.app".to_string(), "bar.vercel.app".to_string()];
    /// let browser = DomainBrowser::initialize(raw, &mut RandomShuffler::from_entropy());
    /// assert_eq!(browser.count(), 2);
    /// ```
    pub fn initialize<S: Shuffler + ?Sized>(mut raw: Vec<String>, shuffler: &mut S) -> Self {
        let _span = tracing::debug_span!("browser_initialize", domain_count = raw.len()).entered();

        shuffler.shuffle(&mut raw);
        let lowered = raw.iter().map(|d| d.to_lowercase()).collect();
        let view = (0..raw.len()).collect();

        tracing::debug!("domain list shuffled and indexed");

        Self {
            domains: raw,
            lowered,
            query: String::new(),
            lowered_query: String::new(),
            view,
        }
    }

    /// Replaces the query and recomputes the filtered view.
    ///
    /// Returns `true` if the query text changed. Setting the same query again is
    /// a no-op, so the view stays identical.
    ///
    /// When the new query extends the previous one (the new lowercase query
    /// contains the old), every match of the new query is already in the view,
    /// so only the view is rescanned. Any other change rescans the full list.
    pub fn set_query(&mut self, query: &str) -> bool {
        if query == self.query {
            return false;
        }

        let lowered_query = query.to_lowercase();
        let refine = lowered_query.contains(self.lowered_query.as_str());

        let _span = tracing::debug_span!(
            "set_query",
            total = self.domains.len(),
            previous_count = self.view.len(),
            query_len = query.len(),
            refine
        )
        .entered();

        if refine {
            let lowered = &self.lowered;
            self.view
                .retain(|&i| filter::matches(&lowered[i], &lowered_query));
        } else {
            self.view = self
                .lowered
                .iter()
                .enumerate()
                .filter(|(_, domain)| filter::matches(domain, &lowered_query))
                .map(|(i, _)| i)
                .collect();
        }

        self.query = query.to_string();
        self.lowered_query = lowered_query;

        tracing::trace!(filtered_count = self.view.len(), "filtered view recomputed");
        true
    }

    /// The active query, exactly as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of domains in the filtered view.
    #[must_use]
    pub fn count(&self) -> usize {
        self.view.len()
    }

    /// Number of domains in the full list.
    #[must_use]
    pub fn total(&self) -> usize {
        self.domains.len()
    }

    /// Domain at `index` within the filtered view, or `None` past its end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.view
            .get(index)
            .map(|&i| self.domains[i].as_str())
    }

    /// The filtered view in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.view.iter().map(|&i| self.domains[i].as_str())
    }

    /// The full shuffled list.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

impl std::fmt::Debug for DomainBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainBrowser")
            .field("total", &self.domains.len())
            .field("query", &self.query)
            .field("count", &self.view.len())
            .finish_non_exhaustive()
    }
}
