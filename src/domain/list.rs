//! Parsing of the newline-delimited domain list resource.
//!
//! The resource holds one domain per line with no header. Lines are taken as
//! they are: empty interior lines survive as empty-string domains and duplicates
//! are preserved.

use super::error::{AlmostEveryError, Result};
use std::path::Path;

/// Splits a domain list resource into its ordered domains.
///
/// The resource is trimmed as a whole, then split on `\n`. Trailing whitespace
/// is trimmed from every line, which also drops the `\r` of CRLF files. An
/// empty or whitespace-only resource yields no domains.
///
/// # Example
///
/// ```ignore
/// use almostevery::domain::list::parse_domain_list;
///
/// let domains = parse_domain_list("foo.vercel.app\r\nbar.vercel.app\n");
/// assert_eq!(domains, vec!["foo.vercel.app", "bar.vercel.app"]);
/// ```
#[must_use]
pub fn parse_domain_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed
        .split('\n')
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Reads and parses the domain list at `path`.
///
/// # Errors
///
/// Returns [`AlmostEveryError::DataResource`] if the file is missing, unreadable
/// or not valid UTF-8.
pub fn load_domain_list(path: &Path) -> Result<Vec<String>> {
    let _span = tracing::debug_span!("load_domain_list", path = %path.display()).entered();

    let contents = std::fs::read_to_string(path).map_err(|source| AlmostEveryError::DataResource {
        path: path.to_path_buf(),
        source,
    })?;

    let domains = parse_domain_list(&contents);
    tracing::debug!(
        bytes = contents.len(),
        domain_count = domains.len(),
        "domain list parsed"
    );
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_one_domain_per_line() {
        let domains = parse_domain_list("a.vercel.app\nb.vercel.app\nc.vercel.app");
        assert_eq!(domains, vec!["a.vercel.app", "b.vercel.app", "c.vercel.app"]);
    }

    #[test]
    fn trims_resource_and_trailing_whitespace() {
        let domains = parse_domain_list("\n  a.vercel.app  \r\nb.vercel.app\t\n\n");
        assert_eq!(domains, vec!["a.vercel.app", "b.vercel.app"]);
    }

    #[test]
    fn keeps_empty_interior_lines() {
        let domains = parse_domain_list("a.vercel.app\n\nb.vercel.app");
        assert_eq!(domains, vec!["a.vercel.app", "", "b.vercel.app"]);
    }

    #[test]
    fn keeps_duplicates() {
        let domains = parse_domain_list("a.vercel.app\na.vercel.app");
        assert_eq!(domains.len(), 2);
    }

    #[test]
    fn empty_resource_has_no_domains() {
        assert!(parse_domain_list("").is_empty());
        assert!(parse_domain_list(" \n\t\n").is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "foo.vercel.app").unwrap();
        writeln!(file, "bar.vercel.app").unwrap();

        let domains = load_domain_list(file.path()).unwrap();
        assert_eq!(domains, vec!["foo.vercel.app", "bar.vercel.app"]);
    }

    #[test]
    fn missing_file_is_a_data_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_domain_list(&path).unwrap_err();
        match err {
            AlmostEveryError::DataResource { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
