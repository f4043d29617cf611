//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so every
//! user-supplied path has to be mapped before the plugin or its worker can
//! open it.

use std::path::PathBuf;

/// Sandbox root of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Directory for the plugin's own files (trace output).
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/almostevery")
}

/// Replaces a leading `~` with the sandbox host root.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Maps a configured path to one the plugin can open.
///
/// `~` paths are expanded and relative paths are taken relative to the host
/// root. Absolute paths are used as given.
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    if expanded.starts_with('/') {
        PathBuf::from(expanded)
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_root() {
        assert_eq!(expand_tilde("~/lists/domains.txt"), "/host/lists/domains.txt");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/etc/domains"), "/etc/domains");
        assert_eq!(expand_tilde("a~b"), "a~b");
    }

    #[test]
    fn relative_paths_resolve_under_host() {
        assert_eq!(
            resolve_host_path("vercel-domain-list.txt"),
            PathBuf::from("/host/vercel-domain-list.txt")
        );
        assert_eq!(resolve_host_path(" ~/d.txt "), PathBuf::from("/host/d.txt"));
        assert_eq!(resolve_host_path("/host/d.txt"), PathBuf::from("/host/d.txt"));
    }
}
