//! Append-only line writer with numbered size-based rotation.
//!
//! The active file is `<path>`. When it grows past the size limit it becomes
//! `<path>.1`, the previous `<path>.1` becomes `<path>.2`, and so on; the
//! oldest backup beyond the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many old files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB per file, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating writer. The file is opened lazily on first write.
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotating, opening or writing fails,
    /// or an error if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = guard.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Shifts `<path>.N` to `<path>.N+1` from the oldest down, then moves the
    /// active file to `<path>.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.policy.max_backups))?;
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(path.clone(), RotationPolicy::default());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();
        assert_eq!(read(&path), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotation_shifts_backups_and_drops_the_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let policy = RotationPolicy {
            max_bytes: 4,
            max_backups: 2,
        };
        let writer = RotatingFile::new(path.clone(), policy);

        for line in ["first", "second", "third", "fourth"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "fourth\n");
        assert_eq!(read(&writer.backup_path(1)), "third\n");
        assert_eq!(read(&writer.backup_path(2)), "second\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(
            path.clone(),
            RotationPolicy {
                max_bytes: 4,
                max_backups: 0,
            },
        );

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();
        assert_eq!(read(&path), "second\n");
        assert!(!writer.backup_path(1).exists());
    }
}
