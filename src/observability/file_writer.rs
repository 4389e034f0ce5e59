//! Size-rotated line writer for the trace file.
//!
//! When the file grows past the size limit it is shifted to `<name>.1`, older
//! backups move up by one (`.1` → `.2` …) and the oldest beyond the limit is
//! dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Appends lines to a file, rotating it by size. Safe to share across threads.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    /// Opened on first write.
    file: Mutex<Option<File>>,
}

impl FileWriter {
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_policy(file_path, RotationPolicy::default())
    }

    #[must_use]
    pub const fn with_policy(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Writes `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?,
        };
        let file = guard.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return remove_if_exists(&self.file_path);
        }

        remove_if_exists(&self.backup_path(self.policy.max_backups))?;
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(dir: &Path, max_backups: usize) -> FileWriter {
        FileWriter::with_policy(
            dir.join("trace.json"),
            RotationPolicy {
                max_bytes: 8,
                max_backups,
            },
        )
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("trace.json"));
        writer.write_line("{}").unwrap();
        writer.write_line("[]").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("trace.json")).unwrap(), "{}\n[]\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = small(dir.path(), 2);

        for i in 0..5 {
            writer.write_line(&format!("line-number-{i}")).unwrap();
        }

        let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("trace.json"), "line-number-4\n");
        assert_eq!(read("trace.json.1"), "line-number-3\n");
        assert_eq!(read("trace.json.2"), "line-number-2\n");
        assert!(!dir.path().join("trace.json.3").exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let writer = small(dir.path(), 0);
        writer.write_line("first-long-line").unwrap();
        writer.write_line("second").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("trace.json")).unwrap(), "second\n");
        assert!(!dir.path().join("trace.json.1").exists());
    }
}
