//! Filesystem abstraction used by the transports.
//!
//! The trait mirrors the handful of operations preview storage needs, so
//! tests can substitute a recording double for real disk access. Every
//! fallible method surfaces the underlying [`std::io::Error`] unmodified.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Minimal filesystem surface for preview storage.
pub trait Filesystem {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the write fails.
    fn put(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Appends `contents` to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the write fails.
    fn append(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Creates the directory at `path`, including missing parents.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when creation fails.
    fn make_directory(&self, path: &Path) -> io::Result<()>;

    /// Files directly under `path` (no recursion, directories excluded).
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the directory cannot be read.
    fn files(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Last-modified time of `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when metadata cannot be read.
    fn last_modified(&self, path: &Path) -> io::Result<SystemTime>;

    /// Deletes every file in `paths`.
    ///
    /// # Errors
    ///
    /// Returns the first underlying error; remaining paths are not deleted.
    fn delete(&self, paths: &[PathBuf]) -> io::Result<()>;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Creates a new local filesystem handle.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn put(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        use io::Write;

        let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(contents.as_bytes())
    }

    fn make_directory(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn files(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    fn last_modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn delete(&self, paths: &[PathBuf]) -> io::Result<()> {
        for path in paths {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_append_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mail.log");
        let fs = LocalFilesystem::new();

        assert!(!fs.exists(&path));
        fs.put(&path, "first").unwrap();
        fs.append(&path, "-second").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first-second");
    }

    #[test]
    fn test_append_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mail.log");

        LocalFilesystem::new().append(&path, "only").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "only");
    }

    #[test]
    fn test_files_lists_only_direct_files() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.put(&dir.path().join("a.html"), "a").unwrap();
        fs.put(&dir.path().join("b.eml"), "b").unwrap();
        fs.make_directory(&dir.path().join("nested")).unwrap();
        fs.put(&dir.path().join("nested").join("c.html"), "c")
            .unwrap();

        let files = fs.files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.html", "b.eml"]);
    }

    #[test]
    fn test_delete_removes_every_path() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs.put(&a, "a").unwrap();
        fs.put(&b, "b").unwrap();

        fs.delete(&[a.clone(), b.clone()]).unwrap();

        assert!(!fs.exists(&a));
        assert!(!fs.exists(&b));
    }

    #[test]
    fn test_last_modified_reports_a_recent_time() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("a");
        fs.put(&path, "a").unwrap();

        let modified = fs.last_modified(&path).unwrap();
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();
        assert!(age.as_secs() < 60);
    }

    #[test]
    fn test_errors_surface_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = LocalFilesystem::new().files(&missing).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
