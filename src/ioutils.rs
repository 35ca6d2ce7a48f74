use std::path::Path;

use crate::error::{Error, Result};

/// Creates a directory and all missing parents.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|source| Error::WriteFailure {
        path: dest_path.to_path_buf(),
        source,
    })
}

/// Writes content to a file, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|source| Error::WriteFailure {
        path: dest_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_creates_missing_parents() {
        let root = TempDir::new().unwrap();
        let dest = root.path().join("a/b/c.txt");
        write_file("content", &dest).unwrap();
        assert_eq!(std::fs::read_to_string(dest).unwrap(), "content");
    }

    #[test]
    fn write_failure_carries_the_failing_path() {
        let root = TempDir::new().unwrap();
        // A file where a directory is expected makes the write fail.
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let dest = blocker.join("nested.txt");

        match write_file("content", &dest) {
            Err(Error::WriteFailure { path, .. }) => {
                assert!(path.starts_with(&blocker));
            }
            other => panic!("expected WriteFailure, got {other:?}"),
        }
    }
}
