// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::{Path, PathBuf},
          process,
          sync::atomic::{AtomicUsize, Ordering}};

use miette::IntoDiagnostic;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A directory under [`std::env::temp_dir()`] that is deleted, with its contents, when
/// this is dropped.
#[derive(Debug)]
pub struct TempDir {
    pub path: PathBuf,
}

impl TempDir {
    #[must_use]
    pub fn join(&self, file_name: impl AsRef<Path>) -> PathBuf { self.path.join(file_name) }
}

/// Create an empty temporary directory. The name is unique per process and per call, so
/// tests that run in parallel never share one.
///
/// # Errors
///
/// If the directory can't be created.
pub fn create_temp_dir() -> miette::Result<TempDir> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("ansi_scope_{}_{id}", process::id()));
    std::fs::create_dir(&path).into_diagnostic()?;
    Ok(TempDir { path })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // Nothing useful to do if cleanup fails.
        let _unused = std::fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir() {
        let temp_dir = create_temp_dir().unwrap();
        assert!(temp_dir.path.exists());
        assert_eq!(temp_dir.join("a.txt"), temp_dir.path.join("a.txt"));
    }

    #[test]
    fn test_temp_dir_drop() {
        let temp_dir = create_temp_dir().unwrap();
        let copy_of_path = temp_dir.path.clone();
        std::fs::write(temp_dir.join("a.txt"), b"x").unwrap();

        drop(temp_dir);

        assert!(!copy_of_path.exists());
    }

    #[test]
    fn test_temp_dirs_are_unique() {
        let first = create_temp_dir().unwrap();
        let second = create_temp_dir().unwrap();
        assert_ne!(first.path, second.path);
    }
}
