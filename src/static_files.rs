//! Startup file index for the static routes.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, warn};

/// One servable file discovered during the startup scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Base file name, without directory components.
    pub name: String,
    /// Full path the file was found at.
    pub path: PathBuf,
}

/// Immutable mapping from request paths to filesystem paths.
///
/// Built once before the listener starts and never mutated afterwards, so
/// it is shared across connection tasks without locking. Lookups are exact
/// matches on `"/" + base name`; when files in different subdirectories
/// share a base name, the one found first during the scan wins.
#[derive(Debug, Default)]
pub struct FileIndex {
    entries: Vec<FileEntry>,
    by_request_path: HashMap<String, PathBuf>,
}

impl FileIndex {
    /// Recursively scans `root` and indexes every regular file found.
    /// Directory symlinks are not followed.
    ///
    /// A root that is missing or not a directory is reported and yields an
    /// empty index; the server still starts and answers 404 for every file.
    pub fn build(root: &Path) -> Self {
        let mut index = FileIndex::default();

        if !root.is_dir() {
            error!(
                "Directory {} does not exist or is not a directory",
                root.display()
            );
            return index;
        }

        index.scan(root);
        index
    }

    fn scan(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries {
            let Ok(entry) = entry else { continue };
            // The entry's own file type decides recursion, so a symlinked
            // directory (possibly a cycle) is never descended into.
            // Symlinks to regular files still index: is_file() follows.
            let Ok(file_type) = entry.file_type() else { continue };
            let path = entry.path();
            if file_type.is_dir() {
                self.scan(&path);
            } else if path.is_file() {
                self.record(path);
            }
        }
    }

    fn record(&mut self, path: PathBuf) {
        // Non-UTF-8 names cannot be requested over this protocol; skip them.
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return;
        };
        let name = name.to_string();

        self.by_request_path
            .entry(format!("/{}", name))
            .or_insert_with(|| path.clone());
        self.entries.push(FileEntry { name, path });
    }

    /// Resolves a request path to an indexed file, if any.
    ///
    /// The match is exact: no partial, case-insensitive, or directory-aware
    /// matching.
    pub fn resolve(&self, request_path: &str) -> Option<&Path> {
        self.by_request_path
            .get(request_path)
            .map(PathBuf::as_path)
    }

    /// All files recorded by the scan, in discovery order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of files indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
