use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Creates a fresh directory under the system temp dir, unique per test
/// within and across processes.
pub fn unique_dir(tag: &str) -> PathBuf {
    let n = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
    let dir = env::temp_dir().join(format!("attic-test-{}-{}-{}", tag, process::id(), n));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a file under `dir`, creating parent directories for nested names
/// like "sub/file.txt".
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
