use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use polysync::{synchronize, PatternFilter, RootSet, SyncOptions, SyncReport};
use tempfile::TempDir;

pub fn temp_roots(count: usize) -> (Vec<TempDir>, RootSet) {
    let dirs: Vec<TempDir> = (0..count).map(|_| TempDir::new().unwrap()).collect();
    let roots = RootSet::new(dirs.iter().map(|d| d.path())).unwrap();
    (dirs, roots)
}

/// Write `contents` under `root`, creating parents, and pin the mtime.
pub fn write_at(root: &Path, relpath: &str, contents: &str, mtime: i64) -> PathBuf {
    let path = root.join(relpath);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    filetime::set_file_mtime(&path, FileTime::from_unix_time(mtime, 0)).unwrap();
    path
}

pub fn read(root: &Path, relpath: &str) -> String {
    fs::read_to_string(root.join(relpath)).unwrap()
}

pub fn recursive() -> SyncOptions {
    SyncOptions {
        recursive: true,
        ..SyncOptions::default()
    }
}

pub fn run(roots: &RootSet, options: SyncOptions) -> SyncReport {
    synchronize(roots, options, PatternFilter::new(false)).unwrap()
}
