use polysync::{synchronize, PatternFilter, SyncError, SyncOptions};

use crate::integration::support::{read, recursive, temp_roots, write_at};

#[test]
fn hidden_entries_are_skipped_by_default() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), ".secret", "s", 1_000_000);
    write_at(dirs[0].path(), ".git/config", "c", 1_000_000);
    write_at(dirs[0].path(), "visible.txt", "v", 1_000_000);

    let report = synchronize(&roots, recursive(), PatternFilter::new(false)).unwrap();

    assert!(!dirs[1].path().join(".secret").exists());
    assert!(!dirs[1].path().join(".git").exists());
    assert_eq!(read(dirs[1].path(), "visible.txt"), "v");
    assert_eq!(report.files.len(), 1);
    assert!(report.directories.is_empty());
}

#[test]
fn include_hidden_synchronizes_dot_entries() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), ".profile", "p", 1_000_000);
    write_at(dirs[0].path(), ".config/app.toml", "a", 1_000_000);

    synchronize(&roots, recursive(), PatternFilter::new(true)).unwrap();

    assert_eq!(read(dirs[1].path(), ".profile"), "p");
    assert_eq!(read(dirs[1].path(), ".config/app.toml"), "a");
}

#[test]
fn ignore_patterns_exclude_matching_files() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "keep.txt", "k", 1_000_000);
    write_at(dirs[0].path(), "scratch.tmp", "t", 1_000_000);
    write_at(dirs[0].path(), "core", "c", 1_000_000);

    let filter = PatternFilter::from_globs(["*.tmp", "core"], Vec::<String>::new(), false).unwrap();
    synchronize(&roots, SyncOptions::default(), filter).unwrap();

    assert!(dirs[1].path().join("keep.txt").exists());
    assert!(!dirs[1].path().join("scratch.tmp").exists());
    assert!(!dirs[1].path().join("core").exists());
}

#[test]
fn only_patterns_restrict_to_matching_files() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "main.c", "c", 1_000_000);
    write_at(dirs[0].path(), "util.h", "h", 1_000_000);
    write_at(dirs[0].path(), "README", "r", 1_000_000);

    let filter = PatternFilter::from_globs(Vec::<String>::new(), ["*.c", "*.h"], false).unwrap();
    synchronize(&roots, SyncOptions::default(), filter).unwrap();

    assert!(dirs[1].path().join("main.c").exists());
    assert!(dirs[1].path().join("util.h").exists());
    assert!(!dirs[1].path().join("README").exists());
}

#[test]
fn ignore_beats_only() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "generated.c", "g", 1_000_000);
    write_at(dirs[0].path(), "hand.c", "h", 1_000_000);

    let filter = PatternFilter::from_globs(["generated.*"], ["*.c"], false).unwrap();
    synchronize(&roots, SyncOptions::default(), filter).unwrap();

    assert!(!dirs[1].path().join("generated.c").exists());
    assert!(dirs[1].path().join("hand.c").exists());
}

#[test]
fn only_patterns_do_not_prune_directories() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "lib/deep/code.rs", "fn", 1_000_000);

    let filter = PatternFilter::from_globs(Vec::<String>::new(), ["*.rs"], false).unwrap();
    synchronize(&roots, recursive(), filter).unwrap();

    assert_eq!(read(dirs[1].path(), "lib/deep/code.rs"), "fn");
}

#[test]
fn malformed_glob_is_a_configuration_error() {
    let err = PatternFilter::from_globs(["[unclosed"], Vec::<String>::new(), false).unwrap_err();
    assert!(matches!(err, SyncError::InvalidPattern { .. }));
    assert_eq!(err.exit_code(), 2);
}
