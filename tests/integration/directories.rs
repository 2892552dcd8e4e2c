use std::fs;

use polysync::{synchronize, PatternFilter, SyncError};

use crate::integration::support::{read, recursive, run, temp_roots, write_at};

#[test]
fn empty_directory_is_not_created() {
    let (dirs, roots) = temp_roots(2);
    fs::create_dir(dirs[0].path().join("empty")).unwrap();
    write_at(dirs[0].path(), "kept.txt", "kept", 1_000_000);

    let report = run(&roots, recursive());

    assert!(!dirs[1].path().join("empty").exists());
    assert!(dirs[0].path().join("empty").is_dir());
    let plan = report
        .directories
        .iter()
        .find(|d| d.relpath.as_os_str() == "empty")
        .unwrap();
    assert!(!plan.valid);
    assert!(plan.created_in.is_empty());
}

#[test]
fn intermediate_directories_follow_their_files() {
    let (dirs, roots) = temp_roots(3);
    write_at(dirs[1].path(), "a/b/c/leaf.txt", "leaf", 1_000_000);

    let report = run(&roots, recursive());

    for dir in &dirs {
        assert!(dir.path().join("a/b").is_dir());
        assert_eq!(read(dir.path(), "a/b/c/leaf.txt"), "leaf");
    }
    assert_eq!(report.created_dirs, 6);
    assert_eq!(report.wanted_directories().count(), 3);
}

#[test]
fn directory_holding_only_ignored_files_is_not_created() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "build/out.o", "obj", 1_000_000);
    write_at(dirs[0].path(), "src/main.c", "int main;", 1_000_000);

    let filter = PatternFilter::new(false).ignore("*.o").unwrap();
    synchronize(&roots, recursive(), filter).unwrap();

    assert!(!dirs[1].path().join("build").exists());
    assert_eq!(read(dirs[1].path(), "src/main.c"), "int main;");
}

#[test]
fn directory_present_everywhere_is_left_alone() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "shared/a.txt", "a", 1_000_000);
    write_at(dirs[1].path(), "shared/b.txt", "b", 1_000_000);

    let report = run(&roots, recursive());

    assert_eq!(report.created_dirs, 0);
    let plan = &report.directories[0];
    assert_eq!(plan.present_in, vec![0, 1]);
    assert!(plan.created_in.is_empty());
}

#[test]
fn file_and_directory_under_one_name_is_fatal() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "thing", "i am a file", 1_000_000);
    write_at(dirs[1].path(), "thing/inside.txt", "i am nested", 1_000_000);
    write_at(dirs[1].path(), "bystander.txt", "b", 1_000_000);

    let err = synchronize(&roots, recursive(), PatternFilter::new(false)).unwrap_err();

    assert!(matches!(err, SyncError::KindConflict { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("thing"));
    assert!(!dirs[0].path().join("bystander.txt").exists());
}
