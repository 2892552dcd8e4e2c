use std::fs;

use filetime::FileTime;
use polysync::SyncOptions;

use crate::integration::support::{read, recursive, run, temp_roots, write_at};

#[test]
fn preserve_copies_modification_time() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "stamped.txt", "stamp", 1_234_567);

    let options = SyncOptions {
        preserve_metadata: true,
        ..SyncOptions::default()
    };
    run(&roots, options);

    let copy = fs::metadata(dirs[1].path().join("stamped.txt")).unwrap();
    assert_eq!(
        FileTime::from_last_modification_time(&copy),
        FileTime::from_unix_time(1_234_567, 0)
    );
}

#[test]
fn copies_get_fresh_modification_time_without_preserve() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "plain.txt", "plain", 1_000_000);

    run(&roots, SyncOptions::default());

    let copy = fs::metadata(dirs[1].path().join("plain.txt")).unwrap();
    assert!(FileTime::from_last_modification_time(&copy).unix_seconds() > 1_000_000);
}

#[cfg(unix)]
#[test]
fn preserve_copies_permission_bits() {
    use std::os::unix::fs::PermissionsExt;

    let (dirs, roots) = temp_roots(3);
    let master = write_at(dirs[2].path(), "run.sh", "#!/bin/sh\n", 1_000_000);
    fs::set_permissions(&master, fs::Permissions::from_mode(0o750)).unwrap();
    write_at(dirs[0].path(), "run.sh", "stale", 900_000);

    let options = SyncOptions {
        preserve_metadata: true,
        ..SyncOptions::default()
    };
    let report = run(&roots, options);

    for dir in &dirs {
        let mode = fs::metadata(dir.path().join("run.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
        assert_eq!(read(dir.path(), "run.sh"), "#!/bin/sh\n");
    }
    assert_eq!(report.files[0].permissions & 0o777, 0o750);
}

#[test]
fn dry_run_leaves_every_root_untouched() {
    let (dirs, roots) = temp_roots(2);
    write_at(dirs[0].path(), "a.txt", "newer", 2_000_000);
    write_at(dirs[1].path(), "a.txt", "older", 1_000_000);
    write_at(dirs[0].path(), "sub/b.txt", "b", 1_000_000);

    let options = SyncOptions {
        dry_run: true,
        preserve_metadata: true,
        ..recursive()
    };
    let report = run(&roots, options);

    assert_eq!(read(dirs[1].path(), "a.txt"), "older");
    assert!(!dirs[1].path().join("sub").exists());
    let untouched = fs::metadata(dirs[1].path().join("a.txt")).unwrap();
    assert_eq!(
        FileTime::from_last_modification_time(&untouched),
        FileTime::from_unix_time(1_000_000, 0)
    );

    assert!(report.dry_run);
    assert_eq!(report.created_dirs, 1);
    assert_eq!(report.copied_files, 2);
    assert!(!report.is_noop());
}
