use std::path::PathBuf;

use clap::Parser;
use polysync::config::SyncConfig;
use polysync::tooling::cli::{Cli, CliContext, OutputFormat};
use polysync::SyncError;

use crate::integration::support::{read, write_at};

fn dirs_of(dirs: &[tempfile::TempDir]) -> Vec<PathBuf> {
    dirs.iter().map(|d| d.path().to_path_buf()).collect()
}

#[test]
fn parses_every_short_flag() {
    let cli = Cli::try_parse_from([
        "polysync", "-a", "-n", "-p", "-r", "-v", "-i", "*.o", "-o", "*.c", "left", "right", "third",
    ])
    .unwrap();
    assert!(cli.all && cli.dry_run && cli.preserve && cli.recursive && cli.verbose);
    assert_eq!(cli.ignore, vec!["*.o"]);
    assert_eq!(cli.only, vec!["*.c"]);
    assert_eq!(cli.directories.len(), 3);
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn bundled_short_flags_parse() {
    let cli = Cli::try_parse_from(["polysync", "-rpv", "left", "right"]).unwrap();
    assert!(cli.recursive && cli.preserve && cli.verbose);
    assert!(!cli.all);
}

#[test]
fn fewer_than_two_directories_is_rejected() {
    assert!(Cli::try_parse_from(["polysync", "only-one"]).is_err());
    assert!(Cli::try_parse_from(["polysync"]).is_err());
    assert!(Cli::try_parse_from(["polysync", "-r", "only-one"]).is_err());
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["polysync", "--format", "yaml", "a", "b"]).is_err());
}

#[test]
fn missing_root_is_a_configuration_error() {
    let present = tempfile::TempDir::new().unwrap();
    let context = CliContext::with_config(SyncConfig::default(), OutputFormat::Text);
    let err = context
        .execute(&[present.path().to_path_buf(), present.path().join("absent")])
        .unwrap_err();
    assert!(matches!(err, SyncError::MissingRoot { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn summary_output_for_quiet_run() {
    let dirs: Vec<_> = (0..2).map(|_| tempfile::TempDir::new().unwrap()).collect();
    write_at(dirs[0].path(), "x.txt", "x", 1_000_000);

    let context = CliContext::with_config(SyncConfig::default(), OutputFormat::Text);
    let output = context.execute(&dirs_of(&dirs)).unwrap();

    assert!(output.contains("Created 0 directories"));
    assert!(output.contains("copied 1 file"));
    assert_eq!(read(dirs[1].path(), "x.txt"), "x");
}

#[test]
fn dry_run_lists_the_plan() {
    let dirs: Vec<_> = (0..2).map(|_| tempfile::TempDir::new().unwrap()).collect();
    write_at(dirs[0].path(), "docs/guide.md", "guide", 1_000_000);
    std::fs::create_dir(dirs[1].path().join("unused")).unwrap();

    let mut config = SyncConfig::default();
    config.sync.dry_run = true;
    config.sync.recursive = true;
    let context = CliContext::with_config(config, OutputFormat::Text);
    let output = context.execute(&dirs_of(&dirs)).unwrap();

    assert!(output.contains("\"docs\" which is wanted"));
    assert!(output.contains("\"unused\" which is not wanted"));
    assert!(output.contains("\"docs/guide.md\" in directory"));
    assert!(output.contains("Would create 1 directory"));
    assert!(!dirs[1].path().join("docs").exists());
}

#[test]
fn json_output_carries_the_report() {
    let dirs: Vec<_> = (0..3).map(|_| tempfile::TempDir::new().unwrap()).collect();
    write_at(dirs[1].path(), "data.bin", "0123456789", 1_000_000);

    let context = CliContext::with_config(SyncConfig::default(), OutputFormat::Json);
    let output = context.execute(&dirs_of(&dirs)).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("copied_files").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(parsed.get("bytes_copied").and_then(|v| v.as_u64()), Some(20));
    assert_eq!(parsed.get("dry_run").and_then(|v| v.as_bool()), Some(false));
    let files = parsed.get("files").and_then(|v| v.as_array()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].get("owner").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(parsed.get("roots").and_then(|v| v.as_array()).map(|r| r.len()), Some(3));
}

#[test]
fn invalid_glob_from_config_fails_before_walking() {
    let dirs: Vec<_> = (0..2).map(|_| tempfile::TempDir::new().unwrap()).collect();
    write_at(dirs[0].path(), "x.txt", "x", 1_000_000);

    let mut config = SyncConfig::default();
    config.sync.ignore = vec!["[".to_string()];
    let context = CliContext::with_config(config, OutputFormat::Text);
    let err = context.execute(&dirs_of(&dirs)).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(!dirs[1].path().join("x.txt").exists());
}
