//! Human-readable rendering: permission strings and run reports.

use crate::report::SyncReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Render the low nine mode bits as `rwxrwxrwx`.
pub fn permission_string(mode: u32) -> String {
    const LETTERS: [char; 3] = ['r', 'w', 'x'];
    (0..9)
        .map(|i| {
            if mode & (0o400 >> i) != 0 {
                LETTERS[i % 3]
            } else {
                '-'
            }
        })
        .collect()
}

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One-line outcome of a run.
pub fn format_summary(report: &SyncReport) -> String {
    let verb = if report.dry_run { "Would create" } else { "Created" };
    let copy_verb = if report.dry_run { "would copy" } else { "copied" };
    format!(
        "{} {} director{}, {} {} file{} ({} bytes) across {} directories",
        verb,
        report.created_dirs,
        if report.created_dirs == 1 { "y" } else { "ies" },
        copy_verb,
        report.copied_files,
        if report.copied_files == 1 { "" } else { "s" },
        report.bytes_copied,
        report.roots.len()
    )
}

/// Plan listing: every relpath with its decision, in discovery order.
pub fn format_report_text(report: &SyncReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Roots")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Path", "Files", "Dirs", "Skipped"]);
    for root in &report.roots {
        table.add_row(vec![
            root.index.to_string(),
            root.path.display().to_string(),
            root.files.to_string(),
            root.directories.to_string(),
            root.skipped.to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));

    if !report.directories.is_empty() || !report.files.is_empty() {
        out.push_str(&format!("{}\n\n", format_section_heading("Plan")));
    }
    for dir in &report.directories {
        out.push_str(&format!(
            "    \"{}\" which is {}\n",
            dir.relpath.display(),
            if dir.valid { "wanted" } else { "not wanted" }
        ));
    }
    for file in &report.files {
        let owner = report
            .roots
            .get(file.owner)
            .map(|r| r.path.display().to_string())
            .unwrap_or_else(|| file.owner.to_string());
        out.push_str(&format!(
            "    \"{}\" in directory {}\n",
            file.relpath.display(),
            owner
        ));
    }
    if !report.directories.is_empty() || !report.files.is_empty() {
        out.push('\n');
    }

    out.push_str(&format_summary(report));
    out.push('\n');
    out
}

/// Report as pretty JSON.
pub fn format_report_json(report: &SyncReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
