//! Transforms session state into presentation values for the hosting
//! front-end: renderable table rows and bulk-report summaries.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

use super::state::{AppState, SearchPhase};
use crate::core::{BulkReport, ResultItem};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One renderable result-table row.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub path: PathBuf,
    /// Creation timestamp, local time, `YYYY-MM-DD HH:MM:SS`.
    pub created: String,
    /// Size in megabytes, rounded to two decimals. Folders show 0.
    pub size_mb: f64,
    pub is_folder: bool,
}

/// Everything a front-end needs to render the current result table.
#[derive(Serialize, Clone, Debug)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub total: usize,
    /// Entries the run skipped because their metadata was unreadable.
    pub skipped_entries: usize,
    pub is_searching: bool,
}

/// Builds the table view for the current state, rows already in sort order.
pub fn table_view(state: &AppState) -> TableView {
    TableView {
        rows: state.results.iter().map(table_row).collect(),
        total: state.results.len(),
        skipped_entries: state.skipped_entries,
        is_searching: state.phase == SearchPhase::Running,
    }
}

fn table_row(item: &ResultItem) -> TableRow {
    TableRow {
        name: item.name.clone(),
        path: item.path.clone(),
        created: format_timestamp(item.created),
        size_mb: round2(item.size_bytes as f64 / BYTES_PER_MB),
        is_folder: item.is_folder(),
    }
}

fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One failed item of a batch, ready for display.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FailureLine {
    pub path: PathBuf,
    pub error: String,
}

/// Aggregate view of one finished batch for the front-end to present.
#[derive(Serialize, Clone, Debug)]
pub struct ReportSummary {
    pub operation: String,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<FailureLine>,
    /// One-line status message, e.g. `copy finished: 3 done, 1 failed`.
    pub message: String,
}

/// Condenses a bulk report into counts plus the failing items.
pub fn summarize_report(operation: &str, report: &BulkReport) -> ReportSummary {
    let succeeded = report.succeeded();
    let failed = report.failed();
    let failures = report
        .outcomes
        .iter()
        .filter_map(|outcome| {
            outcome.error.as_ref().map(|error| FailureLine {
                path: outcome.path.clone(),
                error: error.clone(),
            })
        })
        .collect();

    let message = if failed == 0 {
        format!("{operation} finished: {succeeded} done")
    } else {
        format!("{operation} finished: {succeeded} done, {failed} failed")
    };

    ReportSummary {
        operation: operation.to_string(),
        succeeded,
        failed,
        failures,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryKind, ItemOutcome};

    fn item(name: &str, size: u64, kind: EntryKind) -> ResultItem {
        ResultItem {
            name: name.to_string(),
            path: format!("/r/{name}").into(),
            created: SystemTime::UNIX_EPOCH,
            size_bytes: size,
            kind,
        }
    }

    #[test]
    fn rows_render_size_in_megabytes() {
        let row = table_row(&item("big.bin", 5 * 1024 * 1024 + 262_144, EntryKind::File));
        assert_eq!(row.size_mb, 5.25);
        assert!(!row.is_folder);

        let folder = table_row(&item("docs", 0, EntryKind::Folder));
        assert_eq!(folder.size_mb, 0.0);
        assert!(folder.is_folder);
    }

    #[test]
    fn timestamps_render_as_sortable_local_datetime() {
        let row = table_row(&item("a.txt", 1, EntryKind::File));
        // 19 characters, date and time separated by a space.
        assert_eq!(row.created.len(), 19);
        assert_eq!(&row.created[4..5], "-");
        assert_eq!(&row.created[10..11], " ");
    }

    #[test]
    fn summary_counts_and_lists_failures() {
        let report = BulkReport {
            outcomes: vec![
                ItemOutcome {
                    path: "/r/ok.txt".into(),
                    error: None,
                },
                ItemOutcome {
                    path: "/r/gone.txt".into(),
                    error: Some("No such file or directory".to_string()),
                },
            ],
        };
        let summary = summarize_report("copy", &report);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].path, PathBuf::from("/r/gone.txt"));
        assert_eq!(summary.message, "copy finished: 1 done, 1 failed");
    }
}
