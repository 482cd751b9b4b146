//! Recursive directory traversal producing the flat result list.

use std::fs::Metadata;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use walkdir::WalkDir;

use super::{CoreError, EntryKind, NameFilter, ResultItem, SearchRequest};

/// How many entries are visited between polls of the cancellation flag.
const CANCEL_CHECK_INTERVAL: usize = 64;

/// The outcome of a completed walk: every match, plus the number of entries
/// skipped because they could not be read mid-walk.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub items: Vec<ResultItem>,
    pub skipped_entries: usize,
}

/// Walks the subtree of a search request, emitting every entry whose name
/// passes the filter.
pub struct Traverser {
    filter: NameFilter,
}

impl Traverser {
    pub fn new(request: &SearchRequest) -> Self {
        Self {
            filter: NameFilter::from_request(request),
        }
    }

    /// Visits every directory under `request.root` and tests each child entry
    /// against the filter and the kind selector. The filter gates emission
    /// only: a directory whose own name is filtered out is still descended
    /// into, so matching entries below it surface. The root itself is never
    /// emitted.
    ///
    /// Entries that vanish or turn unreadable mid-walk are skipped and
    /// counted; only a failure to open the root aborts the walk. Emission
    /// order is filesystem enumeration order and is not deterministic across
    /// runs.
    pub fn walk(
        &self,
        request: &SearchRequest,
        cancel: &AtomicBool,
    ) -> Result<WalkOutcome, CoreError> {
        // A missing or unopenable root is the one top-level failure.
        std::fs::read_dir(&request.root)
            .map_err(|e| CoreError::RootUnreadable(e, request.root.clone()))?;

        let mut outcome = WalkOutcome::default();

        for (index, entry) in WalkDir::new(&request.root)
            .follow_links(false)
            .min_depth(1)
            .into_iter()
            .enumerate()
        {
            if index % CANCEL_CHECK_INTERVAL == 0 && cancel.load(Ordering::Relaxed) {
                tracing::info!(visited = index, "walk cancelled");
                return Err(CoreError::Cancelled);
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    outcome.skipped_entries += 1;
                    tracing::debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Folder
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                // Symlinks and special files are neither searchable kind.
                continue;
            };

            let wanted = match kind {
                EntryKind::Folder => request.kinds.includes_folders(),
                EntryKind::File => request.kinds.includes_files(),
            };
            if !wanted {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.filter.matches(&name) {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    outcome.skipped_entries += 1;
                    tracing::debug!(path = %entry.path().display(), "skipping entry without metadata: {e}");
                    continue;
                }
            };

            outcome.items.push(ResultItem {
                name,
                path: entry.into_path(),
                created: created_at(&metadata),
                size_bytes: match kind {
                    EntryKind::File => metadata.len(),
                    EntryKind::Folder => 0,
                },
                kind,
            });
        }

        tracing::info!(
            root = %request.root.display(),
            matches = outcome.items.len(),
            skipped = outcome.skipped_entries,
            "walk finished"
        );
        Ok(outcome)
    }
}

/// Creation time as the filesystem reports it. Platforms or filesystems
/// without a birth time report the last modification time instead; both
/// semantics are inherited from the host, not normalized.
fn created_at(metadata: &Metadata) -> SystemTime {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
