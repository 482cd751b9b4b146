pub mod error;
pub mod filter;
pub mod sort;
pub mod transfer;
pub mod traverse;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// Which entry types a search run considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KindSelector {
    #[default]
    Files,
    Folders,
    Both,
}

impl KindSelector {
    pub fn includes_files(self) -> bool {
        matches!(self, KindSelector::Files | KindSelector::Both)
    }

    pub fn includes_folders(self) -> bool {
        matches!(self, KindSelector::Folders | KindSelector::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Folder,
}

/// One matched entry produced by a traversal run.
///
/// Items are rebuilt from scratch on every run and discarded wholesale when a
/// newer run replaces them. `path` resolves at the moment the item is
/// produced; it can go stale if the filesystem changes before a later bulk
/// operation touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    /// Base name of the matched entry.
    pub name: String,
    /// Full path of the entry, unique within one result set.
    pub path: PathBuf,
    /// Creation time as the filesystem reports it; see `traverse::created_at`
    /// for the platform fallback.
    pub created: SystemTime,
    /// Byte size for files. Folders always carry 0 and never aggregate their
    /// subtree size.
    pub size_bytes: u64,
    pub kind: EntryKind,
}

impl ResultItem {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// The immutable parameters of one search run.
///
/// The include/exclude needles are trimmed and case-folded once at
/// construction so the per-entry predicate never re-folds them. An empty
/// include needle matches every name; an empty exclude needle excludes
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub root: PathBuf,
    pub include: String,
    pub exclude: String,
    pub kinds: KindSelector,
}

impl SearchRequest {
    pub fn new(
        root: impl Into<PathBuf>,
        include: &str,
        exclude: &str,
        kinds: KindSelector,
    ) -> Self {
        Self {
            root: root.into(),
            include: include.trim().to_lowercase(),
            exclude: exclude.trim().to_lowercase(),
            kinds,
        }
    }
}

pub use error::CoreError;
pub use filter::NameFilter;
pub use sort::{sort_items, SortKey, SortState};
pub use transfer::{BulkFileOp, BulkOperation, BulkReport, ItemOutcome};
pub use traverse::{Traverser, WalkOutcome};
