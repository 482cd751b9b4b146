//! Defines the custom error type for the `core` module.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the `core` module.
///
/// Per-entry trouble during a walk and per-item trouble during a bulk batch
/// never surface here; those are absorbed into skip counts and item outcomes.
/// This enum covers the failures that end a whole call.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The search root does not exist or could not be opened.
    #[error("search root {1} is not readable: {0}")]
    RootUnreadable(#[source] std::io::Error, PathBuf),

    /// The run was cancelled because a newer one superseded it.
    #[error("search run was cancelled")]
    Cancelled,

    /// A bulk operation was invoked with an empty selection.
    #[error("no paths were selected")]
    EmptySelection,

    /// The copy/move destination is missing or not a directory.
    #[error("destination is not an existing directory: {0}")]
    DestinationInvalid(PathBuf),

    /// Delete was invoked without the caller's prior confirmation signal.
    #[error("delete requires explicit confirmation")]
    DeleteNotConfirmed,

    /// A background task failed to join, usually because it panicked.
    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
