//! Defines the central, mutable state of a session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::core::{sort_items, BulkReport, ResultItem, SortKey, SortState, WalkOutcome};

/// Lifecycle of the current search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Holds the complete, mutable state of a session.
///
/// This struct is wrapped in an `Arc<Mutex<...>>` so the interactive context
/// and background tasks share it safely. The filesystem itself is the only
/// other shared resource; the run generation below is the sole marker needed
/// to keep stale deliveries out.
pub struct AppState {
    /// The session's configuration settings.
    pub config: AppConfig,
    /// Results of the latest applied run, ordered by `sort`.
    pub results: Vec<ResultItem>,
    /// Entries the latest run skipped because they could not be read.
    pub skipped_entries: usize,
    /// Current table ordering.
    pub sort: SortState,
    /// Where the current run is in its lifecycle.
    pub phase: SearchPhase,
    /// Monotonic run id. A task only applies its results while its own id is
    /// still current, so at most one active result set is ever rendered.
    pub search_generation: u64,
    /// A handle to the running search task, allowing it to be aborted.
    pub search_task: Option<JoinHandle<()>>,
    /// A flag used to signal cancellation to the walk of the current run.
    pub search_cancel: Arc<AtomicBool>,
    /// True while a bulk batch is in flight; batches are serialized on it.
    pub is_transferring: bool,
    /// Full per-item report of the most recent bulk batch.
    pub last_report: Option<BulkReport>,
}

impl Default for AppState {
    /// Creates a default `AppState`, loading the configuration from disk.
    fn default() -> Self {
        Self::with_config(AppConfig::load().unwrap_or_default())
    }
}

impl AppState {
    /// Creates a state around an explicit configuration, without touching the
    /// on-disk config.
    pub fn with_config(config: AppConfig) -> Self {
        let sort = config.sort;
        Self {
            config,
            results: Vec::new(),
            skipped_entries: 0,
            sort,
            phase: SearchPhase::Idle,
            search_generation: 0,
            search_task: None,
            search_cancel: Arc::new(AtomicBool::new(false)),
            is_transferring: false,
            last_report: None,
        }
    }

    /// Withdraws interest in any in-flight run and opens a new generation.
    ///
    /// The old run keeps its cancelled flag and may still finish its I/O, but
    /// the generation bump guarantees its output is dropped. Returns the new
    /// generation for the caller to carry into its task.
    pub fn supersede_search(&mut self) -> u64 {
        self.search_cancel.store(true, Ordering::SeqCst);
        if let Some(handle) = self.search_task.take() {
            handle.abort();
            tracing::info!(
                generation = self.search_generation,
                "superseded active search run"
            );
        }
        self.search_cancel = Arc::new(AtomicBool::new(false));
        self.search_generation += 1;
        self.phase = SearchPhase::Running;
        self.search_generation
    }

    /// Replaces the result set with a freshly walked one and orders it under
    /// the current sort state. The previous set is discarded wholesale.
    pub fn apply_walk(&mut self, outcome: WalkOutcome) {
        self.results = outcome.items;
        self.skipped_entries = outcome.skipped_entries;
        sort_items(&mut self.results, self.sort);
        self.phase = SearchPhase::Completed;
    }

    /// Clears the result set after a top-level search failure.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.skipped_entries = 0;
        self.phase = SearchPhase::Completed;
    }

    /// Applies a column-header click: toggles on the active key, switches to
    /// ascending on a new key, then re-orders the current results.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.config.sort = self.sort;
        sort_items(&mut self.results, self.sort);
    }
}
