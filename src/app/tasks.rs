//! Background execution of search runs and bulk batches.
//!
//! Both entry points must be called from within the tokio runtime that hosts
//! the session. They return immediately; outcomes arrive through the
//! [`EventProxy`] when the work completes.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::events::UserEvent;
use super::proxy::EventProxy;
use super::state::AppState;
use super::view_model;
use crate::core::{BulkFileOp, BulkOperation, SearchRequest, Traverser};

/// Starts a new search run, superseding any run still in flight.
///
/// The walk happens on the blocking pool; the finished table is delivered
/// through `proxy` exactly once, and only if no newer run has started in the
/// meantime ("last start wins"). A root that cannot be read surfaces as
/// `SearchFailed` with an empty result set, never as a partial one.
///
/// Returns the run's generation id.
pub fn start_search<P: EventProxy>(
    request: SearchRequest,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) -> u64 {
    let mut guard = state.lock().unwrap();
    let generation = guard.supersede_search();
    let cancel = guard.search_cancel.clone();
    guard.config.last_directory = Some(request.root.clone());

    tracing::info!(
        generation,
        root = %request.root.display(),
        include = %request.include,
        exclude = %request.exclude,
        "search run started"
    );

    let task_state = state.clone();
    let handle = tokio::spawn(async move {
        let walked = tokio::task::spawn_blocking(move || {
            Traverser::new(&request).walk(&request, &cancel)
        })
        .await;

        let mut guard = task_state.lock().unwrap();
        if guard.search_generation != generation {
            tracing::warn!(generation, "discarding results of superseded search run");
            return;
        }
        guard.search_task = None;

        match walked {
            Ok(Ok(outcome)) => {
                guard.apply_walk(outcome);
                proxy.send_event(UserEvent::SearchFinished(Box::new(view_model::table_view(
                    &guard,
                ))));
            }
            Ok(Err(e)) => {
                tracing::error!(generation, "search run failed: {e}");
                guard.clear_results();
                proxy.send_event(UserEvent::SearchFailed(e.to_string()));
            }
            Err(join_error) => {
                tracing::error!(generation, "search task did not finish: {join_error}");
                guard.clear_results();
                proxy.send_event(UserEvent::SearchFailed(join_error.to_string()));
            }
        }
    });
    guard.search_task = Some(handle);

    generation
}

/// Runs one bulk batch on the blocking pool.
///
/// Batches are serialized: while one is in flight, further requests are
/// refused with `BulkRejected` instead of queueing destructive work behind
/// the user's back. Precondition failures (empty selection, bad destination,
/// unconfirmed delete) also arrive as `BulkRejected`; a batch that ran to
/// completion always arrives as `BulkFinished`, failures included.
pub fn run_bulk_operation<P: EventProxy>(
    operation: BulkOperation,
    paths: Vec<PathBuf>,
    proxy: P,
    state: Arc<Mutex<AppState>>,
) {
    {
        let mut guard = state.lock().unwrap();
        if guard.is_transferring {
            proxy.send_event(UserEvent::BulkRejected(
                "another bulk operation is still running".to_string(),
            ));
            return;
        }
        guard.is_transferring = true;
    }

    tracing::info!(op = operation.verb(), items = paths.len(), "bulk batch started");

    tokio::spawn(async move {
        let verb = operation.verb();
        let applied =
            tokio::task::spawn_blocking(move || BulkFileOp::apply(&operation, &paths)).await;

        let mut guard = state.lock().unwrap();
        guard.is_transferring = false;

        match applied {
            Ok(Ok(report)) => {
                let summary = view_model::summarize_report(verb, &report);
                guard.last_report = Some(report);
                proxy.send_event(UserEvent::BulkFinished(summary));
            }
            Ok(Err(e)) => {
                tracing::warn!("bulk batch refused: {e}");
                proxy.send_event(UserEvent::BulkRejected(e.to_string()));
            }
            Err(join_error) => {
                tracing::error!("bulk task did not finish: {join_error}");
                proxy.send_event(UserEvent::BulkRejected(join_error.to_string()));
            }
        }
    });
}
