//! Defines the events delivered from background tasks to the interactive
//! context.

use super::view_model::{ReportSummary, TableView};

/// Events sent from the backend to whichever front-end hosts the core.
///
/// Results always correspond to the most recently started search; a
/// superseded run sends nothing.
#[derive(Debug)]
pub enum UserEvent {
    /// The latest search run finished; carries the renderable table.
    SearchFinished(Box<TableView>),
    /// The search root could not be read. The result set is now empty.
    SearchFailed(String),
    /// A bulk batch ran to completion, successes and failures included.
    BulkFinished(ReportSummary),
    /// A bulk batch was refused before any path was touched.
    BulkRejected(String),
}
