//! Defines an abstraction over the event sending mechanism.

use super::events::UserEvent;

/// A trait that abstracts the delivery of events to the interactive context.
///
/// Background tasks hold a proxy and fire events through it without waiting;
/// the hosting front-end drains them at safe points of its own event loop.
/// This is "fire-and-forget" and doesn't return a result, simplifying its
/// use from deep inside tasks.
pub trait EventProxy: Send + Sync + Clone + 'static {
    fn send_event(&self, event: UserEvent);
}
