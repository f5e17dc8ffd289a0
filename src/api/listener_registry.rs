use tracing::trace;

use crate::error::BreakpointResult;
use crate::host::BreakpointHost;

use super::{BreakpointEvent, BreakpointTracker, ListenerId, ListenerPayload};

pub type ListenerCallback = Box<dyn FnMut(ListenerPayload)>;

pub(super) struct ListenerEntry {
    pub(super) id: ListenerId,
    pub(super) event: BreakpointEvent,
    pub(super) callback: ListenerCallback,
    /// Condition observed by the previous sweep, for transition dispatch.
    pub(super) was_active: bool,
}

impl<H: BreakpointHost> BreakpointTracker<H> {
    /// Appends a listener for `event`.
    ///
    /// Every tier name in the event must belong to the tracker's set.
    /// Registering the same event twice keeps both listeners; they fire in
    /// registration order. Listeners live as long as the tracker.
    pub fn on<F>(&mut self, event: BreakpointEvent, callback: F) -> BreakpointResult<ListenerId>
    where
        F: FnMut(ListenerPayload) + 'static,
    {
        for name in event.tier_names() {
            self.breakpoints.ensure_contains(name)?;
        }
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        trace!(listener = id.0, %event, "register listener");
        self.listeners.push(ListenerEntry {
            id,
            event,
            callback: Box::new(callback),
            was_active: false,
        });
        Ok(id)
    }

    pub fn up<F>(&mut self, name: &str, callback: F) -> BreakpointResult<ListenerId>
    where
        F: FnMut(ListenerPayload) + 'static,
    {
        self.on(BreakpointEvent::up(name), callback)
    }

    pub fn down<F>(&mut self, name: &str, callback: F) -> BreakpointResult<ListenerId>
    where
        F: FnMut(ListenerPayload) + 'static,
    {
        self.on(BreakpointEvent::down(name), callback)
    }

    pub fn only<F>(&mut self, name: &str, callback: F) -> BreakpointResult<ListenerId>
    where
        F: FnMut(ListenerPayload) + 'static,
    {
        self.on(BreakpointEvent::only(name), callback)
    }

    pub fn between<F>(
        &mut self,
        lower: &str,
        upper: &str,
        callback: F,
    ) -> BreakpointResult<ListenerId>
    where
        F: FnMut(ListenerPayload) + 'static,
    {
        self.on(BreakpointEvent::between(lower, upper), callback)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Ids of listeners registered for `event`, in dispatch order.
    #[must_use]
    pub fn listeners_for(&self, event: &BreakpointEvent) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|entry| entry.event == *event)
            .map(|entry| entry.id)
            .collect()
    }
}
