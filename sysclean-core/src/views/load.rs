//! Load Tracking
//!
//! Generation counter shared by every asynchronous load of a view. Starting
//! a load supersedes all earlier ones; results carrying an old ticket are
//! dropped.

/// Proof that a load was started, handed back when it completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Generation counter with an in-flight marker
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    generation: u64,
    pending: Option<u64>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding any other in flight
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        LoadTicket(self.generation)
    }

    /// Whether a load is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.pending == Some(ticket.0)
    }

    /// Complete a load, returning whether its result should be applied
    pub fn finish(&mut self, ticket: LoadTicket) -> bool {
        if self.is_current(ticket) {
            self.pending = None;
            true
        } else {
            tracing::debug!(generation = ticket.0, current = self.generation, "Discarding superseded load");
            false
        }
    }

    /// Drop whatever is in flight
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_loads_supersede_older_ones() {
        let mut tracker = LoadTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.finish(first));
        assert!(tracker.is_loading());
        assert!(tracker.finish(second));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn a_ticket_is_only_honoured_once() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin();
        assert!(tracker.finish(ticket));
        assert!(!tracker.finish(ticket));
    }

    #[test]
    fn cancel_discards_the_pending_load() {
        let mut tracker = LoadTracker::new();
        let ticket = tracker.begin();
        tracker.cancel();
        assert!(!tracker.is_loading());
        assert!(!tracker.finish(ticket));
    }
}
