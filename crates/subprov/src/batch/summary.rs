use crate::{Error, Imsi, SubscriberData, SyncReport};

/// Outcome counts of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub const fn new(requested: usize) -> Self {
        Self {
            requested,
            succeeded: 0,
            failed: 0,
        }
    }

    /// Percentage of requested subscribers that were provisioned. An empty
    /// run reports `0.0`.
    pub fn success_rate(&self) -> f64 {
        if self.requested == 0 {
            return 0.0;
        }
        self.succeeded as f64 / self.requested as f64 * 100.0
    }
}

/// Hooks into a batch run. Every hook defaults to doing nothing.
pub trait BatchObserver {
    /// Called once, after the start identifier has been validated.
    fn on_start(&mut self, _count: usize, _start: &Imsi, _plmn_id: &str) {}

    /// Called with each aggregate before it is synchronized.
    fn on_synthesized(&mut self, _index: usize, _data: &SubscriberData) {}

    fn on_success(&mut self, _index: usize, _ue_id: &str, _report: &SyncReport) {}

    fn on_failure(&mut self, _index: usize, _ue_id: &str, _error: &Error) {}

    /// Called when a run that already started ends early on a fatal error,
    /// with the counts of the subscribers processed so far.
    fn on_abort(&mut self, _summary: &BatchSummary, _error: &Error) {}
}

impl BatchObserver for () {}
