//! Recharge notifications.
//!
//! When a stored charging entry that already has a rating group receives a
//! different quota, the accounting side must be told to re-read the balance.
//! Provisioning only fires the signal; it never waits on or inspects the
//! outcome beyond logging a failure.

/// Failure reported by a [`RechargeNotifier`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("recharge notification failed: {reason}")]
pub struct NotifyError {
    pub reason: String,
}

impl NotifyError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Receives recharge signals for `(ue_id, rating_group)` pairs.
pub trait RechargeNotifier {
    fn notify_recharge(&self, ue_id: &str, rating_group: i64) -> Result<(), NotifyError>;
}

impl<N: RechargeNotifier + ?Sized> RechargeNotifier for &N {
    fn notify_recharge(&self, ue_id: &str, rating_group: i64) -> Result<(), NotifyError> {
        (**self).notify_recharge(ue_id, rating_group)
    }
}

impl<N: RechargeNotifier + ?Sized> RechargeNotifier for std::sync::Arc<N> {
    fn notify_recharge(&self, ue_id: &str, rating_group: i64) -> Result<(), NotifyError> {
        (**self).notify_recharge(ue_id, rating_group)
    }
}

/// Records recharge signals as log events. This is what the bulk tool uses
/// when no charging function is reachable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl RechargeNotifier for LogNotifier {
    fn notify_recharge(&self, _ue_id: &str, _rating_group: i64) -> Result<(), NotifyError> {
        #[cfg(feature = "tracing")]
        tracing::info!(
            ue_id = _ue_id,
            rating_group = _rating_group,
            "recharge notification"
        );
        Ok(())
    }
}
