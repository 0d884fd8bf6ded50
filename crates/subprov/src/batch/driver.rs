use super::{BatchObserver, BatchSummary};
use crate::{DocumentStore, Imsi, RechargeNotifier, Result, SubscriberData, SyncEngine};
use core::time::Duration;

/// Pause between two subscribers unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Provisions a run of consecutive subscribers from one template.
///
/// Subscribers are processed strictly one after another. Each iteration works
/// on a fresh copy of the template, so nothing leaks from one subscriber into
/// the next. A failed subscriber is counted and the run moves on; only a
/// malformed start identifier or an identifier overflow ends the run early.
#[derive(Clone, Debug)]
pub struct BatchDriver<S, N> {
    engine: SyncEngine<S, N>,
    template: SubscriberData,
    delay: Duration,
}

impl<S, N> BatchDriver<S, N>
where
    S: DocumentStore,
    N: RechargeNotifier,
{
    pub const fn new(engine: SyncEngine<S, N>, template: SubscriberData) -> Self {
        Self {
            engine,
            template,
            delay: DEFAULT_DELAY,
        }
    }

    /// Sets the pause between subscribers. `Duration::ZERO` disables it.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub const fn engine(&self) -> &SyncEngine<S, N> {
        &self.engine
    }

    pub const fn template(&self) -> &SubscriberData {
        &self.template
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Provisions `count` subscribers starting at `start` on `plmn_id`.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedIdentifier`](crate::Error::MalformedIdentifier) if
    ///   `start` is not a valid identifier.
    /// - [`Error::Overflow`](crate::Error::Overflow) if the run would step past
    ///   the last subscriber number. Subscribers already provisioned stay
    ///   provisioned; [`BatchObserver::on_abort`] receives their counts.
    pub fn run(&self, count: usize, start: &str, plmn_id: &str) -> Result<BatchSummary> {
        self.run_with(count, start, plmn_id, &mut ())
    }

    /// Like [`run`](Self::run), reporting progress to `observer`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, observer), fields(delay_ms = self.delay.as_millis() as u64))
    )]
    pub fn run_with<O>(
        &self,
        count: usize,
        start: &str,
        plmn_id: &str,
        observer: &mut O,
    ) -> Result<BatchSummary>
    where
        O: BatchObserver + ?Sized,
    {
        let mut current = Imsi::parse(start)?;
        let mut summary = BatchSummary::new(count);
        observer.on_start(count, &current, plmn_id);

        for index in 0..count {
            let ue_id = current.to_string();
            let data = self.template.assigned(&ue_id, plmn_id);
            observer.on_synthesized(index, &data);

            match self.engine.synchronize(&data, &ue_id, plmn_id) {
                Ok(report) => {
                    summary.succeeded += 1;
                    observer.on_success(index, &ue_id, &report);
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(ue_id = %ue_id, "failed to provision subscriber: {}", err);
                    summary.failed += 1;
                    observer.on_failure(index, &ue_id, &err);
                }
            }

            if index + 1 < count {
                current = match current.next() {
                    Ok(next) => next,
                    Err(err) => {
                        #[cfg(feature = "tracing")]
                        tracing::error!(
                            succeeded = summary.succeeded,
                            failed = summary.failed,
                            "batch aborted: {}",
                            err
                        );
                        observer.on_abort(&summary, &err);
                        return Err(err);
                    }
                };
                if !self.delay.is_zero() {
                    std::thread::sleep(self.delay);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "batch finished"
        );
        Ok(summary)
    }
}
