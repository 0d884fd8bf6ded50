use super::dump::append_subscriber;
use std::{io::Write, path::PathBuf};
use subprov::{BatchObserver, BatchSummary, Error, Imsi, SubscriberData, SyncReport};

/// Prints a banner, one line per subscriber and a closing summary to `out`,
/// and appends each synthesized subscriber to the dump file when one is set.
///
/// Console and dump-file failures are logged and otherwise ignored; they never
/// affect the batch outcome.
pub struct ConsoleReporter<W> {
    out: W,
    count: usize,
    dump_file: Option<PathBuf>,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W, dump_file: Option<PathBuf>) -> Self {
        Self {
            out,
            count: 0,
            dump_file,
        }
    }

    pub fn summary(&mut self, summary: &BatchSummary) {
        self.print(format_args!(
            "\nSummary:\n  Successful: {}\n  Failed: {}\n  Success rate: {:.1}%",
            summary.succeeded,
            summary.failed,
            summary.success_rate()
        ));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, line: core::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!("failed to write progress: {}", err);
        }
    }
}

impl<W: Write> BatchObserver for ConsoleReporter<W> {
    fn on_start(&mut self, count: usize, start: &Imsi, plmn_id: &str) {
        self.count = count;
        self.print(format_args!(
            "Starting bulk subscriber upload...\nCount: {count} subscribers\nStarting IMSI: {start}\nPLMN ID: {plmn_id}"
        ));
    }

    fn on_synthesized(&mut self, _index: usize, data: &SubscriberData) {
        let Some(path) = &self.dump_file else {
            return;
        };
        if let Err(err) = append_subscriber(path, data, chrono::Local::now()) {
            tracing::warn!(ue_id = %data.ue_id, "failed to dump subscriber: {:#}", err);
        }
    }

    fn on_success(&mut self, index: usize, ue_id: &str, _report: &SyncReport) {
        let count = self.count;
        self.print(format_args!(
            "Creating subscriber {}/{count} (IMSI: {ue_id})... Success",
            index + 1
        ));
    }

    fn on_failure(&mut self, index: usize, ue_id: &str, error: &Error) {
        let count = self.count;
        self.print(format_args!(
            "Creating subscriber {}/{count} (IMSI: {ue_id})... Failed: {error}",
            index + 1
        ));
    }

    fn on_abort(&mut self, summary: &BatchSummary, error: &Error) {
        self.print(format_args!("Aborted: {error}"));
        self.summary(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;
    use subprov::{BatchDriver, LogNotifier, MemoryStore, SyncEngine, TenantId};

    fn run(count: usize, template: SubscriberData, dump_file: Option<PathBuf>) -> String {
        let store = MemoryStore::new();
        let mut reporter = ConsoleReporter::new(Vec::new(), dump_file);
        let summary = BatchDriver::new(
            SyncEngine::new(&store, LogNotifier, TenantId::new("t-1")),
            template,
        )
        .with_delay(Duration::ZERO)
        .run_with(count, "imsi-208930000000001", "20893", &mut reporter)
        .unwrap();
        reporter.summary(&summary);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn prints_banner_progress_and_summary() {
        let output = run(2, SubscriberData::default_template(), None);
        assert_eq!(
            output,
            "Starting bulk subscriber upload...\n\
             Count: 2 subscribers\n\
             Starting IMSI: imsi-208930000000001\n\
             PLMN ID: 20893\n\
             Creating subscriber 1/2 (IMSI: imsi-208930000000001)... Success\n\
             Creating subscriber 2/2 (IMSI: imsi-208930000000002)... Success\n\
             \n\
             Summary:\n  Successful: 2\n  Failed: 0\n  Success rate: 100.0%\n"
        );
    }

    #[test]
    fn failures_are_reported_with_their_cause() {
        let mut template = SubscriberData::default_template();
        template.web_authentication_subscription.milenage = None;

        let output = run(1, template, None);
        assert!(output.contains("Creating subscriber 1/1 (IMSI: imsi-208930000000001)... Failed: "));
        assert!(output.contains("Success rate: 0.0%"));
    }

    #[test]
    fn empty_run_prints_a_zero_summary() {
        let output = run(0, SubscriberData::default_template(), None);
        assert!(output.contains("Count: 0 subscribers"));
        assert!(output.ends_with("Summary:\n  Successful: 0\n  Failed: 0\n  Success rate: 0.0%\n"));
    }

    #[test]
    fn overflow_reports_what_was_committed() {
        let store = MemoryStore::new();
        let mut reporter = ConsoleReporter::new(Vec::new(), None);
        let outcome = BatchDriver::new(
            SyncEngine::new(&store, LogNotifier, TenantId::new("t-1")),
            SubscriberData::default_template(),
        )
        .with_delay(Duration::ZERO)
        .run_with(3, "imsi-208939999999999", "20893", &mut reporter);

        assert!(outcome.is_err());
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("Creating subscriber 1/3 (IMSI: imsi-208939999999999)... Success\nAborted: "));
        assert!(output.ends_with("Summary:\n  Successful: 1\n  Failed: 0\n  Success rate: 33.3%\n"));
    }

    #[test]
    fn synthesized_subscribers_are_dumped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.log");

        run(3, SubscriberData::default_template(), Some(path.clone()));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("=== Subscriber imsi-").count(), 3);
    }
}
