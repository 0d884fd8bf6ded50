//! Log output for the bulk tool.
//!
//! Spans and events from the `subprov` library are printed to stderr so that
//! the per-subscriber progress lines on stdout stay readable. The filter is
//! taken from `RUST_LOG` and defaults to `info`.
//!
//! ```bash
//! RUST_LOG=subprov=debug subprov-bulk -n 5
//! LOG_JSON=true subprov-bulk -n 5 2> provisioning.jsonl
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry(json: bool) -> anyhow::Result<()> {
    let pretty = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_thread_ids(true)
            .with_line_number(true)
            .with_target(false)
            .with_timer(fmt::time::ChronoLocal::rfc_3339())
            .with_file(true)
            .pretty()
    });

    let json = json.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::ChronoLocal::rfc_3339())
            .json()
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(pretty)
        .with(json)
        .try_init()?;

    Ok(())
}
