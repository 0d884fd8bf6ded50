#![doc = include_str!("../README.md")]

mod bulk;

use anyhow::Context;
use bulk::config::{BatchConfig, CliArgs, TenantSource};
use bulk::progress::ConsoleReporter;
use bulk::telemetry::init_telemetry;
use clap::Parser;
use subprov::{
    BatchDriver, LogNotifier, MemoryStore, SubscriberData, SyncEngine, TenantId, resolve_tenant,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = BatchConfig::try_from(args)?;

    init_telemetry(config.log_json)?;
    log_startup_info(&config);

    let store = MemoryStore::open(&config.store_file)
        .with_context(|| format!("failed to open store {}", config.store_file.display()))?;

    let template = match &config.template {
        Some(path) => SubscriberData::from_json_file(path)
            .with_context(|| format!("failed to load template {}", path.display()))?,
        None => SubscriberData::default_template(),
    };

    let tenant = tenant(&store, &config.tenant)?;
    tracing::info!(tenant_id = %tenant, "tenant resolved");

    let driver = BatchDriver::new(SyncEngine::new(&store, LogNotifier, tenant), template)
        .with_delay(config.delay);
    let mut reporter = ConsoleReporter::new(std::io::stdout().lock(), config.dump_file.clone());

    let outcome = driver.run_with(
        config.count,
        &config.start.to_string(),
        &config.plmn_id,
        &mut reporter,
    );

    // Whatever was written before a fatal error stays written.
    store
        .flush()
        .with_context(|| format!("failed to save store {}", config.store_file.display()))?;

    let summary = outcome.context("batch aborted")?;
    reporter.summary(&summary);
    Ok(())
}

fn tenant(store: &MemoryStore, source: &TenantSource) -> anyhow::Result<TenantId> {
    match source {
        TenantSource::Id(id) => Ok(id.clone()),
        TenantSource::Name(name) => resolve_tenant(store, name)
            .with_context(|| format!("failed to resolve tenant {name:?}; pass --tenant-id to skip the lookup")),
    }
}

fn log_startup_info(config: &BatchConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting bulk provisioning with full config: {:#?}", config);
    } else {
        tracing::info!(
            count = config.count,
            start = %config.start,
            plmn_id = %config.plmn_id,
            store = %config.store_file.display(),
            "Starting bulk provisioning"
        );
    }
}
