use anyhow::bail;
use clap::Parser;
use core::time::Duration;
use std::path::PathBuf;
use subprov::{ADMIN_TENANT, Imsi, TenantId};

const EXAMPLES: &str = "\
Examples:
  subprov-bulk -n 100
  subprov-bulk -n 50 --start imsi-208930000001000 --plmn 20893
  subprov-bulk --tenant-id 0c9a6a1e --dump-file subscribers.log";

/// Command line surface of the `subprov-bulk` binary.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "subprov-bulk",
    version,
    about = "Provisions a run of sequential subscribers into the subscriber document store",
    after_help = EXAMPLES
)]
pub struct CliArgs {
    /// Number of subscribers to create.
    ///
    /// Environment variable: `SUBSCRIBER_COUNT`
    #[arg(short = 'n', long, env = "SUBSCRIBER_COUNT", default_value_t = 10)]
    pub count: usize,

    /// First identifier of the run, `imsi-` followed by at least 15 digits.
    ///
    /// Environment variable: `START_IMSI`
    #[arg(short, long, env = "START_IMSI", default_value_t = String::from("imsi-208930000000001"))]
    pub start: String,

    /// Serving network (MCC followed by MNC) the subscribers are provisioned on.
    ///
    /// Environment variable: `PLMN_ID`
    #[arg(short, long, env = "PLMN_ID", default_value_t = String::from("20893"))]
    pub plmn: String,

    /// JSON snapshot backing the document store. Created on first use.
    ///
    /// Environment variable: `STORE_FILE`
    #[arg(long, env = "STORE_FILE", default_value = "udr.json")]
    pub store_file: PathBuf,

    /// Tenant identifier stamped on every document. Skips the lookup by name.
    ///
    /// Environment variable: `TENANT_ID`
    #[arg(long, env = "TENANT_ID")]
    pub tenant_id: Option<String>,

    /// Tenant looked up in the tenant collection when no identifier is given.
    ///
    /// Environment variable: `TENANT_NAME`
    #[arg(long, env = "TENANT_NAME", default_value_t = String::from(ADMIN_TENANT))]
    pub tenant_name: String,

    /// Pause between two subscribers, in milliseconds.
    ///
    /// Environment variable: `BATCH_DELAY_MS`
    #[arg(long, env = "BATCH_DELAY_MS", default_value_t = 50)]
    pub delay_ms: u64,

    /// Subscriber template in the web console's JSON export format. The
    /// built-in profile is used when omitted.
    ///
    /// Environment variable: `TEMPLATE_FILE`
    #[arg(long, env = "TEMPLATE_FILE")]
    pub template: Option<PathBuf>,

    /// Append every synthesized subscriber to this file as pretty JSON.
    ///
    /// Environment variable: `DUMP_FILE`
    #[arg(long, env = "DUMP_FILE")]
    pub dump_file: Option<PathBuf>,

    /// Emit logs as JSON lines instead of human-readable output.
    ///
    /// Environment variable: `LOG_JSON`
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

/// Where the tenant scoping tag comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantSource {
    Id(TenantId),
    Name(String),
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub count: usize,
    pub start: Imsi,
    pub plmn_id: String,
    pub store_file: PathBuf,
    pub tenant: TenantSource,
    pub delay: Duration,
    pub template: Option<PathBuf>,
    pub dump_file: Option<PathBuf>,
    pub log_json: bool,
}

impl TryFrom<CliArgs> for BatchConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let start = match Imsi::parse(&args.start) {
            Ok(start) => start,
            Err(err) => bail!("START_IMSI is invalid: {err}"),
        };

        if !(5..=6).contains(&args.plmn.len()) || !args.plmn.bytes().all(|b| b.is_ascii_digit()) {
            bail!(
                "PLMN_ID ({:?}) must be a 3-digit MCC followed by a 2 or 3-digit MNC",
                args.plmn
            );
        }

        let tenant = match args.tenant_id {
            Some(id) if id.trim().is_empty() => bail!("TENANT_ID must not be empty"),
            Some(id) => TenantSource::Id(TenantId::new(id)),
            None if args.tenant_name.trim().is_empty() => {
                bail!("TENANT_NAME must not be empty when TENANT_ID is not set")
            }
            None => TenantSource::Name(args.tenant_name),
        };

        Ok(Self {
            count: args.count,
            start,
            plmn_id: args.plmn,
            store_file: args.store_file,
            tenant,
            delay: Duration::from_millis(args.delay_ms),
            template: args.template,
            dump_file: args.dump_file,
            log_json: args.log_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> anyhow::Result<BatchConfig> {
        let args = CliArgs::try_parse_from(
            ["subprov-bulk", "--store-file", "store.json"]
                .iter()
                .chain(extra),
        )?;
        BatchConfig::try_from(args)
    }

    #[test]
    fn explicit_flags_are_validated_into_config() {
        let config = parse(&[
            "-n",
            "3",
            "--start",
            "imsi-208930000001000",
            "--plmn",
            "208930",
            "--tenant-id",
            "t-1",
            "--delay-ms",
            "0",
        ])
        .unwrap();

        assert_eq!(config.count, 3);
        assert_eq!(config.start.to_string(), "imsi-208930000001000");
        assert_eq!(config.plmn_id, "208930");
        assert_eq!(config.tenant, TenantSource::Id(TenantId::new("t-1")));
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.store_file, PathBuf::from("store.json"));
    }

    #[test]
    fn tenant_name_is_used_without_tenant_id() {
        let config = parse(&["--tenant-name", "operator", "--start", "imsi-208930000000001"]).unwrap();
        assert_eq!(config.tenant, TenantSource::Name("operator".to_string()));
    }

    #[test]
    fn zero_count_is_accepted() {
        let config = parse(&["-n", "0", "--start", "imsi-208930000000001"]).unwrap();
        assert_eq!(config.count, 0);
    }

    #[test]
    fn malformed_start_is_rejected() {
        let err = parse(&["--start", "208930000000001"]).unwrap_err();
        assert!(err.to_string().contains("START_IMSI"));
    }

    #[test]
    fn non_numeric_plmn_is_rejected() {
        assert!(parse(&["--start", "imsi-208930000000001", "--plmn", "2089x"]).is_err());
        assert!(parse(&["--start", "imsi-208930000000001", "--plmn", "208"]).is_err());
    }

    #[test]
    fn empty_tenant_id_is_rejected() {
        assert!(parse(&["--start", "imsi-208930000000001", "--tenant-id", " "]).is_err());
    }
}
