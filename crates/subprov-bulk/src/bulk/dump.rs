use anyhow::Context;
use chrono::{DateTime, Local};
use std::{fs::OpenOptions, io::Write, path::Path};
use subprov::SubscriberData;

const RULE_WIDTH: usize = 50;

/// Appends `data` to `path` as an indented JSON block between a timestamp
/// header and a rule of `=`.
pub fn append_subscriber(path: &Path, data: &SubscriberData, at: DateTime<Local>) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open dump file {}", path.display()))?;

    let body = serde_json::to_string_pretty(data).context("failed to encode subscriber")?;
    let entry = format!(
        "\n=== Subscriber {} - {} ===\n{body}\n{}\n",
        data.ue_id,
        at.format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(RULE_WIDTH)
    );

    file.write_all(entry.as_bytes())
        .with_context(|| format!("failed to write dump file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entries_are_appended_with_header_and_rule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.log");
        let at = Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        let template = SubscriberData::default_template();

        append_subscriber(&path, &template.assigned("imsi-208930000000001", "20893"), at).unwrap();
        append_subscriber(&path, &template.assigned("imsi-208930000000002", "20893"), at).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(
            "\n=== Subscriber imsi-208930000000001 - 2025-03-04 05:06:07 ===\n{\n"
        ));
        assert_eq!(contents.matches("=== Subscriber ").count(), 2);
        assert_eq!(contents.matches(&"=".repeat(RULE_WIDTH)).count(), 2);
        assert!(contents.contains("\"ueId\": \"imsi-208930000000002\""));
        assert!(contents.ends_with(&format!("}}\n{}\n", "=".repeat(RULE_WIDTH))));
    }

    #[test]
    fn each_block_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.log");
        let data = SubscriberData::default_template().assigned("imsi-208930000000001", "20893");

        append_subscriber(&path, &data, Local::now()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let start = contents.find('{').unwrap();
        let end = contents.rfind('}').unwrap();
        let parsed: SubscriberData = serde_json::from_str(&contents[start..=end]).unwrap();
        assert_eq!(parsed, data);
    }
}
