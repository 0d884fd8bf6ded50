use crate::{Error, Result};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Quota persisted for offline entries. Offline balances are managed by the
/// accounting side, provisioning only seeds the policy.
pub const OFFLINE_QUOTA: &str = "0";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargingMethod {
    #[default]
    Online,
    Offline,
}

impl fmt::Display for ChargingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => f.write_str("Online"),
            Self::Offline => f.write_str("Offline"),
        }
    }
}

/// Granularity of a charging entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChargingLevel {
    /// Applies to the whole slice: no data network name, no filter.
    Slice,
    /// Applies to one flow: both data network name and filter are set.
    Flow,
}

/// A charging entry as provisioned. The rating group is never part of the
/// input; it is assigned externally and carried forward from the stored copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingData {
    pub snssai: String,
    #[serde(default)]
    pub dnn: String,
    #[serde(default)]
    pub qos_ref: i32,
    #[serde(default)]
    pub filter: String,
    pub charging_method: ChargingMethod,
    pub quota: String,
    pub unit_cost: String,
}

impl ChargingData {
    /// Classifies the entry by the presence of `dnn` and `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] when exactly one of the two is set.
    pub fn level(&self) -> Result<ChargingLevel> {
        match (self.dnn.is_empty(), self.filter.is_empty()) {
            (true, true) => Ok(ChargingLevel::Slice),
            (false, false) => Ok(ChargingLevel::Flow),
            _ => Err(Error::serialization(format!(
                "charging entry for slice {} has dnn {:?} and filter {:?}; both or neither must be set",
                self.snssai, self.dnn, self.filter
            ))),
        }
    }

    /// The quota that is actually persisted: [`OFFLINE_QUOTA`] for offline
    /// entries, the input exactly as given for online ones.
    pub fn persisted_quota(&self) -> &str {
        match self.charging_method {
            ChargingMethod::Offline => OFFLINE_QUOTA,
            ChargingMethod::Online => &self.quota,
        }
    }
}

/// Normalizes a quota string so equal amounts compare equal: surrounding
/// whitespace is dropped and plain decimal integers lose leading zeros.
/// Anything else is returned trimmed but otherwise untouched.
pub fn canonical_quota(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(value) if trimmed.bytes().all(|b| b.is_ascii_digit()) => value.to_string(),
        _ => trimmed.to_string(),
    }
}
