use super::Snssai;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Access and mobility subscription data, scoped to a serving network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessAndMobilitySubscriptionData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gpsis: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed_ue_ambr: Option<AmbrRm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nssai: Option<Nssai>,
}

/// Aggregate maximum bitrate caps, e.g. `"1 Gbps"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbrRm {
    pub uplink: String,
    pub downlink: String,
}

/// Slices the subscriber may use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nssai {
    #[serde(default)]
    pub default_single_nssais: Vec<Snssai>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub single_nssais: Vec<Snssai>,
}

/// Data network names reachable per slice, keyed by [`Snssai::key`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmfSelectionSubscriptionData {
    #[serde(default)]
    pub subscribed_snssai_infos: BTreeMap<String, SnssaiInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnssaiInfo {
    #[serde(default)]
    pub dnn_infos: Vec<DnnInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnInfo {
    pub dnn: String,
}
