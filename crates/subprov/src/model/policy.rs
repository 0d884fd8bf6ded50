use super::Snssai;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Access and mobility policy subscription categories.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmPolicyData {
    #[serde(default)]
    pub subsc_cats: Vec<String>,
}

/// Session management policy data, keyed by [`Snssai::key`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmPolicyData {
    #[serde(default)]
    pub sm_policy_snssai_data: BTreeMap<String, SmPolicySnssaiData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmPolicySnssaiData {
    pub snssai: Snssai,
    /// Keyed by data network name. Keys are escaped before storage, see
    /// [`escape_dnn_key`](crate::escape_dnn_key).
    #[serde(default)]
    pub sm_policy_dnn_data: BTreeMap<String, SmPolicyDnnData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmPolicyDnnData {
    pub dnn: String,
}

/// A flow-level policy rule. Several rules may share a slice and data network;
/// they are distinguished only by content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRule {
    pub filter: String,
    pub precedence: i32,
    /// Compact slice key, see [`Snssai::key`].
    pub snssai: String,
    pub dnn: String,
    pub qos_ref: i32,
}

/// A QoS flow definition referenced from flow rules by `qos_ref`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QosFlow {
    pub snssai: String,
    pub dnn: String,
    #[serde(rename = "qosRef")]
    pub qos_ref: i32,
    #[serde(rename = "5qi")]
    pub var5qi: i32,
    #[serde(rename = "mbrUL", default)]
    pub mbr_ul: String,
    #[serde(rename = "mbrDL", default)]
    pub mbr_dl: String,
    #[serde(rename = "gbrUL", default)]
    pub gbr_ul: String,
    #[serde(rename = "gbrDL", default)]
    pub gbr_dl: String,
}
