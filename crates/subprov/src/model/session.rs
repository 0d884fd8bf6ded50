use super::Snssai;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Session management subscription for one slice: one [`DnnConfiguration`]
/// per data network name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionManagementSubscriptionData {
    pub single_nssai: Snssai,
    #[serde(default)]
    pub dnn_configurations: BTreeMap<String, DnnConfiguration>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnnConfiguration {
    pub pdu_session_types: PduSessionTypes,
    pub ssc_modes: SscModes,
    #[serde(rename = "5gQosProfile", default, skip_serializing_if = "Option::is_none")]
    pub qos_profile: Option<SubscribedDefaultQos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_ambr: Option<Ambr>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PduSessionTypes {
    pub default_session_type: PduSessionType,
    #[serde(default)]
    pub allowed_session_types: Vec<PduSessionType>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PduSessionType {
    #[default]
    Ipv4,
    Ipv6,
    Ipv4v6,
    Unstructured,
    Ethernet,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SscModes {
    pub default_ssc_mode: SscMode,
    #[serde(default)]
    pub allowed_ssc_modes: Vec<SscMode>,
}

/// Session and service continuity mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SscMode {
    #[default]
    #[serde(rename = "SSC_MODE_1")]
    Mode1,
    #[serde(rename = "SSC_MODE_2")]
    Mode2,
    #[serde(rename = "SSC_MODE_3")]
    Mode3,
}

/// Default QoS profile applied to sessions on a data network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedDefaultQos {
    #[serde(rename = "5qi")]
    pub var5qi: i32,
    pub arp: Arp,
    #[serde(default)]
    pub priority_level: i32,
}

/// Allocation and retention priority.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arp {
    pub priority_level: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub preempt_cap: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub preempt_vuln: String,
}

/// Session aggregate maximum bitrate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ambr {
    pub uplink: String,
    pub downlink: String,
}
