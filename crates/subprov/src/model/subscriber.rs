use super::{
    AccessAndMobilitySubscriptionData, AmPolicyData, ChargingData, FlowRule, QosFlow,
    SessionManagementSubscriptionData, SmPolicyData, SmfSelectionSubscriptionData,
    WebAuthenticationSubscription,
};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One subscriber, as a single in-memory aggregate.
///
/// The aggregate is never stored as one document; the
/// [`decompose`](crate::decompose()) step splits it over the subscriber,
/// policy and charging collections. Top-level names follow the web console's
/// export format so templates can be loaded from the same JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriberData {
    #[serde(rename = "ueId", default)]
    pub ue_id: String,
    #[serde(rename = "plmnID", default)]
    pub plmn_id: String,
    pub web_authentication_subscription: WebAuthenticationSubscription,
    #[serde(default)]
    pub access_and_mobility_subscription_data: AccessAndMobilitySubscriptionData,
    #[serde(default)]
    pub session_management_subscription_data: Vec<SessionManagementSubscriptionData>,
    #[serde(default)]
    pub smf_selection_subscription_data: SmfSelectionSubscriptionData,
    #[serde(default)]
    pub am_policy_data: AmPolicyData,
    #[serde(default)]
    pub sm_policy_data: SmPolicyData,
    #[serde(default)]
    pub flow_rules: Vec<FlowRule>,
    #[serde(default)]
    pub qos_flows: Vec<QosFlow>,
    #[serde(default)]
    pub charging_datas: Vec<ChargingData>,
}

impl SubscriberData {
    /// Returns a copy addressed to `ue_id` on `plmn_id`.
    pub fn assigned(&self, ue_id: &str, plmn_id: &str) -> Self {
        let mut data = self.clone();
        data.ue_id = ue_id.to_string();
        data.plmn_id = plmn_id.to_string();
        data
    }

    /// Loads an aggregate from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if the
    /// file cannot be read or does not describe a subscriber.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            crate::Error::serialization(format!("failed to read {}: {err}", path.display()))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
