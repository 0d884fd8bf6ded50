use core::fmt;

/// Field carrying the subscriber identifier in every document.
pub const UE_ID_FIELD: &str = "ueId";
/// Field carrying the serving network in network-scoped documents.
pub const SERVING_PLMN_FIELD: &str = "servingPlmnId";
/// Field carrying the tenant scoping tag.
pub const TENANT_FIELD: &str = "tenantId";
/// Field carrying the externally assigned charging rating group.
pub const RATING_GROUP_FIELD: &str = "ratingGroup";
/// Field carrying a charging entry's quota.
pub const QUOTA_FIELD: &str = "quota";

/// The store collections a subscriber is spread over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    AuthenticationSubscription,
    WebAuthenticationSubscription,
    AccessAndMobilityData,
    SessionManagementData,
    SmfSelectionData,
    AmPolicyData,
    SmPolicyData,
    FlowRule,
    QosFlow,
    ChargingData,
    TenantData,
}

impl Collection {
    /// Every collection written for a subscriber, in synchronization order.
    pub const SUBSCRIBER: [Self; 10] = [
        Self::SessionManagementData,
        Self::FlowRule,
        Self::QosFlow,
        Self::ChargingData,
        Self::WebAuthenticationSubscription,
        Self::AuthenticationSubscription,
        Self::AccessAndMobilityData,
        Self::SmfSelectionData,
        Self::AmPolicyData,
        Self::SmPolicyData,
    ];

    /// The collection name used by the control plane.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AuthenticationSubscription => {
                "subscriptionData.authenticationData.authenticationSubscription"
            }
            Self::WebAuthenticationSubscription => {
                "subscriptionData.authenticationData.webAuthenticationSubscription"
            }
            Self::AccessAndMobilityData => "subscriptionData.provisionedData.amData",
            Self::SessionManagementData => "subscriptionData.provisionedData.smData",
            Self::SmfSelectionData => "subscriptionData.provisionedData.smfSelectionSubscriptionData",
            Self::AmPolicyData => "policyData.ues.amData",
            Self::SmPolicyData => "policyData.ues.smData",
            Self::FlowRule => "policyData.ues.flowRule",
            Self::QosFlow => "policyData.ues.qosFlow",
            Self::ChargingData => "policyData.ues.chargingData",
            Self::TenantData => "tenantData",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
