use super::Collection;
use crate::{ChargingLevel, ChargingMethod, Document, Filter};

/// One document destined for one collection, addressed by its composite key.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub collection: Collection,
    pub key: Filter,
    pub document: Document,
}

/// A charging fragment plus what the engine needs to reconcile it against the
/// previously stored entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargingFragment {
    pub fragment: Fragment,
    pub method: ChargingMethod,
    pub level: ChargingLevel,
    /// Canonical form of the persisted quota, compared against the stored
    /// entry. The document itself keeps the quota as given.
    pub quota: String,
}

/// A subscriber aggregate split into per-collection fragments.
///
/// Fields are grouped the way the synchronization engine writes them.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    /// `(ueId, servingPlmnId)`, the scope replaced wholesale for session
    /// management data, flow rules and QoS flows.
    pub scope: Filter,
    pub session_management: Vec<Fragment>,
    pub flow_rules: Vec<Fragment>,
    pub qos_flows: Vec<Fragment>,
    pub charging: Vec<ChargingFragment>,
    pub web_authentication: Fragment,
    pub authentication: Fragment,
    pub access_and_mobility: Fragment,
    pub smf_selection: Fragment,
    pub am_policy: Fragment,
    pub sm_policy: Fragment,
}

impl Decomposition {
    /// Every fragment, flattened in write order.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.session_management
            .iter()
            .chain(&self.flow_rules)
            .chain(&self.qos_flows)
            .chain(self.charging.iter().map(|charging| &charging.fragment))
            .chain([
                &self.web_authentication,
                &self.authentication,
                &self.access_and_mobility,
                &self.smf_selection,
                &self.am_policy,
                &self.sm_policy,
            ])
    }
}
