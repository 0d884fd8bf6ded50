//! The default provisioning profile.
//!
//! Two slices share one `internet` data network. The first slice is charged
//! offline and the second online, so a batch run exercises both charging paths.

use crate::{
    AccessAndMobilitySubscriptionData, Ambr, AmbrRm, AmPolicyData, Arp, ChargingData,
    ChargingMethod, DnnConfiguration, DnnInfo, FlowRule, Milenage, Nssai, Op, PduSessionType,
    PduSessionTypes, PermanentKey, QosFlow, SessionManagementSubscriptionData, SmPolicyData,
    SmPolicyDnnData, SmPolicySnssaiData, SmfSelectionSubscriptionData, Snssai, SnssaiInfo,
    SscMode, SscModes, SubscribedDefaultQos, SubscriberData, WebAuthenticationSubscription,
};
use std::collections::BTreeMap;

pub const AUTHENTICATION_METHOD: &str = "5G_AKA";
pub const PERMANENT_KEY: &str = "8baf473f2f8fd09487cccbd7097c6862";
pub const SEQUENCE_NUMBER: &str = "000000000023";
pub const OPERATOR_KEY: &str = "8e27b6af0e692e750f32667a3b14605d";
pub const AUTHENTICATION_MANAGEMENT_FIELD: &str = "8000";

/// GPSI placeholder; the web console fills in the number.
pub const GPSI: &str = "msisdn-";
pub const UE_AMBR_UPLINK: &str = "1 Gbps";
pub const UE_AMBR_DOWNLINK: &str = "2 Gbps";

pub const SLICE_SST: i32 = 1;
/// Differentiator of the default slice (`01010203`).
pub const DEFAULT_SLICE_SD: &str = "010203";
/// Differentiator of the second slice (`01112233`).
pub const SECOND_SLICE_SD: &str = "112233";

pub const DNN: &str = "internet";
pub const FIVE_QI: i32 = 9;
pub const ARP_PRIORITY_LEVEL: i32 = 8;
pub const SESSION_AMBR: &str = "1000 Mbps";

pub const SUBSCRIPTION_CATEGORY: &str = "free5gc";

pub const FLOW_FILTER: &str = "1.1.1.1/32";

pub const CHARGING_QUOTA: &str = "100000";
/// Quota of the online flow-level entry on the second slice.
pub const FLOW_CHARGING_QUOTA: &str = "5000";
pub const UNIT_COST: &str = "1";

impl SubscriberData {
    /// The default profile, not yet assigned to a subscriber.
    pub fn default_template() -> Self {
        let default_slice = Snssai::new(SLICE_SST, DEFAULT_SLICE_SD);
        let second_slice = Snssai::new(SLICE_SST, SECOND_SLICE_SD);
        let slices = [default_slice.clone(), second_slice.clone()];

        Self {
            ue_id: String::new(),
            plmn_id: String::new(),
            web_authentication_subscription: WebAuthenticationSubscription {
                authentication_method: AUTHENTICATION_METHOD.to_string(),
                permanent_key: Some(PermanentKey {
                    permanent_key_value: PERMANENT_KEY.to_string(),
                    ..Default::default()
                }),
                sequence_number: SEQUENCE_NUMBER.to_string(),
                authentication_management_field: AUTHENTICATION_MANAGEMENT_FIELD.to_string(),
                milenage: Some(Milenage {
                    op: Some(Op {
                        op_value: OPERATOR_KEY.to_string(),
                        ..Default::default()
                    }),
                }),
                opc: None,
            },
            access_and_mobility_subscription_data: AccessAndMobilitySubscriptionData {
                gpsis: vec![GPSI.to_string()],
                subscribed_ue_ambr: Some(AmbrRm {
                    uplink: UE_AMBR_UPLINK.to_string(),
                    downlink: UE_AMBR_DOWNLINK.to_string(),
                }),
                nssai: Some(Nssai {
                    default_single_nssais: vec![default_slice.clone()],
                    single_nssais: vec![second_slice.clone()],
                }),
            },
            session_management_subscription_data: slices
                .iter()
                .map(|slice| SessionManagementSubscriptionData {
                    single_nssai: slice.clone(),
                    dnn_configurations: BTreeMap::from([(DNN.to_string(), dnn_configuration())]),
                })
                .collect(),
            smf_selection_subscription_data: SmfSelectionSubscriptionData {
                subscribed_snssai_infos: slices
                    .iter()
                    .map(|slice| {
                        let info = SnssaiInfo {
                            dnn_infos: vec![DnnInfo {
                                dnn: DNN.to_string(),
                            }],
                        };
                        (slice.key(), info)
                    })
                    .collect(),
            },
            am_policy_data: AmPolicyData {
                subsc_cats: vec![SUBSCRIPTION_CATEGORY.to_string()],
            },
            sm_policy_data: SmPolicyData {
                sm_policy_snssai_data: slices
                    .iter()
                    .map(|slice| {
                        let data = SmPolicySnssaiData {
                            snssai: slice.clone(),
                            sm_policy_dnn_data: BTreeMap::from([(
                                DNN.to_string(),
                                SmPolicyDnnData {
                                    dnn: DNN.to_string(),
                                },
                            )]),
                        };
                        (slice.key(), data)
                    })
                    .collect(),
            },
            flow_rules: vec![
                flow_rule(&default_slice, 128, 1),
                flow_rule(&second_slice, 127, 2),
            ],
            qos_flows: vec![
                qos_flow(&default_slice, 1, 8, "208 Mbps", "108 Mbps"),
                qos_flow(&second_slice, 2, 7, "407 Mbps", "207 Mbps"),
            ],
            charging_datas: vec![
                charging(&default_slice, None, 1, ChargingMethod::Offline, CHARGING_QUOTA),
                charging(&default_slice, Some(DNN), 1, ChargingMethod::Offline, CHARGING_QUOTA),
                charging(&second_slice, None, 2, ChargingMethod::Online, CHARGING_QUOTA),
                charging(&second_slice, Some(DNN), 2, ChargingMethod::Online, FLOW_CHARGING_QUOTA),
            ],
        }
    }
}

fn dnn_configuration() -> DnnConfiguration {
    DnnConfiguration {
        pdu_session_types: PduSessionTypes {
            default_session_type: PduSessionType::Ipv4,
            allowed_session_types: vec![PduSessionType::Ipv4],
        },
        ssc_modes: SscModes {
            default_ssc_mode: SscMode::Mode1,
            allowed_ssc_modes: vec![SscMode::Mode2, SscMode::Mode3],
        },
        qos_profile: Some(SubscribedDefaultQos {
            var5qi: FIVE_QI,
            arp: Arp {
                priority_level: ARP_PRIORITY_LEVEL,
                ..Default::default()
            },
            priority_level: ARP_PRIORITY_LEVEL,
        }),
        session_ambr: Some(Ambr {
            uplink: SESSION_AMBR.to_string(),
            downlink: SESSION_AMBR.to_string(),
        }),
    }
}

fn flow_rule(slice: &Snssai, precedence: i32, qos_ref: i32) -> FlowRule {
    FlowRule {
        filter: FLOW_FILTER.to_string(),
        precedence,
        snssai: slice.key(),
        dnn: DNN.to_string(),
        qos_ref,
    }
}

fn qos_flow(slice: &Snssai, qos_ref: i32, var5qi: i32, mbr: &str, gbr: &str) -> QosFlow {
    QosFlow {
        snssai: slice.key(),
        dnn: DNN.to_string(),
        qos_ref,
        var5qi,
        mbr_ul: mbr.to_string(),
        mbr_dl: mbr.to_string(),
        gbr_ul: gbr.to_string(),
        gbr_dl: gbr.to_string(),
    }
}

/// A slice-level entry when `dnn` is `None`, otherwise a flow-level entry on
/// [`FLOW_FILTER`].
fn charging(
    slice: &Snssai,
    dnn: Option<&str>,
    qos_ref: i32,
    method: ChargingMethod,
    quota: &str,
) -> ChargingData {
    ChargingData {
        snssai: slice.key(),
        dnn: dnn.unwrap_or_default().to_string(),
        qos_ref,
        filter: dnn.map(|_| FLOW_FILTER).unwrap_or_default().to_string(),
        charging_method: method,
        quota: quota.to_string(),
        unit_cost: UNIT_COST.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuthenticationSubscription, ChargingLevel};

    #[test]
    fn default_template_is_unassigned() {
        let template = SubscriberData::default_template();
        assert!(template.ue_id.is_empty());
        assert!(template.plmn_id.is_empty());
    }

    #[test]
    fn default_template_has_two_slices_on_internet() {
        let template = SubscriberData::default_template();
        let keys: Vec<_> = template
            .session_management_subscription_data
            .iter()
            .map(|slice| slice.single_nssai.key())
            .collect();
        assert_eq!(keys, ["01010203", "01112233"]);
        for slice in &template.session_management_subscription_data {
            assert!(slice.dnn_configurations.contains_key(DNN));
        }
        assert_eq!(
            template
                .smf_selection_subscription_data
                .subscribed_snssai_infos
                .len(),
            2
        );
    }

    #[test]
    fn default_template_charging_mixes_levels_and_methods() {
        let template = SubscriberData::default_template();
        let entries: Vec<_> = template
            .charging_datas
            .iter()
            .map(|entry| (entry.level().unwrap(), entry.charging_method))
            .collect();
        assert_eq!(
            entries,
            [
                (ChargingLevel::Slice, ChargingMethod::Offline),
                (ChargingLevel::Flow, ChargingMethod::Offline),
                (ChargingLevel::Slice, ChargingMethod::Online),
                (ChargingLevel::Flow, ChargingMethod::Online),
            ]
        );
        assert_eq!(template.charging_datas[3].quota, FLOW_CHARGING_QUOTA);
    }

    #[test]
    fn default_template_authentication_converts() {
        let template = SubscriberData::default_template();
        let auth =
            AuthenticationSubscription::from_web(&template.web_authentication_subscription)
                .unwrap();
        assert_eq!(auth.enc_topc_key, OPERATOR_KEY);
    }

    #[test]
    fn json_file_round_trips_the_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.json");
        let template = SubscriberData::default_template();
        std::fs::write(&path, serde_json::to_string_pretty(&template).unwrap()).unwrap();

        assert_eq!(SubscriberData::from_json_file(&path).unwrap(), template);
    }

    #[test]
    fn missing_json_file_is_a_serialization_error() {
        let err = SubscriberData::from_json_file("/nonexistent/template.json").unwrap_err();
        assert!(matches!(err, crate::Error::Serialization { .. }));
    }
}
