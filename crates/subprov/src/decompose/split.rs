use super::{
    ChargingFragment, Collection, Decomposition, Fragment, QUOTA_FIELD, SERVING_PLMN_FIELD,
    TENANT_FIELD, UE_ID_FIELD,
};
use crate::{
    AuthenticationSubscription, ChargingData, ChargingLevel, Document, Error, Filter, Result,
    SmPolicyData, SubscriberData, TenantId, canonical_quota,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Separator the document encoding reserves inside field names.
pub const KEY_SEPARATOR: char = '.';
/// Substitute written in place of [`KEY_SEPARATOR`].
pub const KEY_SEPARATOR_ESCAPE: char = '_';

/// Replaces the document encoding's field separator in a data network name
/// used as a mapping key.
pub fn escape_dnn_key(dnn: &str) -> String {
    dnn.replace(KEY_SEPARATOR, &KEY_SEPARATOR_ESCAPE.to_string())
}

/// Splits a subscriber aggregate into per-collection fragments.
///
/// The mapping is pure: it performs no I/O and produces the same fragments for
/// the same input. Every document carries `tenantId` and its key fields.
///
/// | Collection                     | Key                                        |
/// |--------------------------------|--------------------------------------------|
/// | authentication, web auth       | `ueId`                                     |
/// | AM data, SMF selection         | `ueId`, `servingPlmnId`                    |
/// | SM data (one per slice)        | `ueId`, `servingPlmnId`, `snssai`          |
/// | AM policy, SM policy           | `ueId`                                     |
/// | flow rules, QoS flows          | `ueId`, `servingPlmnId`                    |
/// | charging (slice level)         | scope + `snssai`, `qosRef`, empty `dnn`/`filter` |
/// | charging (flow level)          | scope + `snssai`, `dnn`, `qosRef`, `filter` |
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the authentication subscription cannot
/// be converted, a charging entry has only one of `dnn`/`filter`, escaped SM
/// policy keys collide, or a part of the aggregate does not serialize to a
/// JSON object.
pub fn decompose(
    data: &SubscriberData,
    ue_id: &str,
    serving_plmn_id: &str,
    tenant: &TenantId,
) -> Result<Decomposition> {
    let ue_key = Filter::new().with(UE_ID_FIELD, ue_id);
    let scope = ue_key.clone().with(SERVING_PLMN_FIELD, serving_plmn_id);
    let tag = |mut document: Document, key: &Filter| {
        key.overlay(&mut document);
        document.insert(TENANT_FIELD.to_string(), Value::from(tenant.as_str()));
        document
    };
    let fragment = |collection, key: Filter, document: Document| Fragment {
        document: tag(document, &key),
        collection,
        key,
    };

    let authentication = AuthenticationSubscription::from_web(&data.web_authentication_subscription)?;

    let session_management = data
        .session_management_subscription_data
        .iter()
        .map(|slice| -> Result<Fragment> {
            let key = scope
                .clone()
                .with("snssai", serde_json::to_value(&slice.single_nssai)?);
            Ok(fragment(
                Collection::SessionManagementData,
                key,
                to_document(slice)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let flow_rules = data
        .flow_rules
        .iter()
        .map(|rule| -> Result<Fragment> {
            Ok(fragment(
                Collection::FlowRule,
                scope.clone(),
                to_document(rule)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let qos_flows = data
        .qos_flows
        .iter()
        .map(|flow| -> Result<Fragment> {
            Ok(fragment(
                Collection::QosFlow,
                scope.clone(),
                to_document(flow)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let charging = data
        .charging_datas
        .iter()
        .map(|entry| -> Result<ChargingFragment> {
            let level = entry.level()?;
            let quota = entry.persisted_quota();
            let mut document = to_document(entry)?;
            document.insert(QUOTA_FIELD.to_string(), Value::from(quota));
            Ok(ChargingFragment {
                fragment: fragment(
                    Collection::ChargingData,
                    charging_key(&scope, entry, level),
                    document,
                ),
                method: entry.charging_method,
                level,
                quota: canonical_quota(quota),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Decomposition {
        session_management,
        flow_rules,
        qos_flows,
        charging,
        web_authentication: fragment(
            Collection::WebAuthenticationSubscription,
            ue_key.clone(),
            to_document(&data.web_authentication_subscription)?,
        ),
        authentication: fragment(
            Collection::AuthenticationSubscription,
            ue_key.clone(),
            to_document(&authentication)?,
        ),
        access_and_mobility: fragment(
            Collection::AccessAndMobilityData,
            scope.clone(),
            to_document(&data.access_and_mobility_subscription_data)?,
        ),
        smf_selection: fragment(
            Collection::SmfSelectionData,
            scope.clone(),
            to_document(&data.smf_selection_subscription_data)?,
        ),
        am_policy: fragment(
            Collection::AmPolicyData,
            ue_key.clone(),
            to_document(&data.am_policy_data)?,
        ),
        sm_policy: fragment(
            Collection::SmPolicyData,
            ue_key,
            to_document(&escape_sm_policy(&data.sm_policy_data)?)?,
        ),
        scope,
    })
}

fn charging_key(scope: &Filter, entry: &ChargingData, level: ChargingLevel) -> Filter {
    let key = scope.clone().with("snssai", entry.snssai.as_str());
    match level {
        ChargingLevel::Flow => key
            .with("dnn", entry.dnn.as_str())
            .with("qosRef", entry.qos_ref)
            .with("filter", entry.filter.as_str()),
        ChargingLevel::Slice => key
            .with("qosRef", entry.qos_ref)
            .with("dnn", "")
            .with("filter", ""),
    }
}

fn escape_sm_policy(policy: &SmPolicyData) -> Result<SmPolicyData> {
    let mut escaped = policy.clone();
    for (slice, snssai_data) in &mut escaped.sm_policy_snssai_data {
        let mut dnn_data = BTreeMap::new();
        for (dnn, data) in core::mem::take(&mut snssai_data.sm_policy_dnn_data) {
            let key = escape_dnn_key(&dnn);
            if dnn_data.insert(key.clone(), data).is_some() {
                return Err(Error::serialization(format!(
                    "SM policy for slice {slice} has colliding data network keys after escaping: {key}"
                )));
            }
        }
        snssai_data.sm_policy_dnn_data = dnn_data;
    }
    Ok(escaped)
}

fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(document) => Ok(document),
        other => Err(Error::serialization(format!(
            "expected a document, got {other}"
        ))),
    }
}
