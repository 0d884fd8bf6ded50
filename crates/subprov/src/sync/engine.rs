use crate::{
    ChargingFragment, Collection, Decomposition, DocumentStore, Error, Filter, Fragment,
    QUOTA_FIELD, RATING_GROUP_FIELD, RechargeNotifier, Result, SubscriberData, TenantId,
    canonical_quota, decompose,
};
use serde_json::Value;

/// What a successful [`SyncEngine::synchronize`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Documents upserted or bulk-inserted.
    pub documents_written: usize,
    /// Documents removed by the replace-all steps.
    pub documents_deleted: usize,
    /// Recharge notifications fired (whether or not the notifier succeeded).
    pub notifications: usize,
}

/// Writes subscriber aggregates into a [`DocumentStore`].
///
/// The store offers no transaction across collections, so the order of the
/// steps below is the only consistency mechanism. The first failing step
/// aborts the call; steps already committed stay committed and a later
/// successful call for the same subscriber converges the store.
///
/// 1. Session management data: delete everything in the
///    `(ueId, servingPlmnId)` scope, then upsert one document per slice.
/// 2. Flow rules, then QoS flows: delete the scope, then bulk-insert. An empty
///    group is skipped entirely.
/// 3. Charging data: reconcile each entry against its stored predecessor
///    (rating group carry-forward, recharge notification), then upsert.
/// 4. Web authentication and authentication subscriptions.
/// 5. Access and mobility data.
/// 6. SMF selection data.
/// 7. AM policy and SM policy data.
///
/// Every upsert replaces the stored document in full. Calls for the same
/// subscriber must not run concurrently.
#[derive(Clone, Debug)]
pub struct SyncEngine<S, N> {
    store: S,
    notifier: N,
    tenant: TenantId,
}

impl<S, N> SyncEngine<S, N>
where
    S: DocumentStore,
    N: RechargeNotifier,
{
    pub const fn new(store: S, notifier: N, tenant: TenantId) -> Self {
        Self {
            store,
            notifier,
            tenant,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    pub const fn tenant(&self) -> &TenantId {
        &self.tenant
    }

    /// Provisions `data` as subscriber `ue_id` on serving network
    /// `serving_plmn_id`.
    ///
    /// The aggregate is decomposed before the first write, so a conversion
    /// failure leaves the store untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::Serialization`] if the aggregate cannot be decomposed or a
    ///   stored charging entry has an unreadable rating group.
    /// - [`Error::StoreRead`] / [`Error::StoreWrite`] for the first failing
    ///   store call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(ue_id = %ue_id, serving_plmn_id = %serving_plmn_id))
    )]
    pub fn synchronize(
        &self,
        data: &SubscriberData,
        ue_id: &str,
        serving_plmn_id: &str,
    ) -> Result<SyncReport> {
        let plan = decompose(data, ue_id, serving_plmn_id, &self.tenant)?;
        let mut report = SyncReport::default();

        self.replace_session_management(&plan, &mut report)?;
        self.replace_group(Collection::FlowRule, &plan.scope, &plan.flow_rules, &mut report)?;
        self.replace_group(Collection::QosFlow, &plan.scope, &plan.qos_flows, &mut report)?;

        for charging in &plan.charging {
            self.put_charging(ue_id, charging, &mut report)?;
        }

        for fragment in [
            &plan.web_authentication,
            &plan.authentication,
            &plan.access_and_mobility,
            &plan.smf_selection,
            &plan.am_policy,
            &plan.sm_policy,
        ] {
            self.put(fragment, fragment.document.clone())?;
            report.documents_written += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            written = report.documents_written,
            deleted = report.documents_deleted,
            notifications = report.notifications,
            "subscriber synchronized"
        );
        Ok(report)
    }

    fn replace_session_management(
        &self,
        plan: &Decomposition,
        report: &mut SyncReport,
    ) -> Result<()> {
        report.documents_deleted += self.delete_many(Collection::SessionManagementData, &plan.scope)?;
        for fragment in &plan.session_management {
            self.put(fragment, fragment.document.clone())?;
            report.documents_written += 1;
        }
        Ok(())
    }

    fn replace_group(
        &self,
        collection: Collection,
        scope: &Filter,
        fragments: &[Fragment],
        report: &mut SyncReport,
    ) -> Result<()> {
        if fragments.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(collection = %collection, "nothing to write");
            return Ok(());
        }

        report.documents_deleted += self.delete_many(collection, scope)?;

        let documents = fragments
            .iter()
            .map(|fragment| fragment.document.clone())
            .collect();
        report.documents_written += self
            .store
            .post_many(collection.name(), scope, documents)
            .map_err(|source| Error::StoreWrite {
                collection: collection.name(),
                source,
            })?;
        Ok(())
    }

    fn put_charging(
        &self,
        ue_id: &str,
        charging: &ChargingFragment,
        report: &mut SyncReport,
    ) -> Result<()> {
        let fragment = &charging.fragment;
        let collection = fragment.collection.name();
        let mut document = fragment.document.clone();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = %fragment.key,
            method = %charging.method,
            level = ?charging.level,
            "reconciling charging entry"
        );

        let previous = self
            .store
            .get_one(collection, &fragment.key)
            .map_err(|source| Error::StoreRead { collection, source })?;

        if let Some(previous) = previous {
            match previous.get(RATING_GROUP_FIELD) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    let rating_group = value.as_i64().ok_or_else(|| {
                        Error::serialization(format!(
                            "stored charging entry {} has non-integer rating group {value}",
                            fragment.key
                        ))
                    })?;
                    document.insert(RATING_GROUP_FIELD.to_string(), value.clone());

                    let previous_quota = previous.get(QUOTA_FIELD).map_or_else(String::new, quota_text);
                    if canonical_quota(&previous_quota) != charging.quota {
                        self.notify(ue_id, rating_group);
                        report.notifications += 1;
                    }
                }
            }
        }

        self.put(fragment, document)?;
        report.documents_written += 1;
        Ok(())
    }

    fn notify(&self, ue_id: &str, rating_group: i64) {
        #[cfg(feature = "tracing")]
        tracing::debug!(rating_group, "quota changed, sending recharge notification");

        if let Err(_e) = self.notifier.notify_recharge(ue_id, rating_group) {
            #[cfg(feature = "tracing")]
            tracing::warn!(rating_group, "ignoring failed recharge notification: {}", _e);
        }
    }

    fn put(&self, fragment: &Fragment, document: crate::Document) -> Result<()> {
        let collection = fragment.collection.name();
        self.store
            .put_one(collection, &fragment.key, document)
            .map_err(|source| Error::StoreWrite { collection, source })?;
        Ok(())
    }

    fn delete_many(&self, collection: Collection, scope: &Filter) -> Result<usize> {
        let collection = collection.name();
        self.store
            .delete_many(collection, scope)
            .map_err(|source| Error::StoreWrite { collection, source })
    }
}

fn quota_text(value: &Value) -> String {
    match value {
        Value::String(quota) => quota.clone(),
        Value::Number(quota) => quota.to_string(),
        _ => String::new(),
    }
}
