//! Tenant scoping.
//!
//! Every stored document carries the identifier of the tenant that owns it.
//! The identifier is passed explicitly to the decomposer and the engine rather
//! than held in process-wide state, so one process can provision for several
//! tenants.

use crate::{Collection, DocumentStore, Error, Filter, Result, TENANT_FIELD};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Field holding a tenant's display name in the tenant collection.
pub const TENANT_NAME_FIELD: &str = "tenantName";

/// Tenant name provisioned by default installations.
pub const ADMIN_TENANT: &str = "admin";

/// Opaque tenant identifier attached to every provisioned document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Looks up the identifier of the tenant named `name`.
///
/// # Errors
///
/// - [`Error::StoreRead`] if the lookup fails.
/// - [`Error::TenantNotFound`] if no tenant has that name.
/// - [`Error::Serialization`] if the record has no string `tenantId`.
pub fn resolve_tenant(store: &impl DocumentStore, name: &str) -> Result<TenantId> {
    let collection = Collection::TenantData.name();
    let record = store
        .get_one(collection, &Filter::new().with(TENANT_NAME_FIELD, name))
        .map_err(|source| Error::StoreRead { collection, source })?
        .ok_or_else(|| Error::TenantNotFound {
            name: name.to_string(),
        })?;

    let id = record
        .get(TENANT_FIELD)
        .and_then(|value| value.as_str())
        .ok_or_else(|| {
            Error::serialization(format!("tenant {name:?} has no string {TENANT_FIELD}"))
        })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(tenant = name, tenant_id = id, "resolved tenant");
    Ok(TenantId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde_json::json;

    fn seed(store: &MemoryStore, record: serde_json::Value) {
        let serde_json::Value::Object(doc) = record else {
            panic!("not an object");
        };
        store
            .put_one(Collection::TenantData.name(), &Filter::new(), doc)
            .unwrap();
    }

    #[test]
    fn resolves_tenant_id_by_name() {
        let store = MemoryStore::new();
        seed(&store, json!({"tenantName": "admin", "tenantId": "t-123"}));
        assert_eq!(
            resolve_tenant(&store, ADMIN_TENANT).unwrap(),
            TenantId::new("t-123")
        );
    }

    #[test]
    fn missing_tenant_is_reported() {
        let store = MemoryStore::new();
        match resolve_tenant(&store, "admin") {
            Err(Error::TenantNotFound { name }) => assert_eq!(name, "admin"),
            other => panic!("expected TenantNotFound, got {other:?}"),
        }
    }

    #[test]
    fn non_string_tenant_id_is_rejected() {
        let store = MemoryStore::new();
        seed(&store, json!({"tenantName": "admin", "tenantId": 7}));
        assert!(matches!(
            resolve_tenant(&store, "admin"),
            Err(Error::Serialization { .. })
        ));
    }
}
