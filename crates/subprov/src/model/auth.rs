//! Authentication subscription shapes.
//!
//! The provisioning input carries a [`WebAuthenticationSubscription`] as
//! entered in the web console. The control plane reads an
//! [`AuthenticationSubscription`] instead, so both are stored: the web form
//! verbatim and a converted copy.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Authentication subscription as entered by an operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAuthenticationSubscription {
    pub authentication_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_key: Option<PermanentKey>,
    pub sequence_number: String,
    #[serde(default)]
    pub authentication_management_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milenage: Option<Milenage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opc: Option<Opc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermanentKey {
    pub permanent_key_value: String,
    #[serde(default)]
    pub encryption_key: i32,
    #[serde(default)]
    pub encryption_algorithm: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milenage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<Op>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Op {
    pub op_value: String,
    #[serde(default)]
    pub encryption_key: i32,
    #[serde(default)]
    pub encryption_algorithm: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opc {
    pub opc_value: String,
    #[serde(default)]
    pub encryption_key: i32,
    #[serde(default)]
    pub encryption_algorithm: i32,
}

/// Authentication subscription as consumed by the control plane.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSubscription {
    pub authentication_method: String,
    pub enc_permanent_key: String,
    pub sequence_number: SequenceNumber,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authentication_management_field: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enc_opc_key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enc_topc_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceNumber {
    pub sqn: String,
}

impl AuthenticationSubscription {
    /// Converts the operator-facing form into the stored control-plane form.
    ///
    /// Exactly one of the Milenage OP value and the OPc value must be set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the permanent key is missing or
    /// empty, or if OP and OPc are both set or both empty.
    pub fn from_web(web: &WebAuthenticationSubscription) -> Result<Self> {
        let permanent_key = web
            .permanent_key
            .as_ref()
            .map(|key| key.permanent_key_value.as_str())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::serialization("authentication subscription has no permanent key"))?;

        let op = web
            .milenage
            .as_ref()
            .and_then(|milenage| milenage.op.as_ref())
            .map(|op| op.op_value.as_str())
            .unwrap_or_default();
        let opc = web
            .opc
            .as_ref()
            .map(|opc| opc.opc_value.as_str())
            .unwrap_or_default();

        match (op.is_empty(), opc.is_empty()) {
            (false, false) => {
                return Err(Error::serialization(
                    "OP and OPc can not be set at the same time",
                ));
            }
            (true, true) => {
                return Err(Error::serialization("one of OP or OPc must be set"));
            }
            _ => {}
        }

        Ok(Self {
            authentication_method: web.authentication_method.clone(),
            enc_permanent_key: permanent_key.to_string(),
            sequence_number: SequenceNumber {
                sqn: web.sequence_number.clone(),
            },
            authentication_management_field: web.authentication_management_field.clone(),
            enc_opc_key: opc.to_string(),
            enc_topc_key: op.to_string(),
        })
    }
}
