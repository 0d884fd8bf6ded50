//! Error types for subscriber provisioning.
//!
//! This module defines the central [`Error`] enum shared by the identifier
//! generator, the record decomposer, the synchronization engine and the batch
//! driver.
//!
//! ## Error Cases
//! - `MalformedIdentifier`: The input does not look like `imsi-` followed by at
//!   least 15 digits.
//! - `Overflow`: The 10-digit subscriber number cannot be incremented.
//! - `StoreWrite` / `StoreRead`: A document-store call failed during a
//!   synchronization step.
//! - `Serialization`: The aggregate could not be converted into stored
//!   documents (or a stored document could not be read back).
//! - `TenantNotFound`: The named tenant has no record in the tenant collection.
//!
//! Identifier errors are fatal to a batch run since they indicate a
//! configuration mistake; everything else is counted per subscriber.

use crate::store::StoreError;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for subscriber provisioning.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The identifier does not match `imsi-` followed by 15 or more digits.
    #[error("malformed identifier {id:?}: {reason}")]
    MalformedIdentifier { id: String, reason: &'static str },

    /// The trailing subscriber number is already at `9999999999`.
    #[error("subscriber number overflow: cannot increment {id} beyond 9999999999")]
    Overflow { id: String },

    /// A write (put, delete or bulk insert) against a collection failed.
    #[error("write to {collection} failed: {source}")]
    StoreWrite {
        collection: &'static str,
        #[source]
        source: StoreError,
    },

    /// A lookup against a collection failed.
    #[error("read from {collection} failed: {source}")]
    StoreRead {
        collection: &'static str,
        #[source]
        source: StoreError,
    },

    /// Conversion between the in-memory aggregate and a stored document
    /// failed.
    #[error("serialization error: {context}")]
    Serialization { context: String },

    /// No tenant record exists for the given tenant name.
    #[error("tenant {name:?} not found in tenant data")]
    TenantNotFound { name: String },
}

impl Error {
    /// Returns `true` for errors that must stop a batch run rather than be
    /// counted against a single subscriber.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MalformedIdentifier { .. } | Self::Overflow { .. } | Self::TenantNotFound { .. }
        )
    }

    pub(crate) fn serialization(context: impl Into<String>) -> Self {
        Self::Serialization {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            context: err.to_string(),
        }
    }
}
