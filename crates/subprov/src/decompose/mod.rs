//! Subscriber aggregate to per-collection document fragments.
//!
//! A subscriber is never stored as one document. [`decompose()`] maps a
//! [`SubscriberData`](crate::SubscriberData) onto the collections the control
//! plane reads, attaching to each document its composite key and the tenant
//! scoping tag.

mod collection;
mod fragment;
mod split;

pub use collection::*;
pub use fragment::*;
pub use split::*;
