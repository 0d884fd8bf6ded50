#![doc = include_str!("../README.md")]

mod batch;
mod decompose;
mod error;
#[cfg(test)]
mod fakes;
mod identifier;
mod model;
mod notify;
mod store;
mod sync;
mod template;
mod tenant;

pub use crate::batch::*;
pub use crate::decompose::*;
pub use crate::error::*;
pub use crate::identifier::*;
pub use crate::model::*;
pub use crate::notify::*;
pub use crate::store::*;
pub use crate::sync::*;
pub use crate::template::*;
pub use crate::tenant::*;
