mod error;
mod filter;
mod interface;
mod memory;

pub use error::*;
pub use filter::*;
pub use interface::*;
pub use memory::*;
