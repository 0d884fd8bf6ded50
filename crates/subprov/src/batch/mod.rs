mod driver;
mod summary;

pub use driver::*;
pub use summary::*;
