mod auth;
mod charging;
mod mobility;
mod policy;
mod session;
mod snssai;
mod subscriber;

pub use auth::*;
pub use charging::*;
pub use mobility::*;
pub use policy::*;
pub use session::*;
pub use snssai::*;
pub use subscriber::*;
