//! Wire-level types for the DynECT REST API.

mod message;
mod response;
mod session;
mod zone;

pub use message::{Message, Severity};
pub use response::{ApiStatus, Envelope};
pub use session::{Credentials, SessionData};
pub use zone::Zone;
