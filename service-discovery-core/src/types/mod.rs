//! Type definitions

mod account;
mod probe;
mod service_type;

pub use account::{Account, DEFAULT_RETRY_LIMIT};
pub use probe::{ProbeMethod, ProbeOutcome};
pub use service_type::{ServiceType, UnknownServiceType};
