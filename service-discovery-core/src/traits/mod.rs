//! Transport abstraction trait definition

mod transport;

pub use transport::HttpTransport;
