//! Service layer

mod discovery_service;

pub use discovery_service::ServiceDiscovery;
