//! Domain layer for the chained grant.

pub mod error;
pub mod local_client;
pub mod scope;
pub mod service;

pub use error::DomainError;
pub use local_client::ChainedGrantLocalClient;
pub use service::Service;
