//! Port traits implemented by the infrastructure layer

pub mod secret_store;

pub use secret_store::{SecretItem, SecretStore};
