//! Trait definitions for the edkeys ecosystem

pub mod provider;

pub use provider::{PrivateKeyHandle, Provider, PublicKeyHandle};
