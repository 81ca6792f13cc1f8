//! Public API traits and types for the edkeys library
//!
//! This crate provides the public API surface for the edkeys ecosystem:
//! the error taxonomy, the serialization selectors with their validity
//! matrix, and the provider capability traits that concrete backends
//! implement.

pub mod error;
pub mod serialization;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use serialization::{Encoding, KeySerializationEncryption, PrivateFormat, PublicFormat};
pub use traits::{PrivateKeyHandle, Provider, PublicKeyHandle};

/// Length of a raw Ed448 public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 57;

/// Length of a raw Ed448 private key seed in bytes
pub const SECRET_KEY_LENGTH: usize = 57;

/// Length of an Ed448 signature in bytes
pub const SIGNATURE_LENGTH: usize = 114;
