//! Asymmetric key facades
//!
//! This crate implements the public-facing key types on top of the
//! provider capability defined in `edkeys-api`. The facades own input
//! validation, format-matrix resolution and uniform error surfacing;
//! every cryptographic computation is delegated to the provider.

pub mod ed448;

pub use ed448::{Ed448PrivateKey, Ed448PublicKey};
