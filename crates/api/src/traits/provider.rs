//! Provider capability traits for Ed448
//!
//! A provider owns the curve arithmetic, the structured byte encodings and
//! the random number generation. The key facades never touch key material
//! directly; they hold opaque handles produced by a provider and delegate
//! every cryptographic computation to them.
//!
//! Providers are injected at construction time. Callers pick a concrete
//! provider once at process start; nothing in this layer performs an
//! implicit global lookup.

use zeroize::Zeroizing;

use crate::error::Result;
use crate::serialization::{Encoding, KeySerializationEncryption, PrivateFormat, PublicFormat};
use crate::PUBLIC_KEY_LENGTH;

/// A cryptographic backend capable of Ed448 operations.
///
/// `ed448_supported` is a pure query with no side effects; it is safe to
/// call repeatedly and concurrently. The load/generate operations must not
/// be reached when it reports `false` — the facades check first and fail
/// with `UnsupportedAlgorithm`.
pub trait Provider: Send + Sync {
    /// Whether this provider can perform Ed448 operations at all
    fn ed448_supported(&self) -> bool;

    /// Generate a fresh key pair from the provider's secure random source.
    ///
    /// # Security Requirements
    ///
    /// Implementations must draw from a cryptographically secure RNG and
    /// must consume it exactly once per call.
    fn ed448_generate_key(&self) -> Result<Box<dyn PrivateKeyHandle>>;

    /// Load a public key from exactly the raw 57-byte encoded point.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLength`/`InvalidKey` error if the bytes are the
    /// wrong length or do not decode to a valid point.
    fn ed448_load_public_bytes(&self, data: &[u8]) -> Result<Box<dyn PublicKeyHandle>>;

    /// Load a private key from exactly the raw 57-byte seed.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLength`/`InvalidKey` error on malformed input.
    fn ed448_load_private_bytes(&self, data: &[u8]) -> Result<Box<dyn PrivateKeyHandle>>;
}

/// Provider-side handle to verification material.
///
/// Handles are immutable after construction and freely shareable across
/// threads; no operation takes `&mut self`.
pub trait PublicKeyHandle: Send + Sync {
    /// The raw 57-byte encoded point
    fn raw_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH];

    /// Serialize per the requested (encoding, format) pair.
    ///
    /// The facade validates the pair against the matrix before calling;
    /// implementations may still reject pairs they cannot produce.
    fn export(&self, encoding: Encoding, format: PublicFormat) -> Result<Vec<u8>>;

    /// Verify `signature` over the exact byte sequence `data`.
    ///
    /// # Security Requirements
    ///
    /// Must not weaken whatever constant-time guarantees the underlying
    /// arithmetic provides, and must not report why verification failed.
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()>;
}

/// Provider-side handle to signing material.
pub trait PrivateKeyHandle: Send + Sync {
    /// Derive the handle for the corresponding public key.
    ///
    /// Derivation is deterministic and cannot fail for a validly
    /// constructed handle.
    fn public_key_handle(&self) -> Box<dyn PublicKeyHandle>;

    /// Produce the deterministic Ed448 signature over `data`.
    ///
    /// No randomness is consumed; signing the same data twice yields
    /// identical bytes.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Serialize per the requested (encoding, format) pair, optionally
    /// encrypting the result.
    ///
    /// The returned buffer is zeroized on drop; it may contain the seed.
    fn export(
        &self,
        encoding: Encoding,
        format: PrivateFormat,
        encryption: &KeySerializationEncryption,
    ) -> Result<Zeroizing<Vec<u8>>>;
}
