//! Ed448 key pair facades
//!
//! `Ed448PublicKey` and `Ed448PrivateKey` are capability-checked facades
//! over a [`Provider`]: each load/generate entry point first asks the
//! provider whether Ed448 is supported at all, and only then delegates
//! construction. Keys are immutable after construction and may be shared
//! freely across threads.

use std::sync::Arc;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use edkeys_api::error::{Error, Result};
use edkeys_api::serialization::{
    validate_private_export, validate_public_export, Encoding, KeySerializationEncryption,
    PrivateFormat, PublicFormat,
};
use edkeys_api::traits::{PrivateKeyHandle, Provider, PublicKeyHandle};
use edkeys_api::PUBLIC_KEY_LENGTH;

/// Check the provider capability before any construction attempt.
fn ensure_supported(provider: &dyn Provider, context: &'static str) -> Result<()> {
    if provider.ed448_supported() {
        Ok(())
    } else {
        Err(Error::UnsupportedAlgorithm {
            algorithm: "Ed448",
            context,
        })
    }
}

/// An Ed448 public key
///
/// Holds verification material behind an opaque provider handle. The raw
/// 57-byte point is cached at construction so that equality, hashing and
/// `public_bytes_raw` never need to consult the provider.
#[derive(Clone)]
pub struct Ed448PublicKey {
    handle: Arc<dyn PublicKeyHandle>,
    raw: [u8; PUBLIC_KEY_LENGTH],
}

impl Ed448PublicKey {
    /// Construct a key from exactly the raw 57-byte encoded point.
    ///
    /// This is the sole public constructor from external bytes.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` if the provider lacks Ed448 support
    /// - `InvalidLength`/`InvalidKey` if `data` is not a well-formed point
    pub fn from_public_bytes(provider: &dyn Provider, data: &[u8]) -> Result<Self> {
        ensure_supported(provider, "Ed448PublicKey::from_public_bytes")?;
        let handle = provider.ed448_load_public_bytes(data)?;
        Ok(Self::from_handle(handle))
    }

    pub(crate) fn from_handle(handle: Box<dyn PublicKeyHandle>) -> Self {
        let raw = handle.raw_bytes();
        Self {
            handle: Arc::from(handle),
            raw,
        }
    }

    /// The serialized bytes of the public key.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` if the (encoding, format) pair is outside the
    /// validity matrix; the provider is not consulted in that case.
    pub fn public_bytes(&self, encoding: Encoding, format: PublicFormat) -> Result<Vec<u8>> {
        validate_public_export(encoding, format)?;
        self.handle.export(encoding, format)
    }

    /// The raw bytes of the public key.
    ///
    /// Equivalent to `public_bytes(Raw, Raw)`; always succeeds for a
    /// validly constructed key.
    pub fn public_bytes_raw(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.raw
    }

    /// Verify `signature` over the exact byte sequence `data`.
    ///
    /// Succeeds silently when the signature is valid.
    ///
    /// # Errors
    ///
    /// `InvalidSignature` on any failure. The error carries no detail on
    /// whether the signature, the key or the data was at fault.
    pub fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()> {
        self.handle
            .verify(signature, data)
            .map_err(|_| Error::InvalidSignature)
    }
}

// Two keys are equal iff their raw bytes are identical, regardless of
// construction path. Comparison runs in constant time.
impl PartialEq for Ed448PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.raw[..].ct_eq(&other.raw[..]).into()
    }
}

impl Eq for Ed448PublicKey {}

impl core::hash::Hash for Ed448PublicKey {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl core::fmt::Debug for Ed448PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed448PublicKey")
            .field("algorithm", &"Ed448")
            .finish()
    }
}

/// An Ed448 private key
///
/// Holds signing material behind an opaque provider handle. The seed never
/// leaves the provider except through the explicit `private_bytes*`
/// exports.
#[derive(Clone)]
pub struct Ed448PrivateKey {
    handle: Arc<dyn PrivateKeyHandle>,
}

impl Ed448PrivateKey {
    /// Generate a fresh, cryptographically random key pair.
    ///
    /// # Errors
    ///
    /// `UnsupportedAlgorithm` if the provider lacks Ed448 support.
    pub fn generate(provider: &dyn Provider) -> Result<Self> {
        ensure_supported(provider, "Ed448PrivateKey::generate")?;
        let handle = provider.ed448_generate_key()?;
        Ok(Self {
            handle: Arc::from(handle),
        })
    }

    /// Construct a key from exactly the raw 57-byte seed.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAlgorithm` if the provider lacks Ed448 support
    /// - `InvalidLength`/`InvalidKey` if `data` is rejected by the provider
    pub fn from_private_bytes(provider: &dyn Provider, data: &[u8]) -> Result<Self> {
        ensure_supported(provider, "Ed448PrivateKey::from_private_bytes")?;
        let handle = provider.ed448_load_private_bytes(data)?;
        Ok(Self {
            handle: Arc::from(handle),
        })
    }

    /// The public key derived from this private key.
    ///
    /// Derivation is a pure function of the private material; repeated
    /// calls yield equal keys.
    pub fn public_key(&self) -> Ed448PublicKey {
        Ed448PublicKey::from_handle(self.handle.public_key_handle())
    }

    /// Sign `data`, producing the deterministic 114-byte Ed448 signature.
    ///
    /// Signing consumes no randomness and does not mutate the key; any
    /// message length is accepted, including empty.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.handle.sign(data)
    }

    /// The serialized bytes of the private key.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` for (encoding, format) pairs outside the
    ///   validity matrix
    /// - `InvalidParameter` if encryption is requested for a Raw export
    pub fn private_bytes(
        &self,
        encoding: Encoding,
        format: PrivateFormat,
        encryption: &KeySerializationEncryption,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate_private_export(encoding, format, encryption)?;
        self.handle.export(encoding, format, encryption)
    }

    /// The raw bytes of the private key.
    ///
    /// Equivalent to `private_bytes(Raw, Raw, NoEncryption)`.
    pub fn private_bytes_raw(&self) -> Result<Zeroizing<Vec<u8>>> {
        self.private_bytes(
            Encoding::Raw,
            PrivateFormat::Raw,
            &KeySerializationEncryption::NoEncryption,
        )
    }
}

// Debug must never render key material
impl core::fmt::Debug for Ed448PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed448PrivateKey")
            .field("algorithm", &"Ed448")
            .finish()
    }
}
