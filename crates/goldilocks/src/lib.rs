//! Default Ed448 provider backed by `ed448-goldilocks-plus`
//!
//! This crate supplies the concrete [`Provider`] implementation the key
//! facades delegate to. Curve arithmetic and deterministic RFC 8032
//! signatures come from `ed448-goldilocks-plus`; structured exports come
//! from the `pkcs8` crate family; randomness comes from the operating
//! system RNG.
//!
//! OpenSSH is a matrix-valid export shape, but OpenSSH defines no Ed448
//! key type, so this provider fails those exports with `NotImplemented`.

mod encoding;

use ed448_goldilocks_plus::{SecretKey, Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use zeroize::{Zeroize, Zeroizing};

use edkeys_api::error::{Error, Result};
use edkeys_api::serialization::{Encoding, KeySerializationEncryption, PrivateFormat, PublicFormat};
use edkeys_api::traits::{PrivateKeyHandle, Provider, PublicKeyHandle};
use edkeys_api::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};

/// The default Ed448 provider.
///
/// Stateless; construct once at process start and share by reference.
pub struct GoldilocksProvider;

impl GoldilocksProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoldilocksProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for GoldilocksProvider {
    fn ed448_supported(&self) -> bool {
        true
    }

    fn ed448_generate_key(&self) -> Result<Box<dyn PrivateKeyHandle>> {
        // Single draw from the OS RNG per generate call.
        let signing = SigningKey::generate(&mut OsRng);
        Ok(Box::new(GoldilocksPrivateKey { signing }))
    }

    fn ed448_load_public_bytes(&self, data: &[u8]) -> Result<Box<dyn PublicKeyHandle>> {
        if data.len() != PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidLength {
                context: "ed448 public key",
                expected: PUBLIC_KEY_LENGTH,
                actual: data.len(),
            });
        }
        let mut point = [0u8; PUBLIC_KEY_LENGTH];
        point.copy_from_slice(data);
        let verifying = VerifyingKey::from_bytes(&point).map_err(|_| Error::InvalidKey {
            context: "ed448 public key",
            message: "bytes do not encode a valid curve point".to_string(),
        })?;
        Ok(Box::new(GoldilocksPublicKey { verifying }))
    }

    fn ed448_load_private_bytes(&self, data: &[u8]) -> Result<Box<dyn PrivateKeyHandle>> {
        if data.len() != SECRET_KEY_LENGTH {
            return Err(Error::InvalidLength {
                context: "ed448 private key",
                expected: SECRET_KEY_LENGTH,
                actual: data.len(),
            });
        }
        let mut seed = [0u8; SECRET_KEY_LENGTH];
        seed.copy_from_slice(data);
        let signing = SigningKey::from(&SecretKey::from(seed));
        seed.zeroize();
        Ok(Box::new(GoldilocksPrivateKey { signing }))
    }
}

struct GoldilocksPublicKey {
    verifying: VerifyingKey,
}

impl GoldilocksPublicKey {
    fn raw(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        let bytes = self.verifying.to_bytes();
        let mut raw = [0u8; PUBLIC_KEY_LENGTH];
        raw.copy_from_slice(&bytes[..]);
        raw
    }
}

impl PublicKeyHandle for GoldilocksPublicKey {
    fn raw_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.raw()
    }

    fn export(&self, encoding: Encoding, format: PublicFormat) -> Result<Vec<u8>> {
        match (encoding, format) {
            (Encoding::Raw, PublicFormat::Raw) => Ok(self.raw().to_vec()),
            (Encoding::Der, PublicFormat::SubjectPublicKeyInfo) => encoding::spki_der(&self.raw()),
            (Encoding::Pem, PublicFormat::SubjectPublicKeyInfo) => encoding::spki_pem(&self.raw()),
            (Encoding::OpenSsh, PublicFormat::OpenSsh) => Err(Error::NotImplemented {
                feature: "OpenSSH serialization of Ed448 keys",
            }),
            _ => Err(Error::UnsupportedFormat {
                context: "ed448 public export",
                message: format!("{:?} encoding cannot carry {:?} format", encoding, format),
            }),
        }
    }

    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()> {
        // Every failure collapses to InvalidSignature; no oracle.
        if signature.len() != SIGNATURE_LENGTH {
            return Err(Error::InvalidSignature);
        }
        let signature = Signature::try_from(signature).map_err(|_| Error::InvalidSignature)?;
        self.verifying
            .verify_raw(&signature, data)
            .map_err(|_| Error::InvalidSignature)
    }
}

struct GoldilocksPrivateKey {
    signing: SigningKey,
}

impl GoldilocksPrivateKey {
    fn seed(&self) -> Zeroizing<[u8; SECRET_KEY_LENGTH]> {
        let bytes = self.signing.to_bytes();
        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        seed.copy_from_slice(&bytes[..]);
        seed
    }
}

impl PrivateKeyHandle for GoldilocksPrivateKey {
    fn public_key_handle(&self) -> Box<dyn PublicKeyHandle> {
        Box::new(GoldilocksPublicKey {
            verifying: self.signing.verifying_key(),
        })
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signature = self.signing.sign_raw(data);
        Ok(signature.to_bytes()[..].to_vec())
    }

    fn export(
        &self,
        encoding: Encoding,
        format: PrivateFormat,
        encryption: &KeySerializationEncryption,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let seed = self.seed();
        match (encoding, format) {
            (Encoding::Raw, PrivateFormat::Raw) => {
                if encryption.is_encrypted() {
                    return Err(Error::InvalidParameter {
                        context: "ed448 private export",
                        message: "raw export cannot carry encryption".to_string(),
                    });
                }
                Ok(Zeroizing::new(seed.to_vec()))
            }
            (Encoding::Der, PrivateFormat::Pkcs8) => match encryption.password() {
                None => encoding::pkcs8_der(&seed),
                Some(password) => encoding::pkcs8_encrypted_der(&seed, password),
            },
            (Encoding::Pem, PrivateFormat::Pkcs8) => match encryption.password() {
                None => encoding::pkcs8_pem(&seed),
                Some(password) => encoding::pkcs8_encrypted_pem(&seed, password),
            },
            (Encoding::Pem, PrivateFormat::OpenSsh) => Err(Error::NotImplemented {
                feature: "OpenSSH serialization of Ed448 keys",
            }),
            _ => Err(Error::UnsupportedFormat {
                context: "ed448 private export",
                message: format!("{:?} encoding cannot carry {:?} format", encoding, format),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
