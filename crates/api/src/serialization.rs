//! Serialization selectors and their validity matrix.
//!
//! Keys are exported as an (encoding, format) pair: the encoding names the
//! outer container, the format names the structural shape inside it. Not
//! every pair is meaningful, and an invalid pair must be rejected before
//! any provider computation happens. The `validate_*` functions here are
//! that gate; the key facades call them first on every export.

use core::fmt;

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// The outer container of a serialized key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Fixed-length bytes with no container at all
    Raw,
    /// PEM armored text
    Pem,
    /// Binary DER
    Der,
    /// The OpenSSH wire/text container
    OpenSsh,
}

/// Structural shape for public key export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicFormat {
    /// The unstructured 57-byte encoded point
    Raw,
    /// RFC 5280 / RFC 8410 SubjectPublicKeyInfo
    SubjectPublicKeyInfo,
    /// OpenSSH public key layout
    OpenSsh,
}

/// Structural shape for private key export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivateFormat {
    /// The unstructured 57-byte seed
    Raw,
    /// RFC 5208 / RFC 8410 PKCS#8
    Pkcs8,
    /// OpenSSH private key layout
    OpenSsh,
}

/// Whether and how private bytes are encrypted on export.
///
/// `BestAvailable` leaves the cipher choice to the provider, which picks
/// the strongest scheme it can produce for the requested format.
#[derive(Clone)]
pub enum KeySerializationEncryption {
    /// Export private bytes unencrypted
    NoEncryption,
    /// Encrypt with the best scheme the provider supports
    BestAvailable { password: Zeroizing<Vec<u8>> },
}

impl KeySerializationEncryption {
    /// Build a `BestAvailable` configuration from a password.
    pub fn best_available(password: impl AsRef<[u8]>) -> Self {
        Self::BestAvailable {
            password: Zeroizing::new(password.as_ref().to_vec()),
        }
    }

    /// Whether this configuration requests encryption
    pub fn is_encrypted(&self) -> bool {
        !matches!(self, Self::NoEncryption)
    }

    /// The password, when encryption is requested
    pub fn password(&self) -> Option<&[u8]> {
        match self {
            Self::NoEncryption => None,
            Self::BestAvailable { password } => Some(password),
        }
    }
}

// Debug must never render the password
impl fmt::Debug for KeySerializationEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEncryption => f.write_str("NoEncryption"),
            Self::BestAvailable { .. } => f.write_str("BestAvailable"),
        }
    }
}

/// Check a public export selector pair against the validity matrix.
///
/// Valid pairs: (Raw, Raw), (Pem, SubjectPublicKeyInfo),
/// (Der, SubjectPublicKeyInfo), (OpenSsh, OpenSsh).
pub fn validate_public_export(encoding: Encoding, format: PublicFormat) -> Result<()> {
    match (encoding, format) {
        (Encoding::Raw, PublicFormat::Raw)
        | (Encoding::Pem, PublicFormat::SubjectPublicKeyInfo)
        | (Encoding::Der, PublicFormat::SubjectPublicKeyInfo)
        | (Encoding::OpenSsh, PublicFormat::OpenSsh) => Ok(()),
        (encoding, format) => Err(Error::UnsupportedFormat {
            context: "public key export",
            message: format!("{:?} encoding cannot carry {:?} format", encoding, format),
        }),
    }
}

/// Check a private export selector triple against the validity matrix.
///
/// Valid pairs: (Raw, Raw), (Pem, Pkcs8), (Der, Pkcs8), (Pem, OpenSsh).
/// Raw export cannot carry encryption, so a `BestAvailable` request with
/// Raw selectors fails with `InvalidParameter`.
pub fn validate_private_export(
    encoding: Encoding,
    format: PrivateFormat,
    encryption: &KeySerializationEncryption,
) -> Result<()> {
    match (encoding, format) {
        (Encoding::Raw, PrivateFormat::Raw) => {
            if encryption.is_encrypted() {
                return Err(Error::InvalidParameter {
                    context: "private key export",
                    message: "raw export cannot carry encryption".to_string(),
                });
            }
            Ok(())
        }
        (Encoding::Pem, PrivateFormat::Pkcs8)
        | (Encoding::Der, PrivateFormat::Pkcs8)
        | (Encoding::Pem, PrivateFormat::OpenSsh) => Ok(()),
        (encoding, format) => Err(Error::UnsupportedFormat {
            context: "private key export",
            message: format!("{:?} encoding cannot carry {:?} format", encoding, format),
        }),
    }
}
