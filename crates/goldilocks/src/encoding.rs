//! RFC 8410 structured exports
//!
//! SubjectPublicKeyInfo and PKCS#8 layouts for Ed448, in DER and PEM,
//! built on the `pkcs8`/`der`/`spki` crate family. Only export lives
//! here; keys are loaded from raw bytes exclusively.

use pkcs8::der::asn1::{BitStringRef, OctetStringRef};
use pkcs8::der::{Document, Encode};
use pkcs8::{
    AlgorithmIdentifierRef, LineEnding, ObjectIdentifier, PrivateKeyInfo, SecretDocument,
    SubjectPublicKeyInfoRef,
};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use edkeys_api::error::{Error, Result};
use edkeys_api::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};

/// The OID for Ed448 as defined in RFC 8410 §2
pub(crate) const ALGORITHM_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.113");

/// The `AlgorithmIdentifier` for Ed448 as defined in RFC 8410 §2
pub(crate) const ALGORITHM_ID: AlgorithmIdentifierRef<'static> = AlgorithmIdentifierRef {
    oid: ALGORITHM_OID,
    parameters: None,
};

const PUBLIC_PEM_LABEL: &str = "PUBLIC KEY";
const PRIVATE_PEM_LABEL: &str = "PRIVATE KEY";
const ENCRYPTED_PRIVATE_PEM_LABEL: &str = "ENCRYPTED PRIVATE KEY";

fn ser_err(err: impl core::fmt::Display) -> Error {
    Error::SerializationError {
        context: "ed448 export",
        message: err.to_string(),
    }
}

fn spki_document(raw: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Document> {
    let spki = SubjectPublicKeyInfoRef {
        algorithm: ALGORITHM_ID,
        subject_public_key: BitStringRef::from_bytes(raw).map_err(ser_err)?,
    };
    Document::encode_msg(&spki).map_err(ser_err)
}

pub(crate) fn spki_der(raw: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Vec<u8>> {
    Ok(spki_document(raw)?.as_bytes().to_vec())
}

pub(crate) fn spki_pem(raw: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Vec<u8>> {
    let pem = spki_document(raw)?
        .to_pem(PUBLIC_PEM_LABEL, LineEnding::LF)
        .map_err(ser_err)?;
    Ok(pem.into_bytes())
}

// RFC 8410 wraps the seed in an inner OCTET STRING before it becomes the
// PKCS#8 privateKey field.
fn wrap_seed(seed: &[u8; SECRET_KEY_LENGTH]) -> Result<Zeroizing<Vec<u8>>> {
    let inner = OctetStringRef::new(seed).map_err(ser_err)?;
    Ok(Zeroizing::new(inner.to_der().map_err(ser_err)?))
}

pub(crate) fn pkcs8_der(seed: &[u8; SECRET_KEY_LENGTH]) -> Result<Zeroizing<Vec<u8>>> {
    let wrapped = wrap_seed(seed)?;
    let info = PrivateKeyInfo::new(ALGORITHM_ID, &wrapped);
    let document = SecretDocument::try_from(info).map_err(ser_err)?;
    Ok(Zeroizing::new(document.as_bytes().to_vec()))
}

pub(crate) fn pkcs8_pem(seed: &[u8; SECRET_KEY_LENGTH]) -> Result<Zeroizing<Vec<u8>>> {
    let wrapped = wrap_seed(seed)?;
    let info = PrivateKeyInfo::new(ALGORITHM_ID, &wrapped);
    let document = SecretDocument::try_from(info).map_err(ser_err)?;
    let pem = document
        .to_pem(PRIVATE_PEM_LABEL, LineEnding::LF)
        .map_err(ser_err)?;
    Ok(Zeroizing::new(pem.as_bytes().to_vec()))
}

pub(crate) fn pkcs8_encrypted_der(
    seed: &[u8; SECRET_KEY_LENGTH],
    password: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let wrapped = wrap_seed(seed)?;
    let info = PrivateKeyInfo::new(ALGORITHM_ID, &wrapped);
    let document = info.encrypt(OsRng, password).map_err(ser_err)?;
    Ok(Zeroizing::new(document.as_bytes().to_vec()))
}

pub(crate) fn pkcs8_encrypted_pem(
    seed: &[u8; SECRET_KEY_LENGTH],
    password: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let wrapped = wrap_seed(seed)?;
    let info = PrivateKeyInfo::new(ALGORITHM_ID, &wrapped);
    let document = info.encrypt(OsRng, password).map_err(ser_err)?;
    let pem = document
        .to_pem(ENCRYPTED_PRIVATE_PEM_LABEL, LineEnding::LF)
        .map_err(ser_err)?;
    Ok(Zeroizing::new(pem.as_bytes().to_vec()))
}
