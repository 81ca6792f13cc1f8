//! # edkeys
//!
//! A capability-checked Ed448 key management library.
//!
//! Curve arithmetic, structured byte encodings and random number generation
//! live behind a provider capability; this crate family supplies the key
//! abstraction, the capability-check policy and the serialization format
//! matrix on top of it.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `edkeys-api`: Error taxonomy, serialization selectors and provider traits
//! - `edkeys-asymmetric`: The `Ed448PublicKey` / `Ed448PrivateKey` facades
//! - `edkeys-goldilocks`: The default provider, backed by `ed448-goldilocks-plus`
//!
//! ## Example
//!
//! ```
//! use edkeys::prelude::*;
//!
//! # fn main() -> edkeys::api::Result<()> {
//! let provider = GoldilocksProvider::new();
//!
//! let private = Ed448PrivateKey::generate(&provider)?;
//! let signature = private.sign(b"attested message")?;
//!
//! let public = private.public_key();
//! public.verify(&signature, b"attested message")?;
//! # Ok(())
//! # }
//! ```

pub use edkeys_api as api;
pub use edkeys_asymmetric as asymmetric;
pub use edkeys_goldilocks as goldilocks;

/// Common imports for edkeys users
pub mod prelude {
    // Re-export error types
    pub use crate::api::error::{Error, Result};

    // Re-export serialization selectors
    pub use crate::api::serialization::{
        Encoding, KeySerializationEncryption, PrivateFormat, PublicFormat,
    };

    // Re-export provider traits
    pub use crate::api::traits::{PrivateKeyHandle, Provider, PublicKeyHandle};

    // Re-export the key facades and the default provider
    pub use crate::asymmetric::{Ed448PrivateKey, Ed448PublicKey};
    pub use crate::goldilocks::GoldilocksProvider;
}
