//! End-to-end tests for the Ed448 key facades over the default provider

use edkeys::api::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SIGNATURE_LENGTH};
use edkeys::prelude::*;
use proptest::prelude::*;

#[test]
fn generate_sign_verify_roundtrip() {
    let provider = GoldilocksProvider::new();
    let private = Ed448PrivateKey::generate(&provider).unwrap();
    let public = private.public_key();

    let signature = private.sign(b"the quick brown fox").unwrap();
    assert_eq!(signature.len(), SIGNATURE_LENGTH);
    assert!(public.verify(&signature, b"the quick brown fox").is_ok());
}

#[test]
fn empty_message_is_signable() {
    let provider = GoldilocksProvider::new();
    let private = Ed448PrivateKey::generate(&provider).unwrap();

    let signature = private.sign(b"").unwrap();
    assert!(private.public_key().verify(&signature, b"").is_ok());
}

#[test]
fn signatures_are_deterministic() {
    let provider = GoldilocksProvider::new();
    let private = Ed448PrivateKey::from_private_bytes(&provider, &[0x11; SECRET_KEY_LENGTH]).unwrap();

    assert_eq!(
        private.sign(b"repeatable").unwrap(),
        private.sign(b"repeatable").unwrap()
    );
}

#[test]
fn bit_flipped_signature_is_rejected() {
    let provider = GoldilocksProvider::new();
    let private = Ed448PrivateKey::generate(&provider).unwrap();
    let public = private.public_key();
    let signature = private.sign(b"payload").unwrap();

    for index in [0, SIGNATURE_LENGTH / 2, SIGNATURE_LENGTH - 1] {
        let mut tampered = signature.clone();
        tampered[index] ^= 0x80;
        assert_eq!(
            public.verify(&tampered, b"payload"),
            Err(Error::InvalidSignature)
        );
    }
}

#[test]
fn verification_fails_under_a_different_key() {
    let provider = GoldilocksProvider::new();
    let signer = Ed448PrivateKey::generate(&provider).unwrap();
    let other = Ed448PrivateKey::generate(&provider).unwrap();

    let signature = signer.sign(b"payload").unwrap();
    assert_eq!(
        other.public_key().verify(&signature, b"payload"),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn private_key_roundtrips_through_raw_bytes() {
    let provider = GoldilocksProvider::new();
    let private = Ed448PrivateKey::generate(&provider).unwrap();

    let seed = private.private_bytes_raw().unwrap();
    assert_eq!(seed.len(), SECRET_KEY_LENGTH);

    let reloaded = Ed448PrivateKey::from_private_bytes(&provider, &seed).unwrap();
    assert_eq!(reloaded.public_key(), private.public_key());
    assert_eq!(
        reloaded.sign(b"cross-check").unwrap(),
        private.sign(b"cross-check").unwrap()
    );
}

#[test]
fn public_key_roundtrips_through_raw_bytes() {
    let provider = GoldilocksProvider::new();
    let public = Ed448PrivateKey::generate(&provider).unwrap().public_key();

    let raw = public.public_bytes_raw();
    assert_eq!(raw.len(), PUBLIC_KEY_LENGTH);

    let reloaded = Ed448PublicKey::from_public_bytes(&provider, &raw).unwrap();
    assert_eq!(reloaded, public);
}

#[test]
fn distinct_generated_keys_differ() {
    let provider = GoldilocksProvider::new();
    let first = Ed448PrivateKey::generate(&provider).unwrap();
    let second = Ed448PrivateKey::generate(&provider).unwrap();

    assert_ne!(first.public_key(), second.public_key());
}

#[test]
fn wrong_length_bytes_are_rejected_with_lengths() {
    let provider = GoldilocksProvider::new();

    for len in [0usize, 32, 56, 58, 114] {
        let bytes = vec![1u8; len];
        let result = Ed448PublicKey::from_public_bytes(&provider, &bytes);
        assert!(
            matches!(result, Err(Error::InvalidLength { expected: 57, actual, .. }) if actual == len)
        );

        let result = Ed448PrivateKey::from_private_bytes(&provider, &bytes);
        assert!(
            matches!(result, Err(Error::InvalidLength { expected: 57, actual, .. }) if actual == len)
        );
    }
}

proptest! {
    #[test]
    fn any_message_signs_and_verifies(message in proptest::collection::vec(any::<u8>(), 0..512)) {
        let provider = GoldilocksProvider::new();
        let private = Ed448PrivateKey::from_private_bytes(&provider, &[0x21; SECRET_KEY_LENGTH]).unwrap();

        let signature = private.sign(&message).unwrap();
        prop_assert_eq!(signature.len(), SIGNATURE_LENGTH);
        prop_assert!(private.public_key().verify(&signature, &message).is_ok());
    }

    #[test]
    fn seed_roundtrip_preserves_the_key(seed in proptest::array::uniform32(any::<u8>())) {
        // Widen the 32 random bytes into a full 57-byte seed.
        let mut full = [0u8; SECRET_KEY_LENGTH];
        full[..32].copy_from_slice(&seed);
        full[32..].copy_from_slice(&seed[..25]);

        let provider = GoldilocksProvider::new();
        let private = Ed448PrivateKey::from_private_bytes(&provider, &full).unwrap();
        let raw = private.private_bytes_raw().unwrap();
        prop_assert_eq!(&raw[..], &full[..]);
    }

    #[test]
    fn a_signature_never_verifies_a_different_message(
        message in proptest::collection::vec(any::<u8>(), 1..128),
        flip in 0usize..128,
    ) {
        let provider = GoldilocksProvider::new();
        let private = Ed448PrivateKey::from_private_bytes(&provider, &[0x33; SECRET_KEY_LENGTH]).unwrap();
        let signature = private.sign(&message).unwrap();

        let mut other = message.clone();
        let index = flip % other.len();
        other[index] ^= 0x01;

        prop_assert_eq!(
            private.public_key().verify(&signature, &other),
            Err(Error::InvalidSignature)
        );
    }
}
