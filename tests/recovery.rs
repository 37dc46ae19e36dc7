//! Compact signatures and public key recovery tests.

use hex_literal::hex;
use koblitz256::ecdsa::{
    RecoverOptions, RecoveryId, SignOptions, Signature, SigningKey, VerifyingKey,
};
use koblitz256::Encoding;
use rand_core::OsRng;

const SECRET: [u8; 32] = hex!("5EC0A1AA3526F46E6251D8926922A4EF3D8B2198BFF538EC19C063638A5505B9");

fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&SECRET).unwrap()
}

#[test]
fn compact_base64_signature_recovers_the_key() {
    let key = signing_key();
    let options = SignOptions {
        compact: true,
        encoding: Some(Encoding::Base64),
        ..Default::default()
    };
    let (encoded, _) = key.sign_with_options(b"hello", &options).unwrap();

    // The pre-base64 blob is 65 bytes with a compressed-family prefix.
    let raw = Encoding::Base64.decode(&encoded).unwrap();
    assert_eq!(raw.len(), 65);
    assert!((31..=34).contains(&raw[0]));

    let recover_options = RecoverOptions {
        encoding: Some(Encoding::Base64),
        ..Default::default()
    };
    let recovered =
        VerifyingKey::recover_with_options(b"hello", &encoded, &recover_options).unwrap();
    assert_eq!(
        recovered.as_affine(),
        key.verifying_key().public_key().as_affine()
    );
    assert!(recovered.is_compressed());
    assert_eq!(
        recovered.to_sec1_bytes(),
        hex!("03091b1002f340c1f19286a46ad1c4626c686a185b2324777e5cb3f6e3b31e33b7")
    );
}

#[test]
fn compact_round_trip_preserves_recid_and_family() {
    let key = signing_key();
    let (signature, recovery_id) = key.sign_recoverable(b"hello").unwrap();

    let compact = signature.to_compact(true).unwrap();
    assert_eq!(compact[0], recovery_id.to_byte() + 27 + 4);

    let parsed = Signature::from_compact(&compact).unwrap();
    assert_eq!(parsed.recovery_id(), Some(recovery_id));
    assert_eq!(parsed.r(), signature.r());
    assert_eq!(parsed.s(), signature.s());
}

#[test]
fn uncompressed_family_marks_the_recovered_key() {
    let key = signing_key();
    let options = SignOptions {
        compact: true,
        compressed: Some(false),
        ..Default::default()
    };
    let (compact, _) = key.sign_with_options(b"hello", &options).unwrap();
    assert!((27..=30).contains(&compact[0]));

    let recovered =
        VerifyingKey::recover_with_options(b"hello", &compact, &Default::default()).unwrap();
    assert!(!recovered.is_compressed());
    assert_eq!(
        recovered.as_affine(),
        key.verifying_key().public_key().as_affine()
    );
}

#[test]
fn recovery_works_for_fresh_keys() {
    for _ in 0..4 {
        let key = SigningKey::random(&mut OsRng);
        let message = b"recoverable";
        let (signature, recovery_id) = key.sign_recoverable(message).unwrap();

        let recovered =
            VerifyingKey::recover_from_msg(message, &signature, recovery_id).unwrap();
        assert_eq!(
            recovered.as_affine(),
            key.verifying_key().public_key().as_affine()
        );
        assert_eq!(recovered.to_sec1_bytes(), key.verifying_key().to_sec1_bytes());
    }
}

#[test]
fn der_signature_recovers_with_an_explicit_id() {
    let key = signing_key();
    let (der, recovery_id) = key
        .sign_with_options(b"hello", &SignOptions::default())
        .unwrap();

    let options = RecoverOptions {
        recovery_id: Some(recovery_id),
        ..Default::default()
    };
    let recovered = VerifyingKey::recover_with_options(b"hello", &der, &options).unwrap();
    assert_eq!(
        recovered.as_affine(),
        key.verifying_key().public_key().as_affine()
    );

    // DER carries no recovery id, so recovery without one fails loudly.
    assert!(VerifyingKey::recover_with_options(b"hello", &der, &Default::default()).is_err());
}

#[test]
fn high_s_compact_signature_recovers_after_normalization() {
    // Recovery normalizes internally, flipping both s and the recovery
    // id, so an unnormalized compact signature still recovers the signer.
    let key = signing_key();
    let options = SignOptions {
        compact: true,
        normalize: false,
        ..Default::default()
    };
    let (compact, _) = key.sign_with_options(b"hello", &options).unwrap();
    assert!(Signature::from_compact(&compact).unwrap().is_high());

    let recovered =
        VerifyingKey::recover_with_options(b"hello", &compact, &Default::default()).unwrap();
    assert_eq!(
        recovered.as_affine(),
        key.verifying_key().public_key().as_affine()
    );
}

#[test]
fn out_of_range_recovery_ids_are_rejected() {
    assert!(RecoveryId::from_byte(4).is_none());

    // Prefix bytes outside 27–34 do not parse as compact signatures.
    let key = signing_key();
    let (signature, _) = key.sign_recoverable(b"hello").unwrap();
    let mut compact = signature.to_compact(true).unwrap();
    compact[0] = 26;
    assert!(Signature::from_compact(&compact).is_err());
}
