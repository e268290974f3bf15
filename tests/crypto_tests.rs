//! Integration tests for the SiteVault cipher codec.

use std::collections::HashSet;

use sitevault::crypto::{open, seal, NONCE_LEN, TAG_LEN};
use sitevault::errors::SiteVaultError;

// ---------------------------------------------------------------------------
// Round-trip
// ---------------------------------------------------------------------------

#[test]
fn seal_open_roundtrip() {
    let key = [0xABu8; 32];
    let plaintext = br#"{"work":{"github":{"site":"github.com","username":"alice","password":"p1"}}}"#;

    let blob = seal(&key, plaintext).expect("seal should succeed");
    assert_eq!(blob.len(), NONCE_LEN + plaintext.len() + TAG_LEN);

    let recovered = open(&key, &blob).expect("open should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn roundtrip_across_payload_sizes() {
    let key = [0x3Cu8; 32];
    for len in [0usize, 1, 15, 16, 17, 255, 4096] {
        let plaintext: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let blob = seal(&key, &plaintext).expect("seal");
        assert_eq!(open(&key, &blob).expect("open"), plaintext, "len {len}");
    }
}

// ---------------------------------------------------------------------------
// Nonces
// ---------------------------------------------------------------------------

#[test]
fn seal_produces_different_blobs_each_time() {
    let key = [0xCDu8; 32];
    let plaintext = b"same input";

    let b1 = seal(&key, plaintext).expect("seal 1");
    let b2 = seal(&key, plaintext).expect("seal 2");

    assert_ne!(b1, b2, "two seals of the same plaintext must differ");
}

#[test]
fn nonces_do_not_repeat_over_many_seals() {
    let key = [0x42u8; 32];
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let blob = seal(&key, b"payload").expect("seal");
        let nonce = blob[..NONCE_LEN].to_vec();
        assert!(seen.insert(nonce), "nonce reused");
    }
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn open_with_wrong_key_fails_authentication() {
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];

    let blob = seal(&key, b"TOP_SECRET").expect("seal");
    assert!(matches!(
        open(&wrong_key, &blob),
        Err(SiteVaultError::AuthenticationFailed)
    ));
}

#[test]
fn every_single_bit_flip_is_detected() {
    let key = [0x5Eu8; 32];
    let blob = seal(&key, b"bank: hunter2").expect("seal");

    for byte in 0..blob.len() {
        for bit in 0..8 {
            let mut tampered = blob.clone();
            tampered[byte] ^= 1 << bit;
            assert!(
                matches!(
                    open(&key, &tampered),
                    Err(SiteVaultError::AuthenticationFailed)
                ),
                "flip of byte {byte} bit {bit} went undetected"
            );
        }
    }
}

#[test]
fn truncated_blob_is_malformed() {
    let key = [0xAAu8; 32];
    for len in [0usize, 5, NONCE_LEN, NONCE_LEN + TAG_LEN - 1] {
        assert!(
            matches!(
                open(&key, &vec![0u8; len]),
                Err(SiteVaultError::MalformedBlob(n)) if n == len
            ),
            "len {len}"
        );
    }
}

#[test]
fn minimum_length_garbage_fails_authentication() {
    let key = [0xAAu8; 32];
    assert!(matches!(
        open(&key, &[0u8; NONCE_LEN + TAG_LEN]),
        Err(SiteVaultError::AuthenticationFailed)
    ));
}

#[test]
fn wrong_key_length_is_rejected() {
    for len in [0usize, 16, 24, 31, 33, 64] {
        let key = vec![0u8; len];
        assert!(matches!(
            seal(&key, b"x"),
            Err(SiteVaultError::InvalidKeyLength { expected: 32, actual }) if actual == len
        ));
        assert!(matches!(
            open(&key, &[0u8; 64]),
            Err(SiteVaultError::InvalidKeyLength { .. })
        ));
    }
}
