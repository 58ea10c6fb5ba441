//! End-to-end behaviour of the public sealing API.

use std::collections::VecDeque;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use keyseal::{
    open_api_key, seal_api_key, CryptoError, EntropySource, Padding, SealConfig, SealedApiKey,
    Sealer,
};
use proptest::prelude::*;

/// Hands out pre-recorded byte chunks, one per draw.
struct QueuedEntropy(VecDeque<Vec<u8>>);

impl QueuedEntropy {
    fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self(chunks.into())
    }
}

impl EntropySource for QueuedEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        let chunk = self
            .0
            .pop_front()
            .ok_or_else(|| CryptoError::EntropyUnavailable("queue exhausted".into()))?;
        dest.copy_from_slice(&chunk);
        Ok(())
    }
}

fn salt() -> Vec<u8> {
    (0x00u8..0x10).collect()
}

fn iv() -> Vec<u8> {
    (0x10u8..0x20).collect()
}

fn fast_config() -> SealConfig {
    SealConfig {
        kdf_iterations: 100,
        ..SealConfig::default()
    }
}

#[test]
fn fields_are_base64_with_expected_lengths() {
    let rec = seal_api_key("hunter2", "AKCp8jQ").unwrap();
    let salt = STANDARD.decode(&rec.salt).unwrap();
    let joined = STANDARD.decode(&rec.encrypted_value).unwrap();
    assert_eq!(salt.len(), 16);
    assert_eq!(joined.len(), 32);
}

#[test]
fn repeated_calls_differ() {
    let a = seal_api_key("hunter2", "AKCp8jQ").unwrap();
    let b = seal_api_key("hunter2", "AKCp8jQ").unwrap();
    assert_ne!(a.salt, b.salt);
    assert_ne!(a.encrypted_value, b.encrypted_value);
}

#[test]
fn fixed_entropy_is_deterministic() {
    let seal = || {
        let entropy = QueuedEntropy::new(vec![salt(), iv()]);
        Sealer::with_entropy(SealConfig::default(), entropy)
            .seal("hunter2", "AKCp8jQ")
            .unwrap()
    };
    let a = seal();
    let b = seal();
    assert_eq!(a, b);
    assert_eq!(a.encrypted_value, "EBESExQVFhcYGRobHB0eH0/03L31uP/EQ2spI7DJez8=");
    assert_eq!(a.salt, "AAECAwQFBgcICQoLDA0ODw==");
}

#[test]
fn iv_is_prepended_to_ciphertext() {
    let entropy = QueuedEntropy::new(vec![salt(), iv()]);
    let rec = Sealer::with_entropy(fast_config(), entropy)
        .seal("hunter2", "AKCp8jQ")
        .unwrap();
    let joined = STANDARD.decode(&rec.encrypted_value).unwrap();
    assert_eq!(&joined[..16], iv().as_slice());
}

#[test]
fn exhausted_entropy_surfaces_error() {
    let entropy = QueuedEntropy::new(vec![salt()]);
    let res = Sealer::with_entropy(fast_config(), entropy).seal("hunter2", "AKCp8jQ");
    assert!(matches!(res, Err(CryptoError::EntropyUnavailable(_))));
}

#[test]
fn json_shape_matches_record_convention() {
    let entropy = QueuedEntropy::new(vec![salt(), iv()]);
    let rec = Sealer::with_entropy(SealConfig::default(), entropy)
        .seal("hunter2", "AKCp8jQ")
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "encryptedValue": "EBESExQVFhcYGRobHB0eH0/03L31uP/EQ2spI7DJez8=",
            "salt": "AAECAwQFBgcICQoLDA0ODw==",
        })
    );
    assert_eq!(SealedApiKey::from_json(&rec.to_json().unwrap()).unwrap(), rec);
}

#[test]
fn open_api_key_recovers_secret() {
    let rec = seal_api_key("hunter2", "AKCp8jQ").unwrap();
    assert_eq!(open_api_key("hunter2", &rec).unwrap(), "AKCp8jQ");
}

#[test]
fn zero_padding_drops_trailing_nul_on_open() {
    let mut sealer = Sealer::new(fast_config());
    let rec = sealer.seal("hunter2", "key\0").unwrap();
    assert_eq!(sealer.open("hunter2", &rec).unwrap(), "key");
}

#[test]
fn pkcs7_padding_preserves_trailing_nul_on_open() {
    let cfg = SealConfig {
        padding: Padding::Pkcs7,
        ..fast_config()
    };
    let mut sealer = Sealer::new(cfg);
    let rec = sealer.seal("hunter2", "key\0").unwrap();
    assert_eq!(sealer.open("hunter2", &rec).unwrap(), "key\0");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sealed_lengths_hold_for_any_input(
        password in "[ -~]{1,32}",
        api_key in "\\PC{1,80}",
    ) {
        let mut sealer = Sealer::new(fast_config());
        let rec = sealer.seal(&password, &api_key).unwrap();

        let salt = STANDARD.decode(&rec.salt).unwrap();
        let joined = STANDARD.decode(&rec.encrypted_value).unwrap();
        prop_assert_eq!(salt.len(), 16);
        prop_assert_eq!(joined.len() % 16, 0);
        prop_assert!(joined.len() >= 32);
        prop_assert_eq!(joined.len(), 16 + api_key.len() + (16 - api_key.len() % 16));
    }

    #[test]
    fn open_inverts_seal_for_nul_free_keys(api_key in "[A-Za-z0-9+/=_-]{1,64}") {
        let mut sealer = Sealer::new(fast_config());
        let rec = sealer.seal("hunter2", &api_key).unwrap();
        prop_assert_eq!(sealer.open("hunter2", &rec).unwrap(), api_key);
    }
}
