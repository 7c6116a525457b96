//! End-to-end pipeline scenarios: every {compress} x {key} configuration,
//! in memory and through disk.

use binstash_codec::{decode, encode, CodecError, Value};
use binstash_crypto::Key;
use proptest::prelude::*;

/// The classic fixture: a map paired with an empty sequence.
fn fixture() -> Value {
    Value::list([
        Value::map([
            (Value::Int(1), Value::Int(2)),
            (Value::Int(3), Value::Int(4)),
        ]),
        Value::list([]),
    ])
}

fn test_key() -> Key {
    Key::from_bytes([0x6B; 32])
}

#[test]
fn round_trip_all_configurations() {
    let value = fixture();
    let key = test_key();

    let plain = encode(&value, false, None, None).unwrap();
    let compressed = encode(&value, true, None, None).unwrap();
    let sealed = encode(&value, true, Some(&key), None).unwrap();

    // each configuration decodes back to the same value
    assert_eq!(
        decode::<Value>(Some(&plain), None, false, None).unwrap(),
        Some(value.clone())
    );
    assert_eq!(
        decode::<Value>(Some(&compressed), None, true, None).unwrap(),
        Some(value.clone())
    );
    assert_eq!(
        decode::<Value>(Some(&sealed), None, true, Some(&key)).unwrap(),
        Some(value)
    );

    // and the encoded bytes differ across configurations
    assert_ne!(plain, compressed);
    assert_ne!(plain, sealed);
    assert_ne!(compressed, sealed);
}

#[test]
fn encrypted_only_round_trip() {
    let value = fixture();
    let key = test_key();
    let blob = encode(&value, false, Some(&key), None).unwrap();
    assert_eq!(
        decode::<Value>(Some(&blob), None, false, Some(&key)).unwrap(),
        Some(value)
    );
}

#[test]
fn wrong_key_fails_closed() {
    let blob = encode(&fixture(), false, Some(&test_key()), None).unwrap();
    let other = Key::from_bytes([0x99; 32]);
    assert!(matches!(
        decode::<Value>(Some(&blob), None, false, Some(&other)),
        Err(CodecError::Crypto(_))
    ));
}

#[test]
fn flag_mismatch_fails_not_corrupts() {
    let value = fixture();
    let key = test_key();

    // encoded without a key, decoded with one: not a token
    let plain = encode(&value, false, None, None).unwrap();
    assert!(decode::<Value>(Some(&plain), None, false, Some(&key)).is_err());

    // encoded without compression, decoded expecting it: not a zstd stream
    assert!(matches!(
        decode::<Value>(Some(&plain), None, true, None),
        Err(CodecError::Decompress(_))
    ));
}

#[test]
fn disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stash.bin");
    let value = fixture();

    let returned = encode(&value, true, None, Some(&path)).unwrap();

    // file holds exactly the returned bytes, no extra header
    assert_eq!(std::fs::read(&path).unwrap(), returned);

    // decode by path ignores any in-memory data handed alongside
    let decoy = b"ignore me entirely";
    assert_eq!(
        decode::<Value>(Some(decoy), Some(&path), true, None).unwrap(),
        Some(value)
    );
}

#[test]
fn disk_round_trip_sealed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stash.sealed");
    let value = fixture();
    let key = test_key();

    encode(&value, true, Some(&key), Some(&path)).unwrap();
    assert_eq!(
        decode::<Value>(None, Some(&path), true, Some(&key)).unwrap(),
        Some(value)
    );
}

#[test]
fn missing_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never-written.bin");
    assert!(matches!(
        decode::<Value>(None, Some(&path), false, None),
        Err(CodecError::NotFound { .. })
    ));
}

#[test]
fn encode_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stash.bin");
    std::fs::write(&path, b"previous contents that are longer than the blob").unwrap();

    let value = Value::Int(12);
    let returned = encode(&value, false, None, Some(&path)).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), returned);
}

#[test]
fn write_failure_is_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    // directories are not writable as files
    let result = encode(&Value::Null, false, None, Some(dir.path()));
    assert!(matches!(result, Err(CodecError::Io { .. })));
}

#[test]
fn compression_helps_on_redundant_data() {
    let value = Value::Bytes(vec![0u8; 64 * 1024]);
    let plain = encode(&value, false, None, None).unwrap();
    let compressed = encode(&value, true, None, None).unwrap();
    assert!(compressed.len() < plain.len() / 10);
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
        "[a-z]{0,12}".prop_map(Value::Str),
        proptest::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Set),
            proptest::collection::vec((inner.clone(), inner), 0..4).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_arbitrary_values(value in arb_value(), compress in any::<bool>(), keyed in any::<bool>()) {
        let key = test_key();
        let key = keyed.then_some(&key);
        let blob = encode(&value, compress, key, None).unwrap();
        let back: Option<Value> = decode(Some(&blob), None, compress, key).unwrap();
        prop_assert_eq!(back, Some(value));
    }
}
