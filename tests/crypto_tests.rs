// tests/crypto_tests.rs
use aes_udf::consts::{BLOCK_SIZE, VALID_KEY_LENGTHS};
use aes_udf::error::CoreError;
use aes_udf::{decrypt_to_vec, encrypt_to_vec};
use rand::RngCore;

fn random_key(len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    rand::rng().fill_bytes(&mut key);
    key
}

#[test]
fn test_roundtrip_all_key_sizes_and_lengths() {
    for key_len in VALID_KEY_LENGTHS {
        let key = random_key(key_len);
        for pt_len in [0, 1, 15, 16, 17, 1000] {
            let plaintext: Vec<u8> = (0..pt_len).map(|i| (i % 251) as u8).collect();

            let ciphertext = encrypt_to_vec(&plaintext, &key).unwrap();
            let decrypted = decrypt_to_vec(&ciphertext, &key).unwrap();

            assert_eq!(plaintext, decrypted, "key_len {key_len}, pt_len {pt_len}");
        }
    }
}

#[test]
fn test_ciphertext_is_always_padded_and_block_aligned() {
    let key = random_key(16);
    for pt_len in [0, 1, 15, 16, 17, 31, 32, 33, 1000] {
        let ciphertext = encrypt_to_vec(&vec![0x42u8; pt_len], &key).unwrap();
        assert_eq!(ciphertext.len() % BLOCK_SIZE, 0, "pt_len {pt_len}");
        assert!(ciphertext.len() >= BLOCK_SIZE, "pt_len {pt_len}");
        // exactly one block of headroom, truncated to what padding produced
        assert_eq!(ciphertext.len(), (pt_len / BLOCK_SIZE + 1) * BLOCK_SIZE);
    }
}

#[test]
fn test_invalid_key_lengths_rejected() {
    for key_len in [0, 1, 8, 15, 17, 20, 33] {
        let key = vec![0u8; key_len];

        let enc = encrypt_to_vec(b"payload", &key);
        assert_eq!(enc, Err(CoreError::InvalidKeyLength(key_len)));

        let dec = decrypt_to_vec(&[0u8; 32], &key);
        assert_eq!(dec, Err(CoreError::InvalidKeyLength(key_len)));
    }
}

#[test]
fn test_malformed_ciphertext_length_rejected() {
    let key = random_key(16);
    for ct_len in [1, 15, 17, 31, 100] {
        let result = decrypt_to_vec(&vec![0u8; ct_len], &key);
        assert_eq!(result, Err(CoreError::MalformedCiphertext(ct_len)));
    }
    // empty is malformed too, not an empty plaintext
    assert_eq!(
        decrypt_to_vec(&[], &key),
        Err(CoreError::MalformedCiphertext(0))
    );
}

#[test]
fn test_garbage_last_block_fails_padding() {
    // fixed key: with this exact corruption the final decrypted byte is
    // 0x52, outside the valid 1..=16 pad range
    let key = [b'k'; 32];
    let mut ciphertext = encrypt_to_vec(b"sixteen byte msg", &key).unwrap();

    // flip a bit in the final block — padding validation must catch it
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;

    let result = decrypt_to_vec(&ciphertext, &key);
    assert_eq!(result, Err(CoreError::BadPadding));
}

#[test]
fn test_wrong_key_rejected_by_padding() {
    // deterministic variant lives in vector_tests; this covers random keys
    // where a lucky valid pad is possible but vanishingly rare per pair
    let key1 = random_key(16);
    let mut key2 = key1.clone();
    key2[0] ^= 0xFF;

    let ciphertext = encrypt_to_vec(b"attack at dawn", &key1).unwrap();
    match decrypt_to_vec(&ciphertext, &key2) {
        Err(CoreError::BadPadding) => {}
        // ~1/256 of wrong keys decode to *some* valid pad; just never ours
        Ok(plaintext) => assert_ne!(plaintext, b"attack at dawn"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ecb_determinism_identical_blocks() {
    let key = random_key(16);
    let block = [0x5Au8; BLOCK_SIZE];
    let two_blocks: Vec<u8> = [block, block].concat();

    let ciphertext = encrypt_to_vec(&two_blocks, &key).unwrap();
    assert_eq!(
        ciphertext[..BLOCK_SIZE],
        ciphertext[BLOCK_SIZE..2 * BLOCK_SIZE],
        "identical plaintext blocks must encrypt identically under ECB"
    );

    // and the whole call is deterministic: same inputs, same output
    assert_eq!(ciphertext, encrypt_to_vec(&two_blocks, &key).unwrap());
}

#[test]
fn test_empty_plaintext_roundtrip_is_one_block() {
    let key = random_key(24);
    let ciphertext = encrypt_to_vec(&[], &key).unwrap();
    assert_eq!(ciphertext.len(), BLOCK_SIZE);

    let decrypted = decrypt_to_vec(&ciphertext, &key).unwrap();
    assert!(decrypted.is_empty());
}
