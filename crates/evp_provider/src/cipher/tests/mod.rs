// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use super::*;
use crate::test_support::*;

/// Encrypts `data` with a fresh context.
pub(crate) fn encrypt(
    cipher: &OsslCipherDescriptor,
    key: &[u8],
    iv: Option<&[u8]>,
    data: &[u8],
) -> ProviderResult<Vec<u8>> {
    run(cipher, Direction::Encrypt, key, iv, data)
}

/// Decrypts `data` with a fresh context.
pub(crate) fn decrypt(
    cipher: &OsslCipherDescriptor,
    key: &[u8],
    iv: Option<&[u8]>,
    data: &[u8],
) -> ProviderResult<Vec<u8>> {
    run(cipher, Direction::Decrypt, key, iv, data)
}

fn run(
    cipher: &OsslCipherDescriptor,
    direction: Direction,
    key: &[u8],
    iv: Option<&[u8]>,
    data: &[u8],
) -> ProviderResult<Vec<u8>> {
    let mut ctx = CipherContext::new(cipher);
    ctx.set_key_length(key.len())?;
    ctx.init(direction, key, iv)?;
    let mut out = vec![0u8; data.len()];
    ctx.transform(data, &mut out)?;
    ctx.cleanup();
    Ok(out)
}

/// Encrypts then decrypts `plaintext` and checks both directions.
pub(crate) fn assert_round_trip(
    cipher: &OsslCipherDescriptor,
    key: &[u8],
    iv: Option<&[u8]>,
    plaintext: &[u8],
) {
    let ciphertext = encrypt(cipher, key, iv, plaintext).expect("encrypt");
    assert_eq!(ciphertext.len(), plaintext.len());
    if !plaintext.is_empty() {
        assert_ne!(ciphertext, plaintext, "{} left data unchanged", cipher.name());
    }
    let recovered = decrypt(cipher, key, iv, &ciphertext).expect("decrypt");
    assert_eq!(recovered, plaintext, "{} round trip", cipher.name());
}

/// Deterministic key or data pattern of `len` bytes.
pub(crate) fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}
