// Copyright (C) Microsoft Corporation. All rights reserved.

//! Provider registry.
//!
//! One zero-argument accessor per algorithm variant. Each returns the
//! process-wide descriptor for that algorithm, built on first access, or
//! `None` when the linked OpenSSL cannot provide it. `None` means
//! "unsupported here": callers fall back to another provider or report the
//! algorithm as unavailable.
//!
//! Repeated calls return the same descriptor.

use std::sync::OnceLock;

use super::*;

/// Cipher descriptor served by this provider.
pub type OsslCipherDescriptor = CipherDescriptor<OsslCipher>;

/// Digest descriptor served by this provider.
pub type OsslDigestDescriptor = DigestDescriptor<OsslDigest>;

fn build_cipher(kind: CipherKind) -> Option<OsslCipherDescriptor> {
    let method = OsslCipher::for_kind(kind)?;
    CipherBuilder::new(kind, kind.block_size(), kind.key_len())
        .set_iv_length(kind.iv_len())
        .set_mode(kind.mode())
        .set_flags(kind.flags())
        .build(method)
        .ok()
}

fn build_digest(kind: DigestKind) -> Option<OsslDigestDescriptor> {
    let method = OsslDigest::for_kind(kind)?;
    DigestBuilder::new(kind, kind.digest_len(), kind.block_len())
        .build(method)
        .ok()
}

macro_rules! cipher_accessor {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        pub fn $name() -> Option<&'static OsslCipherDescriptor> {
            static DESCRIPTOR: OnceLock<Option<OsslCipherDescriptor>> = OnceLock::new();
            DESCRIPTOR.get_or_init(|| build_cipher($kind)).as_ref()
        }
    };
}

macro_rules! digest_accessor {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        pub fn $name() -> Option<&'static OsslDigestDescriptor> {
            static DESCRIPTOR: OnceLock<Option<OsslDigestDescriptor>> = OnceLock::new();
            DESCRIPTOR.get_or_init(|| build_digest($kind)).as_ref()
        }
    };
}

cipher_accessor!(
    /// Triple DES in CBC mode: 8-byte blocks, 24-byte key, 8-byte IV.
    des_ede3_cbc => CipherKind::DesEde3Cbc
);
cipher_accessor!(
    /// Single DES in CBC mode: 8-byte blocks, key and IV.
    des_cbc => CipherKind::DesCbc
);
cipher_accessor!(
    /// AES-128 in CBC mode.
    aes_128_cbc => CipherKind::Aes128Cbc
);
cipher_accessor!(
    /// AES-192 in CBC mode.
    aes_192_cbc => CipherKind::Aes192Cbc
);
cipher_accessor!(
    /// AES-256 in CBC mode.
    aes_256_cbc => CipherKind::Aes256Cbc
);
cipher_accessor!(
    /// RC2 in CBC mode with a 128-bit key.
    rc2_cbc => CipherKind::Rc2Cbc
);
cipher_accessor!(
    /// RC2 in CBC mode with a 40-bit key.
    rc2_40_cbc => CipherKind::Rc2_40Cbc
);
cipher_accessor!(
    /// RC2 in CBC mode with a 64-bit key.
    rc2_64_cbc => CipherKind::Rc2_64Cbc
);
cipher_accessor!(
    /// RC4 stream cipher. Default key length 16; variable.
    rc4 => CipherKind::Rc4
);
cipher_accessor!(
    /// RC4 stream cipher with a 40-bit default key; variable.
    rc4_40 => CipherKind::Rc4_40
);

/// Camellia-128 in CBC mode. Not offered by this provider.
pub fn camellia_128_cbc() -> Option<&'static OsslCipherDescriptor> {
    None
}

/// Camellia-192 in CBC mode. Not offered by this provider.
pub fn camellia_192_cbc() -> Option<&'static OsslCipherDescriptor> {
    None
}

/// Camellia-256 in CBC mode. Not offered by this provider.
pub fn camellia_256_cbc() -> Option<&'static OsslCipherDescriptor> {
    None
}

digest_accessor!(md2 => DigestKind::Md2);
digest_accessor!(md4 => DigestKind::Md4);
digest_accessor!(md5 => DigestKind::Md5);
digest_accessor!(sha1 => DigestKind::Sha1);
digest_accessor!(sha256 => DigestKind::Sha256);

/// Dispatches to the accessor for `kind`.
pub fn cipher_by_kind(kind: CipherKind) -> Option<&'static OsslCipherDescriptor> {
    match kind {
        CipherKind::DesEde3Cbc => des_ede3_cbc(),
        CipherKind::DesCbc => des_cbc(),
        CipherKind::Aes128Cbc => aes_128_cbc(),
        CipherKind::Aes192Cbc => aes_192_cbc(),
        CipherKind::Aes256Cbc => aes_256_cbc(),
        CipherKind::Rc2Cbc => rc2_cbc(),
        CipherKind::Rc2_40Cbc => rc2_40_cbc(),
        CipherKind::Rc2_64Cbc => rc2_64_cbc(),
        CipherKind::Rc4 => rc4(),
        CipherKind::Rc4_40 => rc4_40(),
        CipherKind::Camellia128Cbc => camellia_128_cbc(),
        CipherKind::Camellia192Cbc => camellia_192_cbc(),
        CipherKind::Camellia256Cbc => camellia_256_cbc(),
    }
}

/// Looks a cipher up by name, for example `"aes-128-cbc"`.
pub fn cipher_by_name(name: &str) -> Option<&'static OsslCipherDescriptor> {
    CipherKind::from_name(name).and_then(cipher_by_kind)
}

pub fn cipher_by_nid(nid: i32) -> Option<&'static OsslCipherDescriptor> {
    CipherKind::from_nid(nid).and_then(cipher_by_kind)
}

/// Dispatches to the accessor for `kind`.
pub fn digest_by_kind(kind: DigestKind) -> Option<&'static OsslDigestDescriptor> {
    match kind {
        DigestKind::Md2 => md2(),
        DigestKind::Md4 => md4(),
        DigestKind::Md5 => md5(),
        DigestKind::Sha1 => sha1(),
        DigestKind::Sha256 => sha256(),
    }
}

/// Looks a digest up by name, for example `"sha256"`.
pub fn digest_by_name(name: &str) -> Option<&'static OsslDigestDescriptor> {
    DigestKind::from_name(name).and_then(digest_by_kind)
}

pub fn digest_by_nid(nid: i32) -> Option<&'static OsslDigestDescriptor> {
    DigestKind::from_nid(nid).and_then(digest_by_kind)
}

/// Cipher variants this provider can serve with the linked OpenSSL.
pub fn supported_ciphers() -> Vec<CipherKind> {
    CipherKind::ALL
        .into_iter()
        .filter(|kind| cipher_by_kind(*kind).is_some())
        .collect()
}

/// Digest variants this provider can serve with the linked OpenSSL.
pub fn supported_digests() -> Vec<DigestKind> {
    DigestKind::ALL
        .into_iter()
        .filter(|kind| digest_by_kind(*kind).is_some())
        .collect()
}

#[cfg(test)]
mod tests;
