// Copyright (C) Microsoft Corporation. All rights reserved.


use super::*;

/// AES-128-CBC is in the OpenSSL default provider, so its binding always
/// exists and serves as the method for builder tests.
pub(crate) fn aes_method() -> OsslCipher {
    OsslCipher::for_kind(CipherKind::Aes128Cbc).expect("AES-128-CBC binding")
}

pub(crate) fn sha256_method() -> OsslDigest {
    OsslDigest::for_kind(DigestKind::Sha256).expect("SHA-256 binding")
}
