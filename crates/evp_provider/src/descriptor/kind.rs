// Copyright (C) Microsoft Corporation. All rights reserved.

//! Algorithm identities known to the provider and their published sizes.

use openssl::nid::Nid;

use super::*;

/// Cipher variants the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    DesEde3Cbc,
    DesCbc,
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    Rc2Cbc,
    Rc2_40Cbc,
    Rc2_64Cbc,
    Rc4,
    Rc4_40,
    Camellia128Cbc,
    Camellia192Cbc,
    Camellia256Cbc,
}

impl CipherKind {
    /// Every cipher variant, in registry order.
    pub const ALL: [CipherKind; 13] = [
        CipherKind::DesEde3Cbc,
        CipherKind::DesCbc,
        CipherKind::Aes128Cbc,
        CipherKind::Aes192Cbc,
        CipherKind::Aes256Cbc,
        CipherKind::Rc2Cbc,
        CipherKind::Rc2_40Cbc,
        CipherKind::Rc2_64Cbc,
        CipherKind::Rc4,
        CipherKind::Rc4_40,
        CipherKind::Camellia128Cbc,
        CipherKind::Camellia192Cbc,
        CipherKind::Camellia256Cbc,
    ];

    /// Canonical lower-case name, as used by `EVP_get_cipherbyname`.
    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::DesEde3Cbc => "des-ede3-cbc",
            CipherKind::DesCbc => "des-cbc",
            CipherKind::Aes128Cbc => "aes-128-cbc",
            CipherKind::Aes192Cbc => "aes-192-cbc",
            CipherKind::Aes256Cbc => "aes-256-cbc",
            CipherKind::Rc2Cbc => "rc2-cbc",
            CipherKind::Rc2_40Cbc => "rc2-40-cbc",
            CipherKind::Rc2_64Cbc => "rc2-64-cbc",
            CipherKind::Rc4 => "rc4",
            CipherKind::Rc4_40 => "rc4-40",
            CipherKind::Camellia128Cbc => "camellia-128-cbc",
            CipherKind::Camellia192Cbc => "camellia-192-cbc",
            CipherKind::Camellia256Cbc => "camellia-256-cbc",
        }
    }

    /// OpenSSL object identifier.
    pub fn nid(&self) -> i32 {
        let nid = match self {
            CipherKind::DesEde3Cbc => Nid::DES_EDE3_CBC,
            CipherKind::DesCbc => Nid::DES_CBC,
            CipherKind::Aes128Cbc => Nid::AES_128_CBC,
            CipherKind::Aes192Cbc => Nid::AES_192_CBC,
            CipherKind::Aes256Cbc => Nid::AES_256_CBC,
            CipherKind::Rc2Cbc => Nid::RC2_CBC,
            CipherKind::Rc2_40Cbc => Nid::RC2_40_CBC,
            CipherKind::Rc2_64Cbc => Nid::RC2_64_CBC,
            CipherKind::Rc4 => Nid::RC4,
            CipherKind::Rc4_40 => Nid::RC4_40,
            CipherKind::Camellia128Cbc => Nid::CAMELLIA_128_CBC,
            CipherKind::Camellia192Cbc => Nid::CAMELLIA_192_CBC,
            CipherKind::Camellia256Cbc => Nid::CAMELLIA_256_CBC,
        };
        nid.as_raw()
    }

    /// Looks a variant up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Looks a variant up by OpenSSL NID.
    pub fn from_nid(nid: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.nid() == nid)
    }

    pub fn block_size(&self) -> usize {
        match self {
            CipherKind::DesEde3Cbc
            | CipherKind::DesCbc
            | CipherKind::Rc2Cbc
            | CipherKind::Rc2_40Cbc
            | CipherKind::Rc2_64Cbc => 8,
            CipherKind::Aes128Cbc
            | CipherKind::Aes192Cbc
            | CipherKind::Aes256Cbc
            | CipherKind::Camellia128Cbc
            | CipherKind::Camellia192Cbc
            | CipherKind::Camellia256Cbc => 16,
            CipherKind::Rc4 | CipherKind::Rc4_40 => 1,
        }
    }

    /// Key length in bytes. For variable-length ciphers this is the default.
    pub fn key_len(&self) -> usize {
        match self {
            CipherKind::DesEde3Cbc => 24,
            CipherKind::DesCbc => 8,
            CipherKind::Aes128Cbc | CipherKind::Camellia128Cbc => 16,
            CipherKind::Aes192Cbc | CipherKind::Camellia192Cbc => 24,
            CipherKind::Aes256Cbc | CipherKind::Camellia256Cbc => 32,
            CipherKind::Rc2Cbc => 16,
            CipherKind::Rc2_40Cbc => 5,
            CipherKind::Rc2_64Cbc => 8,
            CipherKind::Rc4 => 16,
            CipherKind::Rc4_40 => 5,
        }
    }

    pub fn iv_len(&self) -> usize {
        match self.mode() {
            CipherMode::Cbc => self.block_size(),
            CipherMode::Stream => 0,
        }
    }

    pub fn mode(&self) -> CipherMode {
        match self {
            CipherKind::Rc4 | CipherKind::Rc4_40 => CipherMode::Stream,
            _ => CipherMode::Cbc,
        }
    }

    pub fn flags(&self) -> CipherFlags {
        match self {
            CipherKind::Rc4 | CipherKind::Rc4_40 => CipherFlags::VARIABLE_LENGTH,
            _ => CipherFlags::empty(),
        }
    }
}

/// Digest variants the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestKind {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha256,
}

impl DigestKind {
    /// Every digest variant, in registry order.
    pub const ALL: [DigestKind; 5] = [
        DigestKind::Md2,
        DigestKind::Md4,
        DigestKind::Md5,
        DigestKind::Sha1,
        DigestKind::Sha256,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DigestKind::Md2 => "md2",
            DigestKind::Md4 => "md4",
            DigestKind::Md5 => "md5",
            DigestKind::Sha1 => "sha1",
            DigestKind::Sha256 => "sha256",
        }
    }

    pub fn nid(&self) -> i32 {
        let nid = match self {
            DigestKind::Md2 => Nid::MD2,
            DigestKind::Md4 => Nid::MD4,
            DigestKind::Md5 => Nid::MD5,
            DigestKind::Sha1 => Nid::SHA1,
            DigestKind::Sha256 => Nid::SHA256,
        };
        nid.as_raw()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    pub fn from_nid(nid: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.nid() == nid)
    }

    pub fn digest_len(&self) -> usize {
        match self {
            DigestKind::Md2 | DigestKind::Md4 | DigestKind::Md5 => 16,
            DigestKind::Sha1 => 20,
            DigestKind::Sha256 => 32,
        }
    }

    pub fn block_len(&self) -> usize {
        match self {
            DigestKind::Md2 => 16,
            DigestKind::Md4 | DigestKind::Md5 | DigestKind::Sha1 | DigestKind::Sha256 => 64,
        }
    }
}
