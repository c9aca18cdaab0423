// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL cipher binding.
//!
//! Every cipher variant is served by [`OsslCipher`], which holds the OpenSSL
//! `Cipher` and the rule for deriving the key length. The native handle is a
//! `Crypter` with padding disabled, so each transform maps one-to-one onto
//! `EVP_CipherUpdate`.

use openssl::nid::Nid;
use openssl::symm::*;

use super::*;

/// How `init` derives the number of key bytes handed to OpenSSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Exactly this many bytes.
    Fixed(usize),
    /// The descriptor's block size. Single DES keys are one block long.
    BlockSize,
    /// The descriptor's key length.
    Descriptor,
    /// The context's effective key length, for variable-length ciphers.
    Context,
}

impl From<Direction> for Mode {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Encrypt => Mode::Encrypt,
            Direction::Decrypt => Mode::Decrypt,
        }
    }
}

/// OpenSSL implementation of the cipher slots.
#[derive(Clone, Copy)]
pub struct OsslCipher {
    cipher: Cipher,
    key_source: KeySource,
}

impl OsslCipher {
    pub fn new(cipher: Cipher, key_source: KeySource) -> Self {
        Self { cipher, key_source }
    }

    /// Returns the binding for `kind`, or `None` when the linked OpenSSL
    /// cannot run it.
    ///
    /// OpenSSL may know a cipher by NID and still refuse to create a context
    /// for it, as OpenSSL 3 does for DES, RC2 and RC4 unless the legacy
    /// provider is loaded. Availability is therefore checked by creating a
    /// throw-away `Crypter`.
    pub fn for_kind(kind: CipherKind) -> Option<Self> {
        let key_source = match kind {
            CipherKind::DesEde3Cbc => KeySource::Fixed(24),
            CipherKind::DesCbc => KeySource::BlockSize,
            CipherKind::Rc4 | CipherKind::Rc4_40 => KeySource::Context,
            _ => KeySource::Descriptor,
        };

        let Some(cipher) = Cipher::from_nid(Nid::from_raw(kind.nid())) else {
            tracing::warn!(cipher = kind.name(), "cipher unknown to the linked OpenSSL");
            return None;
        };

        let binding = Self::new(cipher, key_source);
        binding.can_create(kind).then_some(binding)
    }

    /// The OpenSSL cipher this binding drives.
    pub fn cipher(&self) -> Cipher {
        self.cipher
    }

    pub fn key_source(&self) -> KeySource {
        self.key_source
    }

    fn can_create(&self, kind: CipherKind) -> bool {
        let key = vec![0u8; kind.key_len()];
        let iv = vec![0u8; kind.iv_len()];
        let iv = (!iv.is_empty()).then_some(iv.as_slice());

        match Crypter::new(self.cipher, Mode::Encrypt, &key, iv) {
            Ok(_) => true,
            Err(openssl_error_stack) => {
                tracing::warn!(
                    ?openssl_error_stack,
                    cipher = kind.name(),
                    "cipher unavailable in the linked OpenSSL"
                );
                false
            }
        }
    }

    fn init_key_len(&self, cipher: &CipherDescriptor<Self>, key: &[u8]) -> usize {
        match self.key_source {
            KeySource::Fixed(len) => len,
            KeySource::BlockSize => cipher.block_size(),
            KeySource::Descriptor => cipher.key_len(),
            KeySource::Context => key.len(),
        }
    }
}

/// Native handle owned by a cipher context.
pub struct OsslCipherHandle {
    crypter: Crypter,
    direction: Direction,
}

impl OsslCipherHandle {
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl CipherMethod for OsslCipher {
    type Handle = OsslCipherHandle;

    fn init(
        &self,
        cipher: &CipherDescriptor<Self>,
        direction: Direction,
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> ProviderResult<Self::Handle> {
        let key_len = self.init_key_len(cipher, key);
        let key = key.get(..key_len).ok_or_else(|| {
            tracing::error!(
                cipher = cipher.name(),
                expected = key_len,
                actual = key.len(),
                "key shorter than the backend requires"
            );
            ProviderError::InvalidKeyLength
        })?;

        // Crypter panics on a missing IV for ciphers that declare one.
        let iv = match (cipher.iv_len(), iv) {
            (0, _) => None,
            (len, Some(iv)) if iv.len() == len => Some(iv),
            _ => Err(ProviderError::InvalidIvLength)?,
        };

        let mut crypter = Crypter::new(self.cipher, direction.into(), key, iv).map_err(
            |openssl_error_stack| {
                tracing::error!(?openssl_error_stack, cipher = cipher.name());
                ProviderError::CipherInitError
            },
        )?;
        crypter.pad(false);

        Ok(OsslCipherHandle { crypter, direction })
    }

    fn do_cipher(
        &self,
        handle: &mut Self::Handle,
        input: &[u8],
        output: &mut [u8],
    ) -> ProviderResult<()> {
        if output.len() != input.len() {
            Err(ProviderError::BufferTooSmall)?;
        }
        output.copy_from_slice(input);

        // OpenSSL wants room for one extra block; the caller's buffer only
        // ever receives `input.len()` bytes.
        let mut scratch = vec![0u8; input.len() + self.cipher.block_size()];
        let moved = handle
            .crypter
            .update(input, &mut scratch)
            .map_err(|openssl_error_stack| {
                tracing::error!(?openssl_error_stack);
                ProviderError::CipherTransformError
            })?;

        if moved != input.len() {
            tracing::error!(moved, requested = input.len(), "short cipher transform");
            Err(ProviderError::CipherTransformError)?;
        }

        output.copy_from_slice(&scratch[..moved]);
        Ok(())
    }

    fn cleanup(&self, handle: &mut Option<Self::Handle>) {
        if let Some(handle) = handle.take() {
            tracing::debug!(direction = ?handle.direction, "releasing cipher handle");
            drop(handle);
        }
    }
}
