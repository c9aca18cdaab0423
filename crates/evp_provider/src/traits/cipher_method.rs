// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// Direction of a cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

impl Direction {
    /// Builds a direction from the `encp` convention of EVP callers.
    pub fn from_encrypting(enc: bool) -> Self {
        if enc {
            Direction::Encrypt
        } else {
            Direction::Decrypt
        }
    }

    /// Returns `true` for [`Direction::Encrypt`].
    pub fn is_encrypting(self) -> bool {
        matches!(self, Direction::Encrypt)
    }
}

/// Behaviour slots of a cipher descriptor.
///
/// Implementations are stored inside process-wide descriptors and must be
/// shareable across threads. Per-operation state lives in [`Self::Handle`],
/// which the dispatch context owns exclusively.
pub trait CipherMethod: Send + Sync + Sized + 'static {
    /// Backend native handle created by `init` and released by `cleanup`.
    type Handle: Send;

    /// Creates one native handle for `direction`.
    ///
    /// # Arguments
    ///
    /// * `cipher` - The descriptor this method belongs to
    /// * `direction` - Encrypt or decrypt
    /// * `key` - Key bytes of the context's effective key length
    /// * `iv` - IV of the descriptor's IV length, or `None` for stream ciphers
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the parameters. No handle
    /// exists in that case.
    fn init(
        &self,
        cipher: &CipherDescriptor<Self>,
        direction: Direction,
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> ProviderResult<Self::Handle>;

    /// Transforms exactly `input.len()` bytes into `output`.
    ///
    /// `output` has the same length as `input`. Implementations seed it
    /// with a copy of `input` before calling the backend and report failure
    /// when the backend errors or moves fewer bytes than requested.
    fn do_cipher(
        &self,
        handle: &mut Self::Handle,
        input: &[u8],
        output: &mut [u8],
    ) -> ProviderResult<()>;

    /// Releases the handle if one is present. Never fails.
    fn cleanup(&self, handle: &mut Option<Self::Handle>) {
        handle.take();
    }
}
