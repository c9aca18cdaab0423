// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// Caller-facing cipher handle.
///
/// Owns at most one backend handle. The handle is created by [`init`],
/// used by [`transform`] and released exactly once by [`cleanup`] or when
/// the context is dropped.
///
/// [`init`]: CipherContext::init
/// [`transform`]: CipherContext::transform
/// [`cleanup`]: CipherContext::cleanup
pub struct CipherContext<'a, M: CipherMethod> {
    cipher: &'a CipherDescriptor<M>,
    key_len: usize,
    direction: Option<Direction>,
    state: ContextState,
    handle: Option<M::Handle>,
}

impl<'a, M: CipherMethod> CipherContext<'a, M> {
    /// Creates an uninitialized context for `cipher`.
    pub fn new(cipher: &'a CipherDescriptor<M>) -> Self {
        Self {
            cipher,
            key_len: cipher.key_len(),
            direction: None,
            state: ContextState::Uninitialized,
            handle: None,
        }
    }

    /// The descriptor this context dispatches through.
    pub fn cipher(&self) -> &'a CipherDescriptor<M> {
        self.cipher
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    /// Effective key length used by the next `init`.
    pub fn key_length(&self) -> usize {
        self.key_len
    }

    pub fn iv_length(&self) -> usize {
        self.cipher.iv_len()
    }

    /// Direction of the active handle, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_encrypting(&self) -> bool {
        self.direction.is_some_and(Direction::is_encrypting)
    }

    /// Whether a backend handle is currently held.
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Overrides the key length before `init`.
    ///
    /// Only ciphers flagged [`CipherFlags::VARIABLE_LENGTH`] accept a length
    /// different from the descriptor's.
    pub fn set_key_length(&mut self, key_len: usize) -> ProviderResult<()> {
        if self.state == ContextState::Finalized {
            Err(ProviderError::ContextFinalized)?;
        }
        if key_len == 0 {
            Err(ProviderError::InvalidKeyLength)?;
        }
        if key_len != self.cipher.key_len() && !self.cipher.is_variable_length() {
            Err(ProviderError::KeyLengthNotVariable)?;
        }

        self.key_len = key_len;
        Ok(())
    }

    /// Creates the backend handle for `direction`.
    ///
    /// # Arguments
    ///
    /// * `direction` - Encrypt or decrypt
    /// * `key` - Exactly [`key_length`](Self::key_length) bytes
    /// * `iv` - Exactly [`iv_length`](Self::iv_length) bytes, or `None` for an
    ///   all-zero IV. Ignored by stream ciphers.
    ///
    /// Re-initializing an active context releases its current handle first.
    ///
    /// # Errors
    ///
    /// On failure the context holds no handle and is `Uninitialized`;
    /// [`cleanup`](Self::cleanup) remains safe.
    #[tracing::instrument(skip_all, fields(cipher = self.cipher.name(), direction = ?direction))]
    pub fn init(
        &mut self,
        direction: Direction,
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> ProviderResult<()> {
        if self.state == ContextState::Finalized {
            Err(ProviderError::ContextFinalized)?;
        }
        if key.len() != self.key_len {
            tracing::error!(
                expected = self.key_len,
                actual = key.len(),
                "key length mismatch"
            );
            Err(ProviderError::InvalidKeyLength)?;
        }

        let zero_iv = vec![0u8; self.cipher.iv_len()];
        let iv = match (self.cipher.iv_len(), iv) {
            (0, _) => None,
            (len, Some(iv)) if iv.len() == len => Some(iv),
            (_, Some(_)) => Err(ProviderError::InvalidIvLength)?,
            (_, None) => Some(zero_iv.as_slice()),
        };

        if self.handle.is_some() {
            self.cipher.method().cleanup(&mut self.handle);
        }
        self.direction = None;
        self.state = ContextState::Uninitialized;

        let handle = self.cipher.method().init(self.cipher, direction, key, iv)?;
        self.handle = Some(handle);
        self.direction = Some(direction);
        self.state = ContextState::Active;

        tracing::debug!("cipher context initialized");
        Ok(())
    }

    /// Transforms `input` into the first `input.len()` bytes of `output`.
    ///
    /// Block ciphers require `input.len()` to be a multiple of the block
    /// size; nothing is buffered between calls. Chaining state carries over
    /// from one call to the next.
    pub fn transform(&mut self, input: &[u8], output: &mut [u8]) -> ProviderResult<()> {
        self.ensure_active()?;
        if output.len() < input.len() {
            Err(ProviderError::BufferTooSmall)?;
        }
        if input.len() % self.cipher.block_size() != 0 {
            tracing::error!(
                len = input.len(),
                block_size = self.cipher.block_size(),
                "input is not block aligned"
            );
            Err(ProviderError::InvalidDataSize)?;
        }

        let cipher = self.cipher;
        let handle = self
            .handle
            .as_mut()
            .ok_or(ProviderError::ContextNotInitialized)?;
        cipher
            .method()
            .do_cipher(handle, input, &mut output[..input.len()])
    }

    /// Transforms `data` in place.
    pub fn transform_in_place(&mut self, data: &mut [u8]) -> ProviderResult<()> {
        let input = data.to_vec();
        self.transform(&input, data)
    }

    /// Releases the backend handle, if any, and finalizes the context.
    ///
    /// Always succeeds, including after a failed `init`.
    pub fn cleanup(&mut self) {
        if self.state == ContextState::Finalized {
            return;
        }
        self.cipher.method().cleanup(&mut self.handle);
        self.direction = None;
        self.state = ContextState::Finalized;
        tracing::debug!(cipher = self.cipher.name(), "cipher context cleaned up");
    }

    fn ensure_active(&self) -> ProviderResult<()> {
        match self.state {
            ContextState::Active => Ok(()),
            ContextState::Uninitialized => Err(ProviderError::ContextNotInitialized),
            ContextState::Finalized => Err(ProviderError::ContextFinalized),
        }
    }
}

impl<M: CipherMethod> Drop for CipherContext<'_, M> {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cipher.method().cleanup(&mut self.handle);
        }
    }
}
