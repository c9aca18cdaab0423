// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// Caller-facing digest handle.
pub struct DigestContext<'a, M: DigestMethod> {
    md: &'a DigestDescriptor<M>,
    state: ContextState,
    inner: Option<M::State>,
}

impl<'a, M: DigestMethod> DigestContext<'a, M> {
    pub fn new(md: &'a DigestDescriptor<M>) -> Self {
        Self {
            md,
            state: ContextState::Uninitialized,
            inner: None,
        }
    }

    pub fn md(&self) -> &'a DigestDescriptor<M> {
        self.md
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Starts a fresh digest computation, discarding any in progress.
    #[tracing::instrument(skip_all, fields(digest = self.md.name()))]
    pub fn init(&mut self) -> ProviderResult<()> {
        if self.state == ContextState::Finalized {
            Err(ProviderError::ContextFinalized)?;
        }
        self.release();
        self.state = ContextState::Uninitialized;

        let inner = self.md.method().init(self.md)?;
        self.inner = Some(inner);
        self.state = ContextState::Active;
        Ok(())
    }

    pub fn update(&mut self, data: &[u8]) -> ProviderResult<()> {
        let md = self.md;
        let inner = self.active_state()?;
        md.method().update(inner, data)
    }

    /// Writes the digest into `digest` and finalizes the context.
    ///
    /// # Returns
    ///
    /// The digest length.
    ///
    /// # Errors
    ///
    /// `BufferTooSmall` if `digest` is shorter than the digest length; the
    /// context stays active in that case.
    pub fn finalize(&mut self, digest: &mut [u8]) -> ProviderResult<usize> {
        let md = self.md;
        let inner = self.active_state()?;
        if digest.len() < md.digest_len() {
            Err(ProviderError::BufferTooSmall)?;
        }
        let len = md.method().finalize(inner, digest)?;

        self.release();
        self.state = ContextState::Finalized;
        Ok(len)
    }

    /// Finalizes the context and returns the digest as a vector.
    pub fn finalize_vec(&mut self) -> ProviderResult<Vec<u8>> {
        let mut digest = vec![0u8; self.md.digest_len()];
        let len = self.finalize(&mut digest)?;
        digest.truncate(len);
        Ok(digest)
    }

    fn active_state(&mut self) -> ProviderResult<&mut M::State> {
        match self.state {
            ContextState::Uninitialized => Err(ProviderError::ContextNotInitialized),
            ContextState::Finalized => Err(ProviderError::ContextFinalized),
            ContextState::Active => self
                .inner
                .as_mut()
                .ok_or(ProviderError::ContextNotInitialized),
        }
    }

    // Runs the cleanup slot, when the method has one, and drops the state.
    fn release(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            if let Some(cleanup) = self.md.cleanup() {
                cleanup(&mut inner);
            }
        }
    }
}

impl<M: DigestMethod> Drop for DigestContext<'_, M> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Computes the digest of `data` in one call.
pub fn digest<M: DigestMethod>(md: &DigestDescriptor<M>, data: &[u8]) -> ProviderResult<Vec<u8>> {
    let mut ctx = DigestContext::new(md);
    ctx.init()?;
    ctx.update(data)?;
    ctx.finalize_vec()
}
