// Copyright (C) Microsoft Corporation. All rights reserved.

use std::fmt;
use std::mem::size_of;

use super::*;

/// Immutable description of one message digest and the method that runs it.
pub struct DigestDescriptor<M> {
    kind: DigestKind,
    nid: i32,
    digest_len: usize,
    block_len: usize,
    method: M,
}

impl<M: DigestMethod> DigestDescriptor<M> {
    pub fn kind(&self) -> DigestKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn nid(&self) -> i32 {
        self.nid
    }

    /// Output length in bytes.
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    /// Compression block length in bytes.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Size of the private per-context state this method needs.
    pub fn ctx_size(&self) -> usize {
        size_of::<M::State>()
    }

    /// The init, update and final slots.
    pub fn method(&self) -> &M {
        &self.method
    }

    /// The optional cleanup slot.
    pub fn cleanup(&self) -> Option<DigestCleanupFn<M::State>> {
        self.method.cleanup_slot()
    }
}

impl<M> fmt::Debug for DigestDescriptor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestDescriptor")
            .field("name", &self.kind.name())
            .field("nid", &self.nid)
            .field("digest_len", &self.digest_len)
            .field("block_len", &self.block_len)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DigestDescriptor`].
pub struct DigestBuilder {
    kind: DigestKind,
    digest_len: usize,
    block_len: usize,
}

impl DigestBuilder {
    pub fn new(kind: DigestKind, digest_len: usize, block_len: usize) -> DigestBuilder {
        DigestBuilder {
            kind,
            digest_len,
            block_len,
        }
    }

    pub fn build<M: DigestMethod>(&self, method: M) -> ProviderResult<DigestDescriptor<M>> {
        if self.digest_len == 0 || self.block_len == 0 {
            tracing::error!(
                digest = self.kind.name(),
                digest_len = self.digest_len,
                block_len = self.block_len,
                "DigestBuilder::build: sizes must be positive"
            );
            return Err(ProviderError::InvalidDescriptor(
                "digest and block length must be positive",
            ));
        }

        tracing::debug!(
            digest = self.kind.name(),
            digest_len = self.digest_len,
            block_len = self.block_len,
            "built digest descriptor"
        );

        Ok(DigestDescriptor {
            kind: self.kind,
            nid: self.kind.nid(),
            digest_len: self.digest_len,
            block_len: self.block_len,
            method,
        })
    }
}
