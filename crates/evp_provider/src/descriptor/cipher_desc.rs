// Copyright (C) Microsoft Corporation. All rights reserved.

use std::fmt;
use std::mem::size_of;

use super::*;

/// Chaining mode of a cipher, encoded as EVP mode bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// Stream cipher, block size 1, no IV.
    Stream,
    /// Cipher block chaining.
    Cbc,
}

impl CipherMode {
    /// EVP mode bits (`EVP_CIPH_STREAM_CIPHER`, `EVP_CIPH_CBC_MODE`).
    pub fn bits(&self) -> u64 {
        match self {
            CipherMode::Stream => 0x0,
            CipherMode::Cbc => 0x2,
        }
    }
}

bitflags::bitflags! {
    /// Cipher flags beyond the chaining mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CipherFlags: u64 {
        /// Key length may be changed by the caller before init.
        const VARIABLE_LENGTH = 0x8;
    }
}

/// Immutable description of one cipher and the method that runs it.
pub struct CipherDescriptor<M> {
    kind: CipherKind,
    nid: i32,
    block_size: usize,
    key_len: usize,
    iv_len: usize,
    mode: CipherMode,
    flags: CipherFlags,
    method: M,
}

impl<M: CipherMethod> CipherDescriptor<M> {
    pub fn kind(&self) -> CipherKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn nid(&self) -> i32 {
        self.nid
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Default key length. Fixed unless [`CipherFlags::VARIABLE_LENGTH`] is set.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    pub fn iv_len(&self) -> usize {
        self.iv_len
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn flags(&self) -> CipherFlags {
        self.flags
    }

    /// Mode and flags combined into the EVP `flags` word.
    pub fn flags_raw(&self) -> u64 {
        self.mode.bits() | self.flags.bits()
    }

    pub fn is_variable_length(&self) -> bool {
        self.flags.contains(CipherFlags::VARIABLE_LENGTH)
    }

    /// Size of the private per-context state this method needs.
    pub fn ctx_size(&self) -> usize {
        size_of::<M::Handle>()
    }

    /// The init, do-cipher and cleanup slots.
    pub fn method(&self) -> &M {
        &self.method
    }
}

impl<M> fmt::Debug for CipherDescriptor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherDescriptor")
            .field("name", &self.kind.name())
            .field("nid", &self.nid)
            .field("block_size", &self.block_size)
            .field("key_len", &self.key_len)
            .field("iv_len", &self.iv_len)
            .field("mode", &self.mode)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CipherDescriptor`].
///
/// Setters record the first invalid value and every later call becomes a
/// no-op; `build` reports that error.
pub struct CipherBuilder {
    kind: CipherKind,
    block_size: usize,
    key_len: usize,
    iv_len: usize,
    mode: CipherMode,
    flags: CipherFlags,
    result: ProviderResult<()>,
}

impl CipherBuilder {
    /// Starts a descriptor with the given block size and key length.
    pub fn new(kind: CipherKind, block_size: usize, key_len: usize) -> CipherBuilder {
        let mut result = Ok(());
        if block_size == 0 {
            tracing::error!(cipher = kind.name(), "CipherBuilder::new: block size is zero");
            result = Err(ProviderError::InvalidDescriptor("block size must be positive"));
        } else if key_len == 0 {
            tracing::error!(cipher = kind.name(), "CipherBuilder::new: key length is zero");
            result = Err(ProviderError::InvalidDescriptor("key length must be positive"));
        }

        CipherBuilder {
            kind,
            block_size,
            key_len,
            iv_len: 0,
            mode: CipherMode::Cbc,
            flags: CipherFlags::empty(),
            result,
        }
    }

    /// Set the IV length
    pub fn set_iv_length(&mut self, iv_len: usize) -> &mut CipherBuilder {
        if self.result.is_err() {
            return self;
        }
        self.iv_len = iv_len;
        self
    }

    /// Set the chaining mode
    pub fn set_mode(&mut self, mode: CipherMode) -> &mut CipherBuilder {
        if self.result.is_err() {
            return self;
        }
        self.mode = mode;
        self
    }

    /// Set the flags
    pub fn set_flags(&mut self, flags: CipherFlags) -> &mut CipherBuilder {
        if self.result.is_err() {
            return self;
        }
        self.flags = flags;
        self
    }

    /// Checks mode-dependent invariants and attaches the method.
    pub fn build<M: CipherMethod>(&mut self, method: M) -> ProviderResult<CipherDescriptor<M>> {
        self.result.clone()?;

        let invalid = match self.mode {
            CipherMode::Cbc if self.iv_len == 0 => Some("CBC cipher needs an IV"),
            CipherMode::Cbc if self.block_size < 2 => {
                Some("CBC cipher needs a block size above one")
            }
            CipherMode::Stream if self.block_size != 1 || self.iv_len != 0 => {
                Some("stream cipher has block size 1 and no IV")
            }
            _ => None,
        };
        if let Some(reason) = invalid {
            tracing::error!(cipher = self.kind.name(), reason, "CipherBuilder::build");
            return Err(ProviderError::InvalidDescriptor(reason));
        }

        tracing::debug!(
            cipher = self.kind.name(),
            block_size = self.block_size,
            key_len = self.key_len,
            iv_len = self.iv_len,
            "built cipher descriptor"
        );

        Ok(CipherDescriptor {
            kind: self.kind,
            nid: self.kind.nid(),
            block_size: self.block_size,
            key_len: self.key_len,
            iv_len: self.iv_len,
            mode: self.mode,
            flags: self.flags,
            method,
        })
    }
}
