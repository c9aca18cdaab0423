// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL-backed provider for a generic EVP-style cipher and digest layer.
//!
//! The crate adapts one backend library to a uniform shape so that callers
//! can obtain symmetric ciphers and message digests by name without knowing
//! which implementation performs the work. It is organised leaf to root:
//!
//! - **Bindings** (`cipher`, `digest`): translate the generic slots into
//!   OpenSSL calls.
//! - **Descriptors** (`descriptor`): immutable records of an algorithm's
//!   fixed properties plus the binding that implements its slots.
//! - **Dispatch contexts** (`context`): caller-facing handles that own the
//!   backend's private state and enforce the init/update/final lifecycle.
//! - **Registry** (`provider`): one accessor per algorithm variant, plus
//!   lookup by name and NID.
//!
//! # Platform Support
//!
//! Only the OpenSSL backend exists, so the crate builds on Linux only.

#[cfg(not(target_os = "linux"))]
compile_error!("evp_provider only has an OpenSSL backend and requires target_os = \"linux\"");

mod cipher;
mod context;
mod descriptor;
mod digest;
mod provider;
#[cfg(test)]
mod test_support;
mod traits;

pub use cipher::*;
pub use context::*;
pub use descriptor::*;
pub use digest::*;
pub use provider::*;
use thiserror::Error;
pub use traits::*;

/// Error type for every fallible provider operation.
///
/// Algorithms the backend cannot provide are not errors: the registry
/// reports them as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// A descriptor was built with inconsistent properties.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(&'static str),

    // Cipher errors
    /// Key length does not match the context's effective key length.
    #[error("cipher invalid key length")]
    InvalidKeyLength,
    /// IV length does not match the descriptor.
    #[error("cipher invalid IV length")]
    InvalidIvLength,
    /// Key length change requested on a cipher without variable key length.
    #[error("cipher key length is not variable")]
    KeyLengthNotVariable,
    /// The backend refused to create a cipher handle.
    #[error("cipher initialization failed")]
    CipherInitError,
    /// The backend failed or moved fewer bytes than requested.
    #[error("cipher transform failed")]
    CipherTransformError,
    /// Input is not a whole number of cipher blocks.
    #[error("cipher input is not a multiple of the block size")]
    InvalidDataSize,
    /// Output buffer is smaller than the input.
    #[error("output buffer too small")]
    BufferTooSmall,

    // Digest errors
    /// The backend refused to create a digest state.
    #[error("digest initialization failed")]
    DigestInitError,
    /// Digest update failed.
    #[error("digest update failed")]
    DigestUpdateError,
    /// Digest finalization failed.
    #[error("digest finalization failed")]
    DigestFinalError,

    // Lifecycle errors
    /// Operation requires an initialized context.
    #[error("context is not initialized")]
    ContextNotInitialized,
    /// Operation attempted on a finalized context.
    #[error("context is finalized")]
    ContextFinalized,
}

/// Result alias used throughout the crate.
pub type ProviderResult<T> = Result<T, ProviderError>;
