// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Message digest bindings.
//!
//! Each binding adapts the backend's native init/update/final triplet to the
//! exact signatures of [`DigestMethod`]. Digest state is plain value state
//! owned by the dispatch context; there is nothing to release beyond
//! dropping it, so the cleanup slot is absent.
//!
//! # Supported Digests
//!
//! - **MD2**, **MD4**, **MD5**: legacy, provided for protocol compatibility
//! - **SHA-1**: 160-bit, deprecated for signatures
//! - **SHA-256**: 256-bit hash from the SHA-2 family

use super::*;

#[cfg(target_os = "linux")]
mod digest_ossl;

#[cfg(target_os = "linux")]
pub use digest_ossl::*;

#[cfg(test)]
mod tests;
