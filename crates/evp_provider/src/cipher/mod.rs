// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cipher bindings.
//!
//! One binding type per backend implements [`CipherMethod`] for every
//! cipher variant the backend offers. The binding decides how the key length
//! handed to the backend is derived, creates the backend handle and runs the
//! raw block or stream transform without padding or buffering.
//!
//! # Platform Support
//!
//! - **Linux**: OpenSSL through `openssl::symm::Crypter`

use super::*;

#[cfg(target_os = "linux")]
mod cipher_ossl;

#[cfg(target_os = "linux")]
pub use cipher_ossl::*;

#[cfg(test)]
mod tests;
