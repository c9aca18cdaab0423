// Copyright (C) Microsoft Corporation. All rights reserved.

//! Cipher and digest descriptors.
//!
//! A descriptor is the immutable record a caller receives from the
//! registry: the algorithm's identity and fixed sizes together with the
//! method value that implements its behaviour slots. Descriptors are built
//! once through [`CipherBuilder`] or [`DigestBuilder`] and never mutated.

mod cipher_desc;
mod digest_desc;
mod kind;

pub use cipher_desc::*;
pub use digest_desc::*;
pub use kind::*;

use super::*;

#[cfg(test)]
mod tests;
