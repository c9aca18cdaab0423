// Copyright (C) Microsoft Corporation. All rights reserved.

//! Generic dispatch contexts.
//!
//! A context is created from a descriptor for one operation, owns the
//! backend's private state for that operation, and dispatches every call
//! through the descriptor's method. Both cipher and digest contexts follow
//! the same lifecycle:
//!
//! ```text
//! Uninitialized --init--> Active --transform/update--> Active --cleanup/finalize--> Finalized
//! ```
//!
//! Calls made out of order return [`ProviderError::ContextNotInitialized`]
//! or [`ProviderError::ContextFinalized`]. Contexts take `&mut self` for
//! every mutating call, so a context is never used by two operations at
//! once.

mod cipher_ctx;
mod digest_ctx;

pub use cipher_ctx::*;
pub use digest_ctx::*;

use super::*;

/// Lifecycle state shared by cipher and digest contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Created, or init failed. No backend state is held.
    Uninitialized,
    /// Init succeeded; transform or update may be called.
    Active,
    /// Cleanup or final ran. The context accepts no further calls.
    Finalized,
}

#[cfg(test)]
mod tests;
