// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

/// Optional teardown hook for digest state.
pub type DigestCleanupFn<S> = fn(&mut S);

/// Behaviour slots of a digest descriptor.
pub trait DigestMethod: Send + Sync + Sized + 'static {
    /// Backend digest state, owned by value by the dispatch context.
    type State: Send;

    /// Creates a fresh digest state.
    fn init(&self, md: &DigestDescriptor<Self>) -> ProviderResult<Self::State>;

    /// Absorbs `data` into `state`.
    fn update(&self, state: &mut Self::State, data: &[u8]) -> ProviderResult<()>;

    /// Writes the digest into the front of `digest` and returns its length.
    ///
    /// `digest` is at least the descriptor's digest length.
    fn finalize(&self, state: &mut Self::State, digest: &mut [u8]) -> ProviderResult<usize>;

    /// Extra teardown run after `finalize`, for backends that need it.
    fn cleanup_slot(&self) -> Option<DigestCleanupFn<Self::State>> {
        None
    }
}
