// Copyright (C) Microsoft Corporation. All rights reserved.

//! Shared test setup for algorithms served by the OpenSSL 3 legacy provider.
//!
//! Registry accessors cache their first answer, so the legacy provider must
//! be loaded before any test touches DES, RC2, RC4 or MD4. Tests that reach
//! those accessors, directly or through enumeration, call
//! [`load_legacy_provider`] first.

use std::sync::OnceLock;

use openssl::provider::Provider;

/// Loads the legacy provider once for the whole test binary.
///
/// Returns `false` only when the linked OpenSSL has no legacy provider.
pub(crate) fn load_legacy_provider() -> bool {
    static LEGACY: OnceLock<Option<Provider>> = OnceLock::new();

    LEGACY
        .get_or_init(|| match Provider::try_load(None, "legacy", true) {
            Ok(provider) => Some(provider),
            Err(openssl_error_stack) => {
                tracing::warn!(?openssl_error_stack, "legacy provider unavailable");
                None
            }
        })
        .is_some()
}

/// Resolves a legacy accessor after loading the legacy provider.
///
/// Returns `None` when the provider itself could not be loaded; the caller
/// skips. Panics if the provider loaded but the algorithm is still missing.
pub(crate) fn legacy<T>(name: &str, accessor: fn() -> Option<T>) -> Option<T> {
    if !load_legacy_provider() {
        tracing::warn!(algorithm = name, "legacy provider unavailable, skipping");
        return None;
    }
    let found = accessor();
    assert!(
        found.is_some(),
        "{name} unavailable with the legacy provider loaded"
    );
    found
}
