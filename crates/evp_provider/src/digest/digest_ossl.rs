// Copyright (C) Microsoft Corporation. All rights reserved.

//! OpenSSL digest binding.

use openssl::hash::MessageDigest;
use openssl::nid::Nid;

use super::*;

/// OpenSSL implementation of the digest slots.
#[derive(Clone, Copy)]
pub struct OsslDigest {
    md: MessageDigest,
}

impl OsslDigest {
    pub fn new(md: MessageDigest) -> Self {
        Self { md }
    }

    /// Returns the binding for `kind`, or `None` when the linked OpenSSL
    /// cannot run it. MD2 is usually compiled out and MD4 needs the OpenSSL
    /// 3 legacy provider.
    pub fn for_kind(kind: DigestKind) -> Option<Self> {
        let Some(md) = MessageDigest::from_nid(Nid::from_raw(kind.nid())) else {
            tracing::warn!(digest = kind.name(), "digest unknown to the linked OpenSSL");
            return None;
        };

        match openssl::hash::Hasher::new(md) {
            Ok(_) => Some(Self::new(md)),
            Err(openssl_error_stack) => {
                tracing::warn!(
                    ?openssl_error_stack,
                    digest = kind.name(),
                    "digest unavailable in the linked OpenSSL"
                );
                None
            }
        }
    }

    /// The OpenSSL digest this binding drives.
    pub fn message_digest(&self) -> MessageDigest {
        self.md
    }
}

/// Digest state owned by a digest context.
pub struct OsslDigestState {
    hasher: openssl::hash::Hasher,
}

impl DigestMethod for OsslDigest {
    type State = OsslDigestState;

    fn init(&self, md: &DigestDescriptor<Self>) -> ProviderResult<Self::State> {
        let hasher = openssl::hash::Hasher::new(self.md).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack, digest = md.name());
            ProviderError::DigestInitError
        })?;
        Ok(OsslDigestState { hasher })
    }

    fn update(&self, state: &mut Self::State, data: &[u8]) -> ProviderResult<()> {
        state.hasher.update(data).map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            ProviderError::DigestUpdateError
        })
    }

    fn finalize(&self, state: &mut Self::State, digest: &mut [u8]) -> ProviderResult<usize> {
        let len = self.md.size();
        if digest.len() < len {
            Err(ProviderError::BufferTooSmall)?;
        }

        let bytes = state.hasher.finish().map_err(|openssl_error_stack| {
            tracing::error!(?openssl_error_stack);
            ProviderError::DigestFinalError
        })?;

        digest[..bytes.len()].copy_from_slice(&bytes);
        Ok(bytes.len())
    }
}
