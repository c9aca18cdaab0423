// Copyright (C) Microsoft Corporation. All rights reserved.

//! In-memory methods that count handle and state lifetimes.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use super::*;

/// XOR "cipher" that records every handle it creates and releases.
#[derive(Default)]
pub(crate) struct MockCipher {
    pub created: Arc<AtomicUsize>,
    pub released: Arc<AtomicUsize>,
    pub fail_init: Arc<AtomicBool>,
    pub fail_transform: bool,
    pub last_iv: Arc<Mutex<Option<Vec<u8>>>>,
}

pub(crate) struct MockHandle {
    key: Vec<u8>,
    offset: usize,
    released: Arc<AtomicUsize>,
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl CipherMethod for MockCipher {
    type Handle = MockHandle;

    fn init(
        &self,
        _cipher: &CipherDescriptor<Self>,
        _direction: Direction,
        key: &[u8],
        iv: Option<&[u8]>,
    ) -> ProviderResult<Self::Handle> {
        *self.last_iv.lock().unwrap() = iv.map(<[u8]>::to_vec);
        if self.fail_init.load(Ordering::SeqCst) {
            return Err(ProviderError::CipherInitError);
        }

        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(MockHandle {
            key: key.to_vec(),
            offset: 0,
            released: self.released.clone(),
        })
    }

    fn do_cipher(
        &self,
        handle: &mut Self::Handle,
        input: &[u8],
        output: &mut [u8],
    ) -> ProviderResult<()> {
        output.copy_from_slice(input);
        if self.fail_transform {
            return Err(ProviderError::CipherTransformError);
        }

        for byte in output.iter_mut() {
            *byte ^= handle.key[handle.offset % handle.key.len()];
            handle.offset += 1;
        }
        Ok(())
    }
}

impl MockCipher {
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub fn last_iv(&self) -> Option<Vec<u8>> {
        self.last_iv.lock().unwrap().clone()
    }

    pub fn set_fail_init(&self, fail: bool) {
        self.fail_init.store(fail, Ordering::SeqCst);
    }
}

/// 16-byte blocks, 16-byte key and IV, fixed key length.
pub(crate) fn block_descriptor(method: MockCipher) -> CipherDescriptor<MockCipher> {
    CipherBuilder::new(CipherKind::Aes128Cbc, 16, 16)
        .set_iv_length(16)
        .set_mode(CipherMode::Cbc)
        .build(method)
        .expect("build block descriptor")
}

/// Byte-oriented, no IV, variable key length.
pub(crate) fn stream_descriptor(method: MockCipher) -> CipherDescriptor<MockCipher> {
    CipherBuilder::new(CipherKind::Rc4, 1, 16)
        .set_mode(CipherMode::Stream)
        .set_flags(CipherFlags::VARIABLE_LENGTH)
        .build(method)
        .expect("build stream descriptor")
}

/// Sums its input; the cleanup slot counts how often it runs.
#[derive(Default)]
pub(crate) struct MockDigest {
    pub cleaned: Arc<AtomicUsize>,
    pub fail_update: bool,
}

pub(crate) struct MockDigestState {
    sum: u64,
    cleaned: Arc<AtomicUsize>,
}

fn mock_digest_cleanup(state: &mut MockDigestState) {
    state.cleaned.fetch_add(1, Ordering::SeqCst);
}

impl DigestMethod for MockDigest {
    type State = MockDigestState;

    fn init(&self, _md: &DigestDescriptor<Self>) -> ProviderResult<Self::State> {
        Ok(MockDigestState {
            sum: 0,
            cleaned: self.cleaned.clone(),
        })
    }

    fn update(&self, state: &mut Self::State, data: &[u8]) -> ProviderResult<()> {
        if self.fail_update {
            return Err(ProviderError::DigestUpdateError);
        }
        state.sum += data.iter().map(|&b| u64::from(b)).sum::<u64>();
        Ok(())
    }

    fn finalize(&self, state: &mut Self::State, digest: &mut [u8]) -> ProviderResult<usize> {
        digest[..8].copy_from_slice(&state.sum.to_be_bytes());
        Ok(8)
    }

    fn cleanup_slot(&self) -> Option<DigestCleanupFn<Self::State>> {
        Some(mock_digest_cleanup)
    }
}

impl MockDigest {
    pub fn cleaned(&self) -> usize {
        self.cleaned.load(Ordering::SeqCst)
    }
}

pub(crate) fn digest_descriptor(method: MockDigest) -> DigestDescriptor<MockDigest> {
    DigestBuilder::new(DigestKind::Sha256, 8, 64)
        .build(method)
        .expect("build digest descriptor")
}
