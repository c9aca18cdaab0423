// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod md_tests;
mod sha1_tests;

use super::*;
use crate::test_support::*;

/// Hashes `data` by feeding it to a fresh context in `split`-sized pieces.
pub(crate) fn digest_in_chunks(md: &OsslDigestDescriptor, data: &[u8], split: usize) -> Vec<u8> {
    let mut ctx = DigestContext::new(md);
    ctx.init().expect("init digest");
    for chunk in data.chunks(split) {
        ctx.update(chunk).expect("update digest");
    }
    ctx.finalize_vec().expect("final digest")
}

/// Checks `data` against `expected` both one-shot and streamed.
pub(crate) fn assert_digest(md: &OsslDigestDescriptor, data: &[u8], expected: &str) {
    let expected = hex::decode(expected).expect("hex digest");
    assert_eq!(
        digest(md, data).expect("one-shot digest"),
        expected,
        "{} one-shot",
        md.name()
    );
    if !data.is_empty() {
        assert_eq!(
            digest_in_chunks(md, data, 7),
            expected,
            "{} streamed",
            md.name()
        );
    }
}
