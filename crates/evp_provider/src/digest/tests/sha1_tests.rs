// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use test_with_tracing::test;

use super::*;

fn md() -> &'static OsslDigestDescriptor {
    sha1().expect("SHA-1 is always available")
}

#[test]
fn test_sha1_known_answers() {
    assert_digest(md(), b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_digest(md(), b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn test_sha1_streaming() {
    const DATA: [u8; 1024] = [1u8; 1024];

    let mut ctx = DigestContext::new(md());
    ctx.init().expect("init sha1");
    ctx.update(&DATA[..512]).expect("update sha1 part1");
    ctx.update(&DATA[512..]).expect("update sha1 part2");
    let mut out = [0u8; 20];
    ctx.finalize(&mut out).expect("final sha1");
    assert_eq!(
        out,
        [
            0x37, 0x6f, 0x19, 0x00, 0x1d, 0xc1, 0x71, 0xe2, 0xeb, 0x9c, 0x56, 0x96, 0x2c, 0xa3,
            0x24, 0x78, 0xca, 0xaa, 0x7e, 0x39,
        ]
    );
}

#[test]
fn test_sha1_descriptor() {
    let md = md();
    assert_eq!(md.name(), "sha1");
    assert_eq!(md.digest_len(), 20);
    assert_eq!(md.block_len(), 64);
}
