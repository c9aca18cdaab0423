// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use test_with_tracing::test;

use super::*;

#[test]
fn test_md5_known_answers() {
    let md = md5().expect("MD5 is always available");
    assert_digest(md, b"", "d41d8cd98f00b204e9800998ecf8427e");
    assert_digest(md, b"abc", "900150983cd24fb0d6963f7d28e17f72");
    assert_digest(
        md,
        b"message digest",
        "f96b697d7cb7938d525a2f31aaf161d0",
    );
}

#[test]
fn test_md4_known_answers() {
    let Some(md) = legacy("MD4", md4) else {
        return;
    };
    assert_digest(md, b"", "31d6cfe0d16ae931b73c59d7e0c089c0");
    assert_digest(md, b"abc", "a448017aaf21d8525fc10ae87aa6729d");
}

#[test]
fn test_md2_known_answers() {
    // MD2 is compiled out of most OpenSSL builds, legacy provider included.
    load_legacy_provider();
    let Some(md) = md2() else {
        tracing::warn!("MD2 unavailable, skipping");
        return;
    };
    assert_digest(md, b"", "8350e5a3e24c153df2275c9f80692773");
    assert_digest(md, b"abc", "da853b0d3f88d99b30283a69e6ded6bb");
}

#[test]
fn test_md_family_sizes() {
    load_legacy_provider();
    for (md, block_len) in [(md2(), 16), (md4(), 64), (md5(), 64)] {
        if let Some(md) = md {
            assert_eq!(md.digest_len(), 16, "{}", md.name());
            assert_eq!(md.block_len(), block_len, "{}", md.name());
        }
    }
}
