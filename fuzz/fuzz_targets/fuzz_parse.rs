#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for document parsing.
//!
//! Arbitrary bytes must either parse into a mapping-rooted document or be
//! rejected with a parse error, never panic.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_parse

use libfuzzer_sys::fuzz_target;
use yamlnav::{Kind, ParseOptions, parse, parse_with};

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }

    match parse(data) {
        Ok(doc) => {
            assert_eq!(doc.root().kind(), Kind::Mapping);
            // Every entry must be reachable through its own child node.
            for (_, child) in doc.root().entries() {
                assert!(child.exists());
                let _ = child.string();
                let _ = child.int();
                let _ = child.bool();
            }
        }
        Err(err) => assert!(err.is_parse(), "unexpected error kind: {err}"),
    }

    let raw = ParseOptions::new().merge_keys(false).allow_empty(false);
    if let Err(err) = parse_with(data, &raw) {
        assert!(err.is_parse(), "unexpected error kind: {err}");
    }
});
