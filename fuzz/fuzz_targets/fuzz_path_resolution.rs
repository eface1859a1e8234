#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for path resolution correctness.
//!
//! The first input line is a path such as `a.b[1].c`, the rest is the
//! document. Node descent must agree with a direct walk of the
//! `serde_yaml::Value` tree.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_path_resolution

use libfuzzer_sys::fuzz_target;
use serde_yaml::Value;
use yamlnav::{Kind, Node, Segment, parse};

/// Split a dotted path into segments; `None` for malformed indices.
fn parse_path(path: &str) -> Option<Vec<Segment>> {
    let mut segments = Vec::new();
    for part in path.split('.').filter(|p| !p.is_empty()) {
        let (key, rest) = part.split_once('[').unwrap_or((part, ""));
        if !key.is_empty() {
            segments.push(Segment::Key(key.to_owned()));
        }
        for index in rest.split('[') {
            if index.is_empty() {
                continue;
            }
            let index = index.strip_suffix(']')?.parse().ok()?;
            segments.push(Segment::Index(index));
        }
    }
    Some(segments)
}

/// Reference lookup straight on the parser's tree.
fn walk<'a>(mut value: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    for segment in segments {
        while let Value::Tagged(tagged) = value {
            value = &tagged.value;
        }
        value = match segment {
            Segment::Key(key) => value.as_mapping()?.get(key.as_str())?,
            Segment::Index(index) => value.as_sequence()?.get(usize::try_from(*index).ok()?)?,
        };
    }
    Some(value)
}

fn descend<'a>(node: &Node<'a>, segments: &[Segment]) -> Node<'a> {
    segments.iter().fold(node.clone(), |node, segment| match segment {
        Segment::Key(key) => node.get(key),
        Segment::Index(index) => node.get_index(*index),
    })
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 20_000 {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (path, body) = input.split_once('\n').unwrap_or((input, ""));
    let Some(segments) = parse_path(path) else {
        return;
    };
    let Ok(doc) = parse(body) else {
        return;
    };

    let node = descend(&doc.root(), &segments);
    match walk(doc.value(), &segments) {
        Some(expected) => {
            assert!(node.exists(), "node missed at {}", node.path());
            assert_eq!(node.kind(), yamlnav::kind_of(expected));
        }
        None => {
            assert!(!node.exists(), "node found a value at {}", node.path());
            assert_eq!(node.kind(), Kind::Absent);
            assert!(node.string().unwrap_err().is_type_mismatch());
        }
    }
    assert_eq!(node.path().depth(), segments.len());
});
