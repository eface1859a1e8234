// SPDX-License-Identifier: MIT OR Apache-2.0
//! Descent and extraction against whole documents.

use yamlnav::{Error, Kind, MissReason, ParseOptions, Value, parse, parse_with};

const PERSON: &str = "name: smallfish\nage: 99\nbool: true\n";
const NESTED: &str = "bb:\n  cc:\n    dd:\n      - 111\n      - 222\n      - 333\n";
const FULL: &str = "\
name: smallfish
age: 99
bool: true
bb:
    cc:
        dd:
            - 111
            - 222
            - 333
";

#[test]
fn test_scalar_leaves() {
    let doc = parse(PERSON).unwrap();
    assert_eq!(doc.get("name").string().unwrap(), "smallfish");
    assert_eq!(doc.get("age").int().unwrap(), 99);
    assert!(doc.get("bool").bool().unwrap());
}

#[test]
fn test_nested_index() {
    let doc = parse(NESTED).unwrap();
    assert_eq!(
        doc.get_path(["bb", "cc", "dd"]).get_index(1).int().unwrap(),
        222
    );
    assert_eq!(
        doc.get("bb").get("cc").get("dd").get_index(1).int().unwrap(),
        222
    );
}

#[test]
fn test_missing_segment_fails_at_extraction() {
    let doc = parse(NESTED).unwrap();
    let err = doc.get_path(["bb", "cc", "ee"]).string().unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            expected: Kind::String,
            found: Kind::Absent,
            path: doc.get_path(["bb", "cc", "ee"]).path().clone(),
        }
    );
    assert_eq!(err.to_string(), "expected string at `bb.cc.ee`, found nothing");
}

#[test]
fn test_malformed_input() {
    for src in ["a: {b: 1\n", "a: [1, 2\n", "a: 'open\n", "a: b: c\n"] {
        let err = parse(src).unwrap_err();
        assert!(err.is_parse(), "{src:?} gave {err}");
    }
}

#[test]
fn test_scalar_is_not_array() {
    let doc = parse(PERSON).unwrap();
    let err = doc.get("age").array().unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.expected(), Some(Kind::Sequence));
    assert_eq!(err.found(), Some(Kind::Int));
}

#[test]
fn test_full_document() {
    let doc = parse(FULL).unwrap();
    let dd = doc.get_path(["bb", "cc", "dd"]).array().unwrap();
    assert_eq!(dd, &[Value::from(111), Value::from(222), Value::from(333)]);
    assert_eq!(doc.get("age").int().unwrap(), 99);
}

#[test]
fn test_root_map_preserves_order() {
    let doc = parse(FULL).unwrap();
    let keys: Vec<_> = doc
        .root()
        .map()
        .unwrap()
        .keys()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keys, ["name", "age", "bool", "bb"]);
}

#[test]
fn test_chain_after_miss_never_recovers() {
    // `name` exists at the root, but must not be found after a miss.
    let doc = parse(FULL).unwrap();
    let node = doc.get("missing").get("name");
    assert!(!node.exists());
    assert!(node.string().is_err());

    let node = doc.get("age").get("name");
    assert!(!node.exists());
    assert_eq!(
        node.miss().unwrap().reason(),
        MissReason::NotAMapping { found: Kind::Int }
    );
}

#[test]
fn test_index_steps_after_miss_stay_absent() {
    let doc = parse(FULL).unwrap();

    // `bb` would be found at the root; it must not be found after a miss.
    let node = doc.get("missing").get_index(0).get("bb");
    assert!(!node.exists());
    assert_eq!(node.path().to_string(), "missing[0].bb");
    let miss = node.miss().unwrap();
    assert_eq!(miss.reason(), MissReason::MissingKey);
    assert_eq!(miss.at().to_string(), "missing");

    let node = doc.get("age").get_index(0).get_index(0);
    assert_eq!(
        node.miss().unwrap().reason(),
        MissReason::NotASequence { found: Kind::Int }
    );
    assert_eq!(node.miss().unwrap().depth(), 2);

    let node = doc
        .get_path(["bb", "cc", "dd"])
        .get_index(5)
        .get_index(0)
        .get("name");
    assert_eq!(
        node.miss().unwrap().reason(),
        MissReason::IndexOutOfRange { index: 5, len: 3 }
    );
    assert_eq!(node.int().unwrap_err().found(), Some(Kind::Absent));
}

#[test]
fn test_long_missing_chain() {
    let doc = parse(PERSON).unwrap();
    let keys: Vec<String> = (0..50_000).map(|i| format!("k{i}")).collect();

    let node = doc.get_path(&keys);
    assert!(!node.exists());
    assert_eq!(node.path().depth(), keys.len());
    assert_eq!(node.miss().unwrap().depth(), 1);
    assert_eq!(node.miss().unwrap().at().to_string(), "k0");

    let err = node.get_index(0).bool().unwrap_err();
    assert_eq!(err.path().map(yamlnav::Path::depth), Some(keys.len() + 1));
}

#[test]
fn test_negative_index_is_not_from_end() {
    let doc = parse(NESTED).unwrap();
    let dd = doc.get_path(["bb", "cc", "dd"]);
    for index in [-1, -3, -4, 3, 100, isize::MAX, isize::MIN] {
        let node = dd.get_index(index);
        assert!(!node.exists(), "index {index} should miss");
        assert_eq!(node.int().unwrap_err().found(), Some(Kind::Absent));
    }
}

#[test]
fn test_heterogeneous_sequence() {
    let doc = parse("items:\n  - 1\n  - two\n  - 3.5\n  - false\n  - ~\n  - [x]\n  - {k: v}\n").unwrap();
    let items = doc.get("items");
    assert_eq!(items.get_index(0).int().unwrap(), 1);
    assert_eq!(items.get_index(1).string().unwrap(), "two");
    assert!((items.get_index(2).float().unwrap() - 3.5).abs() < f64::EPSILON);
    assert!(!items.get_index(3).bool().unwrap());
    assert!(items.get_index(4).is_null());
    assert_eq!(items.get_index(5).get_index(0).string().unwrap(), "x");
    assert_eq!(items.get_index(6).get("k").string().unwrap(), "v");

    let kinds: Vec<_> = items.elements().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        [
            Kind::Int,
            Kind::String,
            Kind::Float,
            Kind::Bool,
            Kind::Null,
            Kind::Sequence,
            Kind::Mapping
        ]
    );
}

#[test]
fn test_non_string_keys_are_not_matched_by_text() {
    let doc = parse("1: one\ntrue: yes\nname: x\n").unwrap();
    assert!(!doc.get("1").exists());
    assert!(!doc.get("true").exists());
    assert_eq!(doc.get("name").string().unwrap(), "x");
    assert_eq!(doc.root().len(), Some(3));
}

#[test]
fn test_duplicate_keys_rejected() {
    assert!(parse("a: 1\na: 2\n").unwrap_err().is_parse());
}

#[test]
fn test_multiple_documents_rejected() {
    assert!(parse("a: 1\n---\nb: 2\n").unwrap_err().is_parse());
}

#[test]
fn test_anchors_and_aliases() {
    let doc = parse("defaults: &d\n  retries: 3\nservice:\n  settings: *d\n").unwrap();
    assert_eq!(
        doc.get_path(["service", "settings", "retries"]).int().unwrap(),
        3
    );
}

#[test]
fn test_wrap_array_element() {
    let doc = parse("servers:\n  - host: a\n  - host: b\n").unwrap();
    let servers = doc.get("servers").array().unwrap();
    let hosts: Vec<_> = servers
        .iter()
        .map(|v| yamlnav::Node::new(v).get("host").string().unwrap())
        .collect();
    assert_eq!(hosts, ["a", "b"]);
}

#[test]
fn test_strict_options() {
    let options = ParseOptions::new().allow_empty(false);
    assert!(parse_with("", &options).is_err());
    assert!(parse_with("a: 1\n", &options).is_ok());
}

#[test]
fn test_nodes_shared_across_threads() {
    let doc = parse(FULL).unwrap();
    let dd = doc.get_path(["bb", "cc", "dd"]);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..3)
            .map(|i| {
                let dd = &dd;
                s.spawn(move || dd.get_index(i).int().unwrap())
            })
            .collect();
        let sum: i64 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(sum, 666);
    });
}
