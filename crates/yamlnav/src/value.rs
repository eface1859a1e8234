// SPDX-License-Identifier: MIT OR Apache-2.0
//! Classification of parser values.

use serde_yaml::Value;
use serde_yaml::value::TaggedValue;
use yamlnav_core::Kind;

/// Classify a parsed value.
///
/// Explicit tags are looked through, so `!celsius 21.5` is a
/// [`Kind::Float`].
#[must_use]
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(n) if n.is_f64() => Kind::Float,
        Value::Number(_) => Kind::Int,
        Value::String(_) => Kind::String,
        Value::Sequence(_) => Kind::Sequence,
        Value::Mapping(_) => Kind::Mapping,
        Value::Tagged(tagged) => kind_of(&tagged.value),
    }
}

/// Strip any number of explicit tags.
pub(crate) fn untag(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

/// Strip any number of explicit tags from an owned value.
pub(crate) fn into_untagged(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => {
            let TaggedValue { value, .. } = *tagged;
            into_untagged(value)
        }
        other => other,
    }
}

/// Render a mapping key as a path segment.
pub(crate) fn key_label(key: &Value) -> String {
    match untag(key) {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "~".to_owned(),
        other => format!("<{}>", kind_of(other)),
    }
}
