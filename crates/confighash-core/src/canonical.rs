//! Canonicalization of rendered artifacts.
//!
//! Renderers emit JSON. Before hashing, the JSON is re-written into the one
//! canonical byte sequence for its value:
//!
//! - Object keys sorted by UTF-8 byte order, recursively
//! - No whitespace
//! - `null` object members dropped, so an unset optional field and an absent
//!   field hash the same
//! - Integers in plain decimal; integral floats (`3.0`, `1e3`) written as
//!   integers
//! - Non-integral and out-of-range floats rejected
//! - Array order preserved; arrays are ordered data
//!
//! # Python Equivalent
//!
//! For inputs without floats or null members:
//!
//! ```python
//! json.dumps(value, sort_keys=True, separators=(",", ":"), ensure_ascii=False)
//! ```

use serde_json::{Map, Number, Value};
use std::io::Write;

use crate::errors::{ConfigHashError, Result};

/// Canonicalize rendered JSON bytes
///
/// # Errors
///
/// Returns `NonCanonicalArtifact` if `bytes` is not a single JSON value or
/// contains a number with no exact integer form.
pub fn canonicalize(bytes: &[u8]) -> Result<Vec<u8>> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ConfigHashError::NonCanonicalArtifact {
            reason: format!("artifact is not valid JSON: {}", e),
        })?;
    canonicalize_value(&value)
}

/// Canonicalize an already parsed JSON value
///
/// # Errors
///
/// Returns `NonCanonicalArtifact` for numbers with no exact integer form.
pub fn canonicalize_value(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_value(value, &mut out)?;
    Ok(out)
}

fn write_value(v: &Value, out: &mut Vec<u8>) -> Result<()> {
    match v {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => write_number(n, out)?,
        Value::String(s) => serde_json::to_writer(&mut *out, s)?,
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out)?;
            }
            out.push(b']');
        }
        Value::Object(map) => write_object(map, out)?,
    }
    Ok(())
}

fn write_object(map: &Map<String, Value>, out: &mut Vec<u8>) -> Result<()> {
    let mut members: Vec<(&String, &Value)> =
        map.iter().filter(|(_, v)| !v.is_null()).collect();
    members.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

    out.push(b'{');
    for (i, (key, value)) in members.into_iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        serde_json::to_writer(&mut *out, key)?;
        out.push(b':');
        write_value(value, out)?;
    }
    out.push(b'}');
    Ok(())
}

// Bounds of the f64 range in which every integral value converts to i64
// exactly.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn write_number(n: &Number, out: &mut Vec<u8>) -> Result<()> {
    let written = if let Some(i) = n.as_i64() {
        write!(out, "{}", i)
    } else if let Some(u) = n.as_u64() {
        write!(out, "{}", u)
    } else {
        let f = n.as_f64().unwrap_or(f64::NAN);
        if !f.is_finite() || f.fract() != 0.0 || !(I64_LOWER..I64_UPPER).contains(&f) {
            return Err(ConfigHashError::NonCanonicalArtifact {
                reason: format!("number {} has no exact integer form", n),
            });
        }
        write!(out, "{}", f as i64)
    };
    written.map_err(|e| ConfigHashError::Internal {
        message: format!("writing canonical number: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical_str(input: &str) -> String {
        String::from_utf8(canonicalize(input.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn test_sorts_keys_and_strips_whitespace() {
        assert_eq!(
            canonical_str(r#"{ "tenant": "acme",  "date": "2025-01-15" }"#),
            r#"{"date":"2025-01-15","tenant":"acme"}"#
        );
    }

    #[test]
    fn test_sorts_nested_objects_and_keeps_array_order() {
        assert_eq!(
            canonical_str(r#"{"z":{"y":[3,1,{"w":1,"v":2}]},"a":0}"#),
            r#"{"a":0,"z":{"y":[3,1,{"v":2,"w":1}]}}"#
        );
    }

    #[test]
    fn test_key_order_is_byte_order() {
        assert_eq!(
            canonical_str(r#"{"b":1,"B":2,"a":3,"_":4}"#),
            r#"{"B":2,"_":4,"a":3,"b":1}"#
        );
    }

    #[test]
    fn test_drops_null_members_only() {
        assert_eq!(
            canonical_str(r#"{"a":null,"b":{"c":null},"d":[null]}"#),
            r#"{"b":{},"d":[null]}"#
        );
        assert_eq!(canonical_str("null"), "null");
    }

    #[test]
    fn test_integral_floats_become_integers() {
        assert_eq!(canonical_str(r#"{"x":3.0,"y":1e3,"z":-0.0}"#), r#"{"x":3,"y":1000,"z":0}"#);
    }

    #[test]
    fn test_large_integers_are_kept_exact() {
        assert_eq!(
            canonical_str(r#"[9223372036854775807,18446744073709551615,-9223372036854775808]"#),
            "[9223372036854775807,18446744073709551615,-9223372036854775808]"
        );
    }

    #[test]
    fn test_rejects_fractional_and_huge_numbers() {
        for input in [r#"{"x":1.25}"#, "[0.1]", r#"{"x":1e300}"#] {
            assert!(
                matches!(
                    canonicalize(input.as_bytes()),
                    Err(ConfigHashError::NonCanonicalArtifact { .. })
                ),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rejects_non_json() {
        for input in ["", "{", "not json", "{} {}", "\u{0}"] {
            assert!(matches!(
                canonicalize(input.as_bytes()),
                Err(ConfigHashError::NonCanonicalArtifact { .. })
            ));
        }
    }

    #[test]
    fn test_string_escaping_is_stable() {
        let v = json!({"s": "a\"b\nc\\d", "u": "grüße"});
        let s = String::from_utf8(canonicalize_value(&v).unwrap()).unwrap();
        assert_eq!(s, r#"{"s":"a\"b\nc\\d","u":"grüße"}"#);
    }

    #[test]
    fn test_canonical_output_is_a_fixed_point() {
        let once = canonicalize(br#"{"b":[1,{"d":null,"c":2.0}],"a":"x"}"#).unwrap();
        let twice = canonicalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::{BTreeMap, HashMap};

        proptest! {
            #[test]
            fn insertion_order_does_not_affect_canonical_output(
                pairs in prop::collection::vec(("[a-z]{1,8}", "[a-z0-9]{1,16}"), 1..10)
            ) {
                let hashmap: HashMap<String, String> = pairs.iter().cloned().collect();
                let btreemap: BTreeMap<String, String> = pairs.iter().cloned().collect();

                let from_hash =
                    canonicalize_value(&serde_json::to_value(&hashmap).unwrap()).unwrap();
                let from_btree =
                    canonicalize_value(&serde_json::to_value(&btreemap).unwrap()).unwrap();

                prop_assert_eq!(from_hash, from_btree);
            }

            #[test]
            fn pretty_and_compact_input_agree(
                pairs in prop::collection::vec(("[a-z]{1,5}", -1000i64..1000i64), 1..6)
            ) {
                let map: BTreeMap<String, i64> = pairs.into_iter().collect();
                let compact = serde_json::to_vec(&map).unwrap();
                let pretty = serde_json::to_vec_pretty(&map).unwrap();

                prop_assert_eq!(canonicalize(&compact).unwrap(), canonicalize(&pretty).unwrap());
            }
        }
    }
}
