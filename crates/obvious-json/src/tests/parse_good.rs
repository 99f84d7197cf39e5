#![allow(clippy::float_cmp)]

use rstest::rstest;

use super::utils::{approx_eq, from_reference, reference_options, valid, valid_with};
use crate::{Map, Value};

#[rstest]
#[case("0", 0.0, 1)]
#[case("-0", 0.0, 2)]
#[case("0.5", 0.5, 3)]
#[case("1e3", 1000.0, 3)]
#[case("1e-3", 0.001, 4)]
#[case("01", 0.0, 1)]
#[case("-7 ", -7.0, 3)]
fn number_edge_cases(#[case] input: &str, #[case] expected: f64, #[case] consumed: usize) {
    assert_eq!(valid(input), (Value::Number(expected), consumed));
}

#[test]
fn second_decimal_point_ends_the_number() {
    let (value, consumed) = valid("1.2.3");
    assert!(approx_eq(&value, &Value::Number(1.2)));
    assert_eq!(consumed, 3);
}

#[test]
fn unknown_escape_passes_through() {
    assert_eq!(valid(r#""\q""#), (Value::from("q"), 4));
}

#[test]
fn keyword_prefix_matches() {
    assert_eq!(valid("truefoo"), (Value::Boolean(true), 4));
    assert_eq!(valid("nullable"), (Value::Null, 4));
    assert_eq!(valid("falsey"), (Value::Boolean(false), 5));
}

#[test]
fn duplicate_keys_collapse_to_last_value() {
    let mut expected = Map::new();
    expected.insert("a".into(), Value::Number(2.0));
    assert_eq!(valid(r#"{"a":1,"a":2}"#).0, Value::Object(expected));
}

#[test]
fn test_empty_object() {
    assert_eq!(valid("{}").0, Value::Object(Map::new()));
}

#[test]
fn test_multiple_properties() {
    let mut map = Map::new();
    map.insert("abc".into(), Value::Number(1.0));
    map.insert("def".into(), Value::Number(2.0));
    assert_eq!(valid(r#"{"abc":1,"def":2}"#).0, Value::Object(map));
}

#[test]
fn test_nested_objects() {
    let mut inner = Map::new();
    inner.insert("b".into(), Value::Number(2.0));

    let mut outer = Map::new();
    outer.insert("a".into(), Value::Object(inner));

    assert_eq!(valid(r#"{"a":{"b":2}}"#).0, Value::Object(outer));
}

#[test]
fn test_arrays() {
    assert_eq!(valid("[]").0, Value::Array(vec![]));
    assert_eq!(valid("[1]").0, Value::Array(vec![Value::Number(1.0)]));
    assert_eq!(
        valid("[1,[2,3]]").0,
        Value::Array(vec![
            Value::Number(1.0),
            Value::Array(vec![Value::Number(2.0), Value::Number(3.0)]),
        ])
    );
}

#[test]
fn test_strings_keep_non_ascii_verbatim() {
    assert_eq!(valid(r#""日本語 ünïcödé 🎉""#).0, Value::from("日本語 ünïcödé 🎉"));
}

#[test]
fn test_top_level_whitespace_is_part_of_the_length() {
    assert_eq!(valid("  \"x\"\n").1, 6);
    assert_eq!(valid("\t[ ]\t").1, 5);
}

// Documents from the JSON test suite's accepted set, compared against
// serde_json with unicode escapes decoded.
#[rstest]
#[case(r#"[[]   ]"#)]
#[case(r#"[""]"#)]
#[case(r#"["a"]"#)]
#[case(r#"[false]"#)]
#[case(r#"[null, 1, "1", {}]"#)]
#[case(r#"[1E22]"#)]
#[case(r#"[1E-2]"#)]
#[case(r#"[1e+2]"#)]
#[case(r#"[-0]"#)]
#[case(r#"[-123]"#)]
#[case(r#"[123.456789]"#)]
#[case(r#"[123e65]"#)]
#[case(r#"[0e+1]"#)]
#[case(r#"{"asd":"sdf", "dfg":"fgh"}"#)]
#[case(r#"{"a":[]}"#)]
#[case(r#"{"title":"\u041f\u043e\u043b\u0442\u043e\u0440\u0430 \u0417\u0435\u043c\u043b\u0435\u043a\u043e\u043f\u0430" }"#)]
#[case(r#"["\u0012"]"#)]
#[case(r#"["\uD801\udc37"]"#)]
#[case(r#"["\"\\\/\b\f\n\r\t"]"#)]
#[case(r#"["a/*b*/c/*d//e"]"#)]
#[case(r#"[ "asd"]"#)]
#[case(" [1\n]")]
#[case(r#"{"x":[{"id": "x"}], "id": "x"}"#)]
#[case(r#"{"a":"b","a":"c"}"#)]
fn accepted_documents_match_reference(#[case] input: &str) {
    let reference: serde_json::Value = serde_json::from_str(input).unwrap();
    let (value, consumed) = valid_with(reference_options(), input);
    assert_eq!(consumed, input.len());
    assert!(
        approx_eq(&value, &from_reference(reference.clone())),
        "{input}: {value:?} != {reference:?}"
    );
}

#[test]
fn generated_records_match_reference() {
    let mut text = String::from("[");
    for i in 0..50 {
        text.push_str(&format!(
            r#"{{"A": 12345.6789e-12, "H": "this is \"a string\" \u00e9\u00e9", "P": true, "i": {i}, "Z": ""}},"#
        ));
    }
    text.push_str("{}]");

    let reference: serde_json::Value = serde_json::from_str(&text).unwrap();
    let (value, consumed) = valid_with(reference_options(), &text);
    assert_eq!(consumed, text.len());
    assert!(approx_eq(&value, &from_reference(reference)));
    assert_eq!(value[7]["H"], Value::from("this is \"a string\" \u{e9}\u{e9}"));
}
