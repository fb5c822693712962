/// Contract tests for the JSON bridge: tree conversion in both directions,
/// number classification by type tag, key-order preservation, indentation
/// control, and the serde trait integration.
use dynel_core::{from_json_value, to_json_value, Element, ElementError, Type};
use serde_json::{json, Value};

// ============================================================================
// Serialization: scalars
// ============================================================================

#[test]
fn scalars_serialize_compactly() {
    assert_eq!(Element::new().to_json(0).unwrap(), "null");
    assert_eq!(Element::from(true).to_json(0).unwrap(), "true");
    assert_eq!(Element::from(false).to_json(0).unwrap(), "false");
    assert_eq!(Element::from("val").to_json(0).unwrap(), r#""val""#);
}

#[test]
fn int_elements_serialize_without_a_decimal_point() {
    assert_eq!(Element::from(42).to_json(0).unwrap(), "42");
    assert_eq!(Element::from(-7).to_json(0).unwrap(), "-7");
    assert_eq!(Element::from(0).to_json(0).unwrap(), "0");
}

#[test]
fn double_elements_serialize_with_float_formatting() {
    // The type tag decides the representation, not the value: a whole
    // double keeps its decimal point.
    assert_eq!(Element::from(1.0).to_json(0).unwrap(), "1.0");
    assert_eq!(Element::from(9.5).to_json(0).unwrap(), "9.5");
}

#[test]
fn non_finite_doubles_serialize_as_null() {
    assert_eq!(Element::from(f64::NAN).to_json(0).unwrap(), "null");
    assert_eq!(Element::from(f64::INFINITY).to_json(0).unwrap(), "null");
    assert_eq!(Element::from(f64::NEG_INFINITY).to_json(0).unwrap(), "null");
}

// ============================================================================
// Serialization: structures
// ============================================================================

#[test]
fn object_output_follows_insertion_order() {
    let mut obj = Element::from(Type::Object);
    obj.set("zeta", 1).unwrap();
    obj.set("alpha", 2).unwrap();
    obj.set("mid", 3).unwrap();

    assert_eq!(obj.to_json(0).unwrap(), r#"{"zeta":1,"alpha":2,"mid":3}"#);
}

#[test]
fn arrays_drop_their_synthetic_keys() {
    let mut arr = Element::from(Type::Array);
    arr.push_back("val1").unwrap().push_back(42).unwrap();
    assert_eq!(arr.to_json(0).unwrap(), r#"["val1",42]"#);
}

#[test]
fn two_space_indentation_matches_the_standard_layout() {
    let mut arr = Element::from(Type::Array);
    arr.push_back("val1").unwrap();
    arr.push_back(42).unwrap();

    assert_eq!(arr.to_json(2).unwrap(), "[\n  \"val1\",\n  42\n]");
}

#[test]
fn object_with_two_space_indentation() {
    let el = Element::object(
        vec!["key1".into(), "key2".into()],
        vec![Element::from("val1"), Element::from(42)],
    )
    .unwrap();

    assert_eq!(
        el.to_json(2).unwrap(),
        "{\n  \"key1\": \"val1\",\n  \"key2\": 42\n}"
    );
}

#[test]
fn indentation_width_is_caller_selectable() {
    let mut obj = Element::from(Type::Object);
    obj.set("k", 1).unwrap();

    assert_eq!(obj.to_json(4).unwrap(), "{\n    \"k\": 1\n}");
    assert_eq!(obj.to_json(0).unwrap(), r#"{"k":1}"#);
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn parses_a_nested_config_document() {
    let parsed = Element::from_json(r#"{"config":{"key_1":"value_1"}}"#).unwrap();

    assert!(parsed.is_object());
    assert_eq!(parsed.count_children(), 1);
    assert!(parsed.get_key("config").is_object());
    assert_eq!(parsed.get_key("config").get_key("key_1").get_string(), "value_1");

    // Index reads reach the same child.
    assert!(parsed.get(0).is_object());
}

#[test]
fn number_nodes_follow_the_tree_classification() {
    assert!(Element::from_json("1").unwrap().is_int());
    assert!(Element::from_json("-3").unwrap().is_int());
    assert!(Element::from_json("1.0").unwrap().is_double());
    assert!(Element::from_json("2.5").unwrap().is_double());
    assert_eq!(Element::from_json("2.5").unwrap().get_double(), 2.5);

    // Unsigned values beyond i64 fall back to double.
    let huge = Element::from_json("18446744073709551615").unwrap();
    assert!(huge.is_double());
}

#[test]
fn parsed_arrays_receive_synthetic_keys() {
    let arr = Element::from_json(r#"[true,2,"three"]"#).unwrap();
    assert!(arr.is_array());
    assert_eq!(arr.get_keys(), ["~0", "~1", "~2"]);
    assert!(arr.get(0).b());
    assert_eq!(arr.get(1).i(), 2);
    assert_eq!(arr.get(2).s(), "three");
}

#[test]
fn parsed_objects_keep_document_order_and_stamp_keys() {
    let obj = Element::from_json(r#"{"b":1,"a":2}"#).unwrap();
    assert_eq!(obj.get_keys(), ["b", "a"]);
    assert_eq!(obj.get_key("a").key(), "a");
}

#[test]
fn invalid_text_surfaces_a_json_error() {
    let err = Element::from_json("{broken").unwrap_err();
    assert!(matches!(err, ElementError::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn nested_documents_round_trip_structurally() {
    let text = r#"{"name":"dynel","tags":["json",7,null],"nested":{"deep":[{"x":1.5}]},"ok":true}"#;
    let element = Element::from_json(text).unwrap();
    let back = Element::from_json(&element.to_json(0).unwrap()).unwrap();
    assert_eq!(back, element);
    assert_eq!(element.to_json(0).unwrap(), text);
}

#[test]
fn pretty_output_parses_back_identically() {
    let element = Element::from_json(r#"{"a":[1,2,{"b":null}],"c":"d"}"#).unwrap();
    let pretty = element.to_json(2).unwrap();
    assert_eq!(Element::from_json(&pretty).unwrap(), element);
}

// ============================================================================
// Tree-level conversions & serde integration
// ============================================================================

#[test]
fn to_json_value_builds_the_expected_tree() {
    let mut obj = Element::from(Type::Object);
    obj.set("n", 1).unwrap();
    obj.set("list", Element::from(vec![Element::from(true)]))
        .unwrap();

    assert_eq!(to_json_value(&obj), json!({"n": 1, "list": [true]}));
}

#[test]
fn from_json_value_maps_every_node_kind() {
    let value = json!({
        "null": null,
        "flag": false,
        "int": 3,
        "float": 0.5,
        "text": "t",
        "list": [1],
        "inner": {}
    });

    let element = from_json_value(&value);
    assert!(element.is_null_key("null"));
    assert!(element.is_bool_key("flag"));
    assert!(element.is_int_key("int"));
    assert!(element.is_double_key("float"));
    assert!(element.is_string_key("text"));
    assert!(element.is_array_key("list"));
    assert!(element.is_object_key("inner"));
}

#[test]
fn serde_traits_delegate_through_the_bridge() {
    let element = Element::from_json(r#"{"a":1,"b":[true,null]}"#).unwrap();

    let value = serde_json::to_value(&element).unwrap();
    assert_eq!(value, json!({"a": 1, "b": [true, null]}));

    let text = serde_json::to_string(&element).unwrap();
    let back: Element = serde_json::from_str(&text).unwrap();
    assert_eq!(back, element);

    let from_value: Element = serde_json::from_value(Value::Bool(true)).unwrap();
    assert!(from_value.b());
}

#[test]
fn display_renders_compact_json() {
    let element = Element::from_json(r#"{"a":1}"#).unwrap();
    assert_eq!(element.to_string(), r#"{"a":1}"#);
    assert_eq!(format!("{}", Element::from(2.5)), "2.5");
}
