/// Extended-JSON boundary tests for documents.
use chrono::DateTime;
use mapdoc_core::{Document, DocumentValue, MapdocError, ObjectId, Scalar};

// ============================================================================
// Plain roundtrips
// ============================================================================

#[test]
fn json_flat_roundtrip() {
    let doc: Document = [
        ("name", DocumentValue::from("Ann")),
        ("age", 42i64.into()),
        ("active", true.into()),
        ("score", 0.5f64.into()),
        ("note", DocumentValue::Scalar(Scalar::Null)),
    ]
    .into_iter()
    .collect();

    let s = doc.to_json_string().unwrap();
    assert_eq!(Document::from_json_str(&s).unwrap(), doc);
}

#[test]
fn json_preserves_entry_order() {
    let doc: Document = [("z", 1i64), ("a", 2i64), ("m", 3i64)].into_iter().collect();
    let back = Document::from_json_str(&doc.to_json_string().unwrap()).unwrap();
    let keys: Vec<&str> = back.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn json_nested_document_and_array() {
    let inner: Document = [("city", "NY")].into_iter().collect();
    let mut doc = Document::new();
    doc.insert("addr", inner);
    doc.insert(
        "tags",
        vec![DocumentValue::from("a"), DocumentValue::from("b")],
    );

    let s = doc.to_json_string().unwrap();
    assert_eq!(Document::from_json_str(&s).unwrap(), doc);
}

// ============================================================================
// Extended scalars
// ============================================================================

#[test]
fn json_objectid_roundtrip() {
    let oid = ObjectId::from_bytes([0xab; 12]);
    let mut doc = Document::new();
    doc.insert("_id", oid);

    let s = doc.to_json_string().unwrap();
    assert!(s.contains(r#""$oid":"abababababababababababab""#));
    assert_eq!(Document::from_json_str(&s).unwrap(), doc);
}

#[test]
fn json_datetime_roundtrip() {
    let when = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
    let mut doc = Document::new();
    doc.insert("at", when);

    let s = doc.to_json_string().unwrap();
    assert!(s.contains("$date"));
    assert_eq!(Document::from_json_str(&s).unwrap(), doc);
}

#[test]
fn json_binary_roundtrip() {
    let mut doc = Document::new();
    doc.insert("blob", Scalar::Binary(vec![0, 1, 2, 254, 255]));

    let s = doc.to_json_string().unwrap();
    assert!(s.contains("$binary"));
    assert_eq!(Document::from_json_str(&s).unwrap(), doc);
}

#[test]
fn json_integral_numbers_come_back_as_int64() {
    let mut doc = Document::new();
    doc.insert("n", Scalar::Int32(7));

    let back = Document::from_json_str(&doc.to_json_string().unwrap()).unwrap();
    assert_eq!(back.get("n"), Some(&DocumentValue::Scalar(Scalar::Int64(7))));
}

#[test]
fn json_nan_degrades_to_null() {
    let mut doc = Document::new();
    doc.insert("bad", f64::NAN);

    let back = Document::from_json_str(&doc.to_json_string().unwrap()).unwrap();
    assert_eq!(back.get("bad"), Some(&DocumentValue::Scalar(Scalar::Null)));
}

#[test]
fn json_multi_key_object_with_dollar_key_stays_a_document() {
    let back =
        Document::from_json_str(r#"{"wrap":{"$oid":"abababababababababababab","n":1}}"#).unwrap();
    match back.get("wrap") {
        Some(DocumentValue::Document(d)) => {
            assert!(d.contains_key("$oid"));
            assert!(d.contains_key("n"));
        }
        other => panic!("expected nested document, got {other:?}"),
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn json_malformed_oid_is_an_error() {
    let err = Document::from_json_str(r#"{"_id":{"$oid":"nope"}}"#).unwrap_err();
    assert!(matches!(err, MapdocError::ExtendedJson { key: "$oid", .. }));
}

#[test]
fn json_malformed_date_is_an_error() {
    let err = Document::from_json_str(r#"{"at":{"$date":"not a date"}}"#).unwrap_err();
    assert!(matches!(err, MapdocError::ExtendedJson { key: "$date", .. }));
}

#[test]
fn json_malformed_binary_is_an_error() {
    let err = Document::from_json_str(r#"{"blob":{"$binary":"!!!"}}"#).unwrap_err();
    assert!(matches!(err, MapdocError::ExtendedJson { key: "$binary", .. }));
}

#[test]
fn json_non_object_root_is_an_error() {
    let err = Document::from_json_str("[1,2,3]").unwrap_err();
    assert!(matches!(err, MapdocError::RootNotObject { kind: "array" }));
}

#[test]
fn json_invalid_input_is_an_error() {
    let err = Document::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, MapdocError::JsonParse(_)));
}
