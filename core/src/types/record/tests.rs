use super::*;
use serde_json::json;

#[test]
fn json_string_field_is_borrowed() {
    let record = json!({ "title": "Red Panda" });
    let value = record.field("title").unwrap();
    assert!(matches!(value, Cow::Borrowed("Red Panda")));
}

#[test]
fn json_scalars_are_coerced() {
    let record = json!({ "year": 1999, "score": 4.5, "done": true });
    assert_eq!(record.field("year").as_deref(), Some("1999"));
    assert_eq!(record.field("score").as_deref(), Some("4.5"));
    assert_eq!(record.field("done").as_deref(), Some("true"));
}

#[test]
fn json_missing_null_and_compound_fields_are_none() {
    let record = json!({ "title": null, "tags": ["a"], "meta": { "k": "v" } });
    assert_eq!(record.field("title"), None);
    assert_eq!(record.field("tags"), None);
    assert_eq!(record.field("meta"), None);
    assert_eq!(record.field("name"), None);
}

#[test]
fn json_non_object_has_no_fields() {
    assert_eq!(json!("title").field("title"), None);
    assert_eq!(json!([1, 2]).field("0"), None);
}

#[test]
fn string_maps_expose_fields() {
    let mut hash = HashMap::new();
    hash.insert("name".to_string(), "Sea Otter".to_string());
    assert_eq!(hash.field("name").as_deref(), Some("Sea Otter"));

    let mut tree = BTreeMap::new();
    tree.insert("title".to_string(), "Kelp".to_string());
    assert_eq!(tree.field("title").as_deref(), Some("Kelp"));
    assert_eq!(tree.field("name"), None);
}

#[test]
fn smart_pointers_delegate() {
    let record = Arc::new(json!({ "name": "panda bear" }));
    assert_eq!(record.field("name").as_deref(), Some("panda bear"));

    let boxed: Box<Value> = Box::new(json!({ "name": "otter" }));
    assert_eq!((&boxed).field("name").as_deref(), Some("otter"));
}
