use anyhow::Result;
use emptiness::{is_empty, Category, Symbol, Value, ValueError};
use serde_json::json;

#[test]
fn json_documents_classify_like_their_values() -> Result<()> {
    let document = json!({
        "title": "   ",
        "count": 0,
        "tags": [],
        "owner": null,
        "flags": { "beta": false }
    });

    let value = Value::from(document.clone());
    assert!(!is_empty(&document));
    assert!(!is_empty(&value));

    let entries = value
        .as_mapping()
        .ok_or_else(|| anyhow::anyhow!("document should import as a mapping"))?;
    for key in ["title", "count", "tags", "owner"] {
        assert!(is_empty(&entries[key]), "{key} should be empty");
        assert!(is_empty(&document[key]), "json {key} should be empty");
    }
    assert!(!is_empty(&entries["flags"]));
    Ok(())
}

#[test]
fn representable_values_round_trip() -> Result<()> {
    let original = json!({
        "name": "probe",
        "sizes": [1, -2, 3.5],
        "nested": { "ok": true, "none": null },
        "large": u64::MAX
    });

    let exported = Value::from(original.clone()).to_json()?;
    assert_eq!(exported, original);
    Ok(())
}

#[test]
fn symbols_refuse_to_export() {
    let value = Value::mapping([("id", Value::from(Symbol::new("id")))]);

    let error = value.to_json().expect_err("symbol should not export");
    assert_eq!(
        error,
        ValueError::Unrepresentable {
            category: Category::Symbolic,
            path: "/id".into(),
        }
    );
    assert_eq!(
        error.to_string(),
        "symbolic value at `/id` has no JSON representation"
    );
}

#[test]
fn undefined_at_the_root_refuses_to_export() {
    let error = Value::Undefined
        .to_json()
        .expect_err("undefined root should not export");
    assert_eq!(
        error,
        ValueError::Unrepresentable {
            category: Category::Absent,
            path: String::new(),
        }
    );
}

#[test]
fn path_segments_are_escaped() {
    let value = Value::mapping([("a/b~c", Value::from(f64::INFINITY))]);

    let error = value.to_json().expect_err("infinity should not export");
    assert_eq!(error.path(), "/a~1b~0c");
}
