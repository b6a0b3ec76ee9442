use null_zero::Uint;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Account {
    id: Uint,
    #[serde(default)]
    quota: Uint,
}

#[test]
fn json_struct_fields() {
    let acc: Account = serde_json::from_value(json!({"id": 7, "quota": null})).unwrap();
    assert_eq!(acc.id, Uint::new(7, true));
    assert_eq!(acc.quota, Uint::absent());

    let acc: Account = serde_json::from_str(r#"{"id": 0}"#).unwrap();
    assert_eq!(acc.id, Uint::new(0, true));
    assert_eq!(acc.quota, Uint::absent());
}

#[test]
fn json_struct_serializes_absent_as_zero() {
    let acc = Account {
        id: Uint::from_value(9),
        quota: Uint::absent(),
    };
    assert_eq!(serde_json::to_value(&acc).unwrap(), json!({"id": 9, "quota": 0}));
}

#[test]
fn json_struct_rejects_wrong_types() {
    assert!(serde_json::from_str::<Account>(r#"{"id": "7"}"#).is_err());
    assert!(serde_json::from_str::<Account>(r#"{"id": -7}"#).is_err());
    assert!(serde_json::from_str::<Account>(r#"{"id": 7.5}"#).is_err());
    assert!(serde_json::from_str::<Account>(r#"{"id": true}"#).is_err());
}

#[test]
fn json_option_wrapper() {
    let v: Vec<Option<Uint>> = serde_json::from_str("[1, null]").unwrap();
    assert_eq!(v, vec![Some(Uint::new(1, true)), None]);
}

#[test]
fn toml_struct_fields() {
    let acc: Account = toml::from_str("id = 12345\nquota = 0\n").unwrap();
    assert_eq!(acc.id, Uint::new(12345, true));
    assert_eq!(acc.quota, Uint::new(0, true));

    assert!(toml::from_str::<Account>("id = -1\n").is_err());
    assert!(toml::from_str::<Account>("id = \"1\"\n").is_err());

    let out = toml::to_string(&Account {
        id: Uint::from_value(3),
        quota: Uint::absent(),
    })
    .unwrap();
    assert_eq!(out, "id = 3\nquota = 0\n");
}

#[derive(Debug, Deserialize, PartialEq)]
struct Row {
    id: Uint,
}

#[test]
fn omitted_field_decodes_absent() {
    let row: Row = serde_json::from_str("{}").unwrap();
    assert_eq!(row.id, Uint::absent());

    let row: Row = serde_json::from_str(r#"{"id": null}"#).unwrap();
    assert_eq!(row.id, Uint::absent());

    let row: Row = serde_json::from_str(r#"{"id": 0}"#).unwrap();
    assert_eq!(row.id, Uint::new(0, true));

    let row: Row = toml::from_str("").unwrap();
    assert_eq!(row.id, Uint::absent());
}
