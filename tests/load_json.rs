use json_helpers::{
    load_json, load_json_async, load_json_or_default, to_pretty_string, LoadErrorKind,
};
use serde::{Deserialize, Serialize};
use std::{error::Error as _, fs};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: i64,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
struct Renamed {
    #[serde(rename = "userName")]
    user_name: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[test]
fn loads_person_from_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("person.json");
    fs::write(&path, r#"{"name": "Alice", "age": 25}"#).expect("write");

    let person: Person = load_json(&path).expect("load");
    assert_eq!(person.name, "Alice");
    assert_eq!(person.age, 25);
}

#[test]
fn loaded_person_prints_in_declaration_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("person.json");
    fs::write(&path, r#"{"age": 25, "name": "Alice"}"#).expect("write");

    let person: Person = load_json(&path).expect("load");
    assert_eq!(
        to_pretty_string(&person).expect("print"),
        "{\n  \"name\": \"Alice\",\n  \"age\": 25\n}"
    );
}

#[test]
fn matches_keys_by_serde_rename() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("renamed.json");
    fs::write(&path, r#"{"userName": "bob", "user_name": "ignored"}"#).expect("write");

    let renamed: Renamed = load_json(&path).expect("load");
    assert_eq!(
        renamed,
        Renamed {
            user_name: "bob".to_string(),
            tags: vec![],
        }
    );
}

#[test]
fn loads_arrays_and_scalars() {
    let temp = tempfile::tempdir().expect("tempdir");
    let list = temp.path().join("list.json");
    let scalar = temp.path().join("scalar.json");
    fs::write(&list, "[1, 2, 3]").expect("write");
    fs::write(&scalar, "true").expect("write");

    assert_eq!(load_json::<Vec<u32>, _>(&list).expect("load"), vec![1, 2, 3]);
    assert!(load_json::<bool, _>(&scalar).expect("load"));
}

#[test]
fn nonexistent_path_reports_open_failure_with_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("missing.json");

    let (person, err) = load_json_or_default::<Person, _>(&path);
    let err = err.expect("error");
    assert_eq!(person, Person::default());
    assert_eq!(err.kind(), LoadErrorKind::Open);
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains(&path.display().to_string()));
    assert!(err.to_string().starts_with("failed to open file "));
    assert!(err.source().is_some());
}

#[test]
fn truncated_json_reports_parse_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("cut.json");
    fs::write(&path, r#"{"a":"#).expect("write");

    let (person, err) = load_json_or_default::<Person, _>(&path);
    let err = err.expect("error");
    assert_eq!(person, Person::default());
    assert_eq!(err.kind(), LoadErrorKind::Parse);
    assert!(err.to_string().starts_with("failed to parse JSON from file "));
}

#[test]
fn shape_mismatch_reports_parse_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("wrong.json");
    fs::write(&path, r#"{"name": "Alice", "age": "twenty-five"}"#).expect("write");

    let err = load_json::<Person, _>(&path).unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Parse);
}

#[tokio::test]
async fn async_loader_shares_the_contract() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("person.json");
    fs::write(&path, r#"{"name": "Alice", "age": 25}"#).expect("write");

    let person: Person = load_json_async(&path).await.expect("load");
    assert_eq!(
        person,
        Person {
            name: "Alice".to_string(),
            age: 25,
        }
    );

    let missing = temp.path().join("missing.json");
    let err = load_json_async::<Person, _>(&missing).await.unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Open);

    fs::write(&path, "{").expect("write");
    let err = load_json_async::<Person, _>(&path).await.unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Parse);
}
