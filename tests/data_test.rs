use gogen::data::{TemplateData, PACKAGE_NAME_KEY};
use gogen::error::Error;
use gogen::{CodeGenerator, PackageNameSetter};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_json() {
    let data = TemplateData::parse(r#"{"type_name": "Stack"}"#).unwrap();
    assert_eq!(data.get("type_name"), Some(&json!("Stack")));
}

#[test]
fn test_parse_yaml() {
    let data = TemplateData::parse("type_name: Stack\nitems:\n  - int\n  - string\n").unwrap();
    assert_eq!(data.get("type_name"), Some(&json!("Stack")));
    assert_eq!(data.get("items"), Some(&json!(["int", "string"])));
}

#[test]
fn test_parse_empty() {
    assert_eq!(TemplateData::parse("").unwrap(), TemplateData::new());
    assert_eq!(TemplateData::parse("  \n").unwrap(), TemplateData::new());
}

#[test]
fn test_parse_rejects_non_objects() {
    assert!(matches!(TemplateData::parse("[1, 2]"), Err(Error::DataError(_))));
    assert!(matches!(TemplateData::parse("key: [unclosed"), Err(Error::DataError(_))));
}

#[test]
fn test_set_package_name() {
    let mut data = TemplateData::new();
    data.set_package_name("stack");
    assert_eq!(data.get(PACKAGE_NAME_KEY), Some(&json!("stack")));
}

#[test]
fn test_load_and_generate() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("data.yaml");
    fs::write(&data_path, "type_name: IntStack\n").unwrap();

    let mut data = TemplateData::load(&data_path).unwrap();
    let generator = CodeGenerator::<TemplateData>::from_template(
        "stack",
        "package {{ package_name }}\n\ntype {{ type_name }} []int\n",
    )
    .unwrap();

    let generated = generator.generate_with_loc("ints/stack.go", &mut data).unwrap();
    assert_eq!(
        String::from_utf8(generated.data).unwrap(),
        "package ints\n\ntype IntStack []int\n"
    );
}
