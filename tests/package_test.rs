use gogen::error::Error;
use gogen::package::{infer_package_name, inspect_package, read_package_clause};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_infer_from_directory() {
    assert_eq!(infer_package_name("test/stack.go", ".").unwrap(), "test");
    assert_eq!(infer_package_name("a/b/c/stack.go", ".").unwrap(), "c");
    assert_eq!(infer_package_name("./queue/stack.go", ".").unwrap(), "queue");
}

#[test]
fn test_infer_from_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("main.go"), "package tools\n\nfunc main() {}\n").unwrap();

    assert_eq!(infer_package_name("stack.go", temp_dir.path()).unwrap(), "tools");
    assert_eq!(infer_package_name("./stack.go", temp_dir.path()).unwrap(), "tools");
}

#[test]
fn test_infer_from_root_fails() {
    assert!(matches!(
        infer_package_name("/stack.go", "."),
        Err(Error::PackageInspection(_))
    ));
}

#[test]
fn test_read_package_clause_skips_comments() {
    let source = "// Code generated by gogen. DO NOT EDIT.\n\n/* block\n package fake */\npackage stack\n";
    assert_eq!(read_package_clause(source), Some(("stack".to_string(), false)));
}

#[test]
fn test_read_package_clause_build_ignore() {
    let source = "//go:build ignore\n\npackage main\n";
    assert_eq!(read_package_clause(source), Some(("main".to_string(), true)));
}

#[test]
fn test_read_package_clause_missing() {
    assert_eq!(read_package_clause("func main() {}\n"), None);
    assert_eq!(read_package_clause("/* unterminated"), None);
}

#[test]
fn test_inspect_package_ignores_tests_and_excluded_files() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("stack.go"), "package stack\n").unwrap();
    fs::write(dir.join("stack_test.go"), "package stack_test\n").unwrap();
    fs::write(dir.join("_scratch.go"), "package scratch\n").unwrap();
    fs::write(dir.join("gen.go"), "//go:build ignore\n\npackage main\n").unwrap();
    fs::write(dir.join("notes.txt"), "package notes\n").unwrap();

    assert_eq!(inspect_package(dir).unwrap(), "stack");
}

#[test]
fn test_inspect_package_no_go_files() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(inspect_package(temp_dir.path()), Err(Error::NoGoFiles { .. })));
}

#[test]
fn test_inspect_package_multiple_packages() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.go"), "package alpha\n").unwrap();
    fs::write(temp_dir.path().join("b.go"), "package beta\n").unwrap();

    match inspect_package(temp_dir.path()) {
        Err(Error::MultiplePackages { names, .. }) => assert_eq!(names, vec!["alpha", "beta"]),
        other => panic!("Expected MultiplePackages, got {:?}", other),
    }
}

#[test]
fn test_inspect_package_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    assert!(matches!(inspect_package(missing), Err(Error::IoError(_))));
}

#[test]
fn test_spaced_go_build_is_not_a_constraint() {
    let source = "// go:build ignore\n\npackage main\n";
    assert_eq!(read_package_clause(source), Some(("main".to_string(), false)));

    let source = "// +build ignore\n\npackage main\n";
    assert_eq!(read_package_clause(source), Some(("main".to_string(), true)));
}
