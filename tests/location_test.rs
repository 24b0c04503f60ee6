use gogen::error::Error;
use gogen::location::{fix_location, OutputLoc};

#[test]
fn test_fix_location_lowercases_file_name() {
    assert_eq!(fix_location("Stack.go").unwrap(), "stack.go");
    assert_eq!(fix_location("test/Stack.GO").unwrap(), "test/stack.go");
}

#[test]
fn test_fix_location_rejects_empty() {
    assert!(matches!(fix_location(""), Err(Error::EmptyLocation)));
}

#[test]
fn test_fix_location_rejects_directories() {
    assert!(matches!(fix_location("out/"), Err(Error::LocationIsDirectory { .. })));
    assert!(matches!(fix_location("stack"), Err(Error::LocationIsDirectory { .. })));
}

#[test]
fn test_fix_location_rejects_other_extensions() {
    assert!(matches!(fix_location("stack.rs"), Err(Error::NotGoFile { .. })));
    assert!(matches!(fix_location("out/stack.go.txt"), Err(Error::NotGoFile { .. })));
}

#[test]
fn test_resolve_uses_output() {
    let output = OutputLoc::new(Some("pkg/Queue.go"), true);
    assert_eq!(output.resolve("stack").unwrap(), "pkg/queue.go");
}

#[test]
fn test_resolve_falls_back_to_default() {
    let output = OutputLoc::new(None::<String>, false);
    assert_eq!(output.resolve("Stack").unwrap(), "stack.go");
    assert_eq!(output.resolve("stack.go").unwrap(), "stack.go");

    let output = OutputLoc::new(Some(""), false);
    assert_eq!(output.resolve("stack").unwrap(), "stack.go");
}

#[test]
fn test_resolve_required_output_missing() {
    let output = OutputLoc::new(None::<String>, true);
    assert!(matches!(output.resolve("stack"), Err(Error::InvalidUsage { .. })));
}

#[test]
fn test_resolve_invalid_default() {
    let output = OutputLoc::default();
    assert!(matches!(output.resolve("stack.rs"), Err(Error::NotGoFile { .. })));
}

#[test]
fn test_fix_location_leading_dot_extension() {
    assert_eq!(fix_location(".go").unwrap(), ".go");
    assert_eq!(fix_location("pkg/.GO").unwrap(), "pkg/.go");
    assert!(matches!(fix_location("pkg/.gitignore"), Err(Error::NotGoFile { .. })));
}
