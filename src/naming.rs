//! Go identifier validation.
//! Checks names that generators splice into Go source, such as variable names
//! and generic type parameters.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, ErrorCode, Result};

/// Go's reserved keywords.
pub const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Required visibility of a Go identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoExport {
    /// Must start with an upper-case letter.
    Exported,
    /// Must not start with an upper-case letter.
    NotExported,
    /// Either is fine.
    Either,
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").expect("valid identifier regex"))
}

fn generic_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][0-9]*$").expect("valid generic regex"))
}

fn bad(code: ErrorCode, name: &str, reason: &str) -> Error {
    Error::InvalidIdentifier { code, name: name.to_string(), reason: reason.to_string() }
}

/// Checks that `name` can be used as a Go variable name.
///
/// # Arguments
/// * `name` - Candidate identifier
/// * `reserved` - Additional names the generated code already uses
/// * `export` - Required visibility
///
/// # Errors
/// * `Error::InvalidIdentifier` with `ErrorCode::BadId` describing the first failed check
pub fn is_valid_variable_name(name: &str, reserved: &[&str], export: GoExport) -> Result<()> {
    if name.is_empty() {
        return Err(bad(ErrorCode::BadId, name, "name must not be empty"));
    }
    if !identifier_regex().is_match(name) {
        return Err(bad(ErrorCode::BadId, name, "not a Go identifier"));
    }
    if GO_KEYWORDS.contains(&name) {
        return Err(bad(ErrorCode::BadId, name, "is a Go keyword"));
    }
    if reserved.contains(&name) {
        return Err(bad(ErrorCode::BadId, name, "is reserved"));
    }

    let exported = name.chars().next().is_some_and(char::is_uppercase);
    match export {
        GoExport::Exported if !exported => Err(bad(ErrorCode::BadId, name, "must be exported")),
        GoExport::NotExported if exported => {
            Err(bad(ErrorCode::BadId, name, "must not be exported"))
        }
        _ => Ok(()),
    }
}

/// Checks that `name` is a generic type parameter name: one upper-case
/// letter optionally followed by digits.
pub fn is_valid_generic_name(name: &str) -> Result<()> {
    if generic_regex().is_match(name) {
        Ok(())
    } else {
        Err(bad(
            ErrorCode::BadGeneric,
            name,
            "must be an upper-case letter optionally followed by digits",
        ))
    }
}

/// Parses a comma-separated list of generic type parameter names.
///
/// # Example
/// ```
/// use gogen::naming::parse_generics;
///
/// assert_eq!(parse_generics("K, V").unwrap(), vec!["K", "V"]);
/// ```
pub fn parse_generics(list: &str) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();

    for name in list.split(',').map(str::trim) {
        is_valid_generic_name(name)?;
        if names.iter().any(|n| n == name) {
            return Err(bad(ErrorCode::BadGeneric, name, "is declared twice"));
        }
        names.push(name.to_string());
    }

    Ok(names)
}
