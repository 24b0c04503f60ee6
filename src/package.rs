//! Go package name inference.
//! Derives the package name of a generated file from its destination, reading
//! the package clause of the Go files in the package directory when the file
//! is generated into the current directory.

use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Component, Path};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::location::GO_EXT;

fn package_clause_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^package[ \t]+([\p{L}_][\p{L}\p{Nd}_]*)").expect("valid package regex")
    })
}

/// Returns true when a line comment holds a build constraint excluding the file.
fn is_ignore_constraint(comment: &str) -> bool {
    let expr = if let Some(expr) = comment.strip_prefix("go:build") {
        expr
    } else if let Some(expr) = comment.trim_start().strip_prefix("+build") {
        expr
    } else {
        return false;
    };

    expr.split(|c: char| c.is_whitespace() || "&|(),".contains(c))
        .any(|term| term == "ignore")
}

/// Reads the package clause of a Go source file.
///
/// Leading line and block comments are skipped. Returns the package name and
/// whether a build constraint excludes the file, or `None` if the first token
/// after the comments is not a package clause.
pub fn read_package_clause(source: &str) -> Option<(String, bool)> {
    let mut rest = source;
    let mut ignored = false;

    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix("//") {
            let (line, tail) = after.split_once('\n').unwrap_or((after, ""));
            ignored |= is_ignore_constraint(line);
            rest = tail;
        } else if let Some(after) = rest.strip_prefix("/*") {
            let (_, tail) = after.split_once("*/")?;
            rest = tail;
        } else {
            break;
        }
    }

    package_clause_regex()
        .captures(rest)
        .map(|caps| (caps[1].to_string(), ignored))
}

fn is_buildable_file_name(name: &str) -> bool {
    name.ends_with(GO_EXT)
        && !name.ends_with("_test.go")
        && !name.starts_with('_')
        && !name.starts_with('.')
}

/// Inspects the Go package residing in `dir` and returns its name.
///
/// Test files, files starting with `_` or `.`, and files excluded by an
/// `ignore` build constraint are not considered.
///
/// # Errors
/// * `Error::IoError` if the directory or one of its files cannot be read
/// * `Error::PackageInspection` if a Go file has no package clause
/// * `Error::NoGoFiles` if no buildable Go file exists
/// * `Error::MultiplePackages` if the files disagree on the package name
pub fn inspect_package<P: AsRef<Path>>(dir: P) -> Result<String> {
    let dir = dir.as_ref();
    debug!("Inspecting Go package in '{}'", dir.display());

    let mut entries = fs::read_dir(dir)?.collect::<std::result::Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if !is_buildable_file_name(file_name) || !entry.file_type()?.is_file() {
            continue;
        }

        let source = fs::read_to_string(entry.path())?;
        let (name, ignored) = read_package_clause(&source).ok_or_else(|| {
            Error::PackageInspection(format!(
                "{}: expected 'package' clause",
                entry.path().display()
            ))
        })?;

        if ignored {
            debug!("Skipping '{}' excluded by build constraint", file_name);
            continue;
        }
        if !names.contains(&name) {
            names.push(name);
        }
    }

    match names.len() {
        0 => Err(Error::NoGoFiles { dir: dir.display().to_string() }),
        1 => Ok(names.remove(0)),
        _ => Err(Error::MultiplePackages { dir: dir.display().to_string(), names }),
    }
}

/// Lexically cleans the parent directory of `dest` into its segments.
/// Returns `None` for a rooted path whose cleaned form is the root itself.
fn parent_segments(dest: &str) -> Option<Vec<String>> {
    let parent = Path::new(dest).parent().unwrap_or_else(|| Path::new(""));
    let mut segments: Vec<String> = Vec::new();
    let mut rooted = false;

    for component in parent.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match segments.last() {
                Some(last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push("..".to_string()),
            },
            Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
        }
    }

    if rooted && segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

/// Infers the package name of a file generated at `dest`.
///
/// # Arguments
/// * `dest` - Normalized destination location
/// * `package_dir` - Directory inspected when `dest` lives in the current directory
///
/// # Returns
/// * `Result<String>` - The last segment of the destination's directory, or
///   the name of the package found in `package_dir`
///
/// # Example
/// ```
/// use gogen::package::infer_package_name;
///
/// assert_eq!(infer_package_name("test/stack.go", ".").unwrap(), "test");
/// ```
pub fn infer_package_name<P: AsRef<Path>>(dest: &str, package_dir: P) -> Result<String> {
    let dest = if dest.is_empty() { "." } else { dest };

    let segments = parent_segments(dest).ok_or_else(|| {
        Error::PackageInspection(format!("cannot infer a package name from '{dest}'"))
    })?;

    match segments.last() {
        None => inspect_package(package_dir),
        Some(last) if last == ".." => Err(Error::PackageInspection(format!(
            "cannot infer a package name from '{dest}'"
        ))),
        Some(last) => Ok(last.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_segments_cleans_path() {
        assert_eq!(parent_segments("a/./b/../c/x.go"), Some(vec!["a".into(), "c".into()]));
        assert_eq!(parent_segments("x.go"), Some(vec![]));
        assert_eq!(parent_segments("./x.go"), Some(vec![]));
        assert_eq!(parent_segments("/x.go"), None);
    }

    #[test]
    fn test_is_ignore_constraint() {
        assert!(is_ignore_constraint("go:build ignore"));
        assert!(is_ignore_constraint(" +build ignore"));
        assert!(is_ignore_constraint("go:build (linux && ignore)"));
        assert!(!is_ignore_constraint("go:build !ignore"));
        assert!(!is_ignore_constraint("go:build linux"));
        assert!(!is_ignore_constraint("ignore this file"));
        assert!(!is_ignore_constraint(" go:build ignore"));
    }

    #[test]
    fn test_is_buildable_file_name() {
        assert!(is_buildable_file_name("stack.go"));
        assert!(!is_buildable_file_name("stack_test.go"));
        assert!(!is_buildable_file_name("_stack.go"));
        assert!(!is_buildable_file_name(".stack.go"));
        assert!(!is_buildable_file_name("stack.rs"));
    }
}
