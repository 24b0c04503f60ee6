//! Output location handling.
//! Normalizes destination paths for generated Go files and resolves them from
//! an explicitly passed [`OutputLoc`] configuration.

use clap::Args;
use log::debug;
use std::path::is_separator;

use crate::error::{Error, Result};

/// Extension of Go source files.
pub const GO_EXT: &str = ".go";

/// Splits a location right after its last separator, like `filepath.Split`.
/// The directory part keeps its trailing separator.
pub(crate) fn split_location(loc: &str) -> (&str, &str) {
    match loc.rfind(is_separator) {
        Some(idx) => loc.split_at(idx + 1),
        None => ("", loc),
    }
}

/// Returns the extension of a file name including its dot, like `filepath.Ext`.
/// A leading dot counts, so `.go` has the extension `.go`.
pub(crate) fn extension(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Normalizes a destination location.
///
/// The file name is lower-cased and must carry the `.go` extension; the
/// directory part is returned untouched.
///
/// # Errors
/// * `Error::EmptyLocation` if `loc` is empty
/// * `Error::LocationIsDirectory` if the file name has no extension
/// * `Error::NotGoFile` if the extension is not `.go`
///
/// # Example
/// ```
/// use gogen::location::fix_location;
///
/// assert_eq!(fix_location("out/Stack.go").unwrap(), "out/stack.go");
/// ```
pub fn fix_location(loc: &str) -> Result<String> {
    if loc.is_empty() {
        return Err(Error::EmptyLocation);
    }

    let (before, after) = split_location(loc);
    let after = after.to_lowercase();

    match extension(&after) {
        None => Err(Error::LocationIsDirectory { loc: loc.to_string() }),
        Some(ext) if ext != GO_EXT => Err(Error::NotGoFile { loc: loc.to_string() }),
        Some(_) => Ok(format!("{before}{after}")),
    }
}

/// Output location of a generator run.
///
/// Can be flattened into a clap parser to expose `-o/--output`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLoc {
    /// Destination of the generated Go file
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Whether an explicit output must be given
    #[arg(skip)]
    pub required: bool,
}

impl OutputLoc {
    /// Creates a new output location configuration.
    pub fn new<S: Into<String>>(output: Option<S>, required: bool) -> Self {
        Self { output: output.map(Into::into), required }
    }

    /// Resolves the destination of the generated file.
    ///
    /// # Arguments
    /// * `default_file_name` - Name used when no output was given. `.go` is
    ///   appended when it has no extension.
    ///
    /// # Returns
    /// * `Result<String>` - Normalized destination location
    ///
    /// # Errors
    /// * `Error::InvalidUsage` if the output is required but missing
    /// * Any error of [`fix_location`]
    pub fn resolve(&self, default_file_name: &str) -> Result<String> {
        match self.output.as_deref() {
            Some(output) if !output.is_empty() => fix_location(output),
            _ if self.required => Err(Error::InvalidUsage {
                func: "OutputLoc::resolve()".to_string(),
                reason: "output location was not defined".to_string(),
                hint: "Please pass -o/--output with a .go destination.".to_string(),
            }),
            _ => {
                let (_, file_name) = split_location(default_file_name);
                let loc = if extension(file_name).is_none() {
                    format!("{default_file_name}{GO_EXT}")
                } else {
                    default_file_name.to_string()
                };
                debug!("No output given, falling back to '{}'", loc);
                fix_location(&loc)
            }
        }
    }
}
