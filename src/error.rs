//! Error handling for gogen.
//! Defines the crate error type, the generation failure carrying a partial
//! result, and the result alias used throughout the library.

use std::io;
use thiserror::Error;

use crate::generated::Generated;

/// Codes attached to identifier validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// An identifier is not a valid Go variable name.
    BadId,
    /// A generic type parameter name is invalid.
    BadGeneric,
}

impl ErrorCode {
    /// Returns the numeric value of the code.
    pub fn as_int(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::BadId => write!(f, "BadID"),
            ErrorCode::BadGeneric => write!(f, "BadGeneric"),
        }
    }
}

/// Custom error types for gogen operations.
///
/// This enum represents all possible errors that can occur while generating
/// code. It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty.
    #[error("Invalid parameter in {func}: {reason}.")]
    InvalidParameter { func: String, reason: String },

    /// The library was used in a way it does not support.
    #[error("Invalid usage of {func}: {reason}. {hint}")]
    InvalidUsage { func: String, reason: String, hint: String },

    /// The destination location was empty.
    #[error("Output location must be set.")]
    EmptyLocation,

    /// The destination location names a directory rather than a file.
    #[error("Output location '{loc}' cannot be a directory.")]
    LocationIsDirectory { loc: String },

    /// The destination location does not end with the Go extension.
    #[error("Output location '{loc}' must be a .go file.")]
    NotGoFile { loc: String },

    /// The inspected directory holds no buildable Go files.
    #[error("No buildable Go source files in '{dir}'.")]
    NoGoFiles { dir: String },

    /// The inspected directory mixes several package names.
    #[error("Found multiple packages in '{dir}': {}.", .names.join(", "))]
    MultiplePackages { dir: String, names: Vec<String> },

    /// The package name could not be determined.
    #[error("Package inspection error: {0}.")]
    PackageInspection(String),

    /// A mutator rejected the data before rendering.
    #[error("Mutator error: {0}.")]
    MutatorError(String),

    /// Template parsing or rendering failed.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A data file could not be parsed.
    #[error("Data error: {0}.")]
    DataError(String),

    /// An identifier failed validation.
    #[error("Invalid identifier '{name}' ({code}): {reason}.")]
    InvalidIdentifier { code: ErrorCode, name: String, reason: String },
}

impl Error {
    /// Returns the error code of identifier validation failures.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Error::InvalidIdentifier { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A failed generation together with whatever had been produced so far.
///
/// `generated` is `None` only when generation could not even start; once the
/// destination has been normalized it carries the fixed destination path.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct Failed {
    pub generated: Option<Generated>,
    #[source]
    pub error: Error,
}

impl Failed {
    pub(crate) fn new(generated: Option<Generated>, error: Error) -> Self {
        Self { generated, error }
    }
}

impl From<Failed> for Error {
    fn from(failed: Failed) -> Self {
        failed.error
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
