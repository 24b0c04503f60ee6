//! gogen is a helper library for writing Go code generators.
//! It renders a template into Go source, fixes up the output location and the
//! package name, runs pre-render functions on the data, and writes the result.

/// Command-line interface module for the gogen binary
pub mod cli;

/// Dynamic JSON/YAML template data
pub mod data;

/// Error types and handling for gogen
pub mod error;

/// Extension traits for built-in Rust types.
pub mod ext;

/// Generated code and the path editing applied before writing it
pub mod generated;

/// The generation pipeline
pub mod generator;

/// Output location normalization and configuration
pub mod location;

/// Logger setup for the binary
pub mod logger;

/// Go identifier validation
pub mod naming;

/// Package name inference
pub mod package;

/// Template rendering
pub mod renderer;

pub use error::{Error, Failed, Result};
pub use ext::GeneratedExt;
pub use generated::Generated;
pub use generator::{CodeGenerator, DoFunc, PackageNameSetter};
pub use location::OutputLoc;
