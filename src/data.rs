//! Dynamic template data.
//! Loads generator data from JSON or YAML files for templates whose data has
//! no Rust type of its own.

use log::debug;
use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::generator::PackageNameSetter;

/// Key under which the inferred package name is stored.
pub const PACKAGE_NAME_KEY: &str = "package_name";

/// Data as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateData(pub serde_json::Map<String, serde_json::Value>);

impl TemplateData {
    /// Creates empty data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: serde_json::Value) -> Option<serde_json::Value> {
        self.0.insert(key.into(), value)
    }

    /// Parses data from JSON, falling back to YAML.
    ///
    /// # Errors
    /// * `Error::DataError` if the content is neither, or is not an object
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let value: serde_json::Value = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| Error::DataError(format!("Invalid data format: {}", e)))?,
        };

        match value {
            serde_json::Value::Object(map) => Ok(Self(map)),
            serde_json::Value::Null => Ok(Self::new()),
            other => Err(Error::DataError(format!("expected an object, found {}", other))),
        }
    }

    /// Loads data from a JSON or YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading data from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

impl PackageNameSetter for TemplateData {
    fn set_package_name(&mut self, pkg_name: &str) {
        self.0.insert(PACKAGE_NAME_KEY.to_string(), serde_json::Value::String(pkg_name.to_string()));
    }
}
