//! Generated code and its destination.
//! Provides the path editing helpers applied before writing and the write
//! itself.

use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::location::GO_EXT;

/// Generated code together with its destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    /// Destination location of the generated code.
    pub dest_loc: PathBuf,

    /// Rendered code.
    pub data: Vec<u8>,
}

impl Generated {
    /// Creates a result for `dest_loc` with the given payload.
    pub fn new<P: Into<PathBuf>>(dest_loc: P, data: Vec<u8>) -> Self {
        Self { dest_loc: dest_loc.into(), data }
    }

    fn split(&self) -> (PathBuf, String) {
        let dir = self.dest_loc.parent().map(Path::to_path_buf).unwrap_or_default();
        let file = self
            .dest_loc
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        (dir, file)
    }

    /// Adds a suffix to the file name, keeping the `.go` extension.
    ///
    /// # Arguments
    /// * `suffix` - Inserted before the extension. Nothing is added if empty.
    /// * `sub_directories` - Directories, relative to the current one, to move the file into
    ///
    /// Useful when one generator writes several files next to each other.
    pub fn modify_suffix_path(&mut self, suffix: &str, sub_directories: &[&str]) {
        let (dir, mut file) = self.split();

        if !suffix.is_empty() {
            file = format!("{}{}{}", file.strip_suffix(GO_EXT).unwrap_or(&file), suffix, GO_EXT);
        }

        self.dest_loc = relocate(dir, sub_directories).join(file);
    }

    /// Adds a prefix to the file name.
    ///
    /// # Arguments
    /// * `prefix` - Prepended to the file name. Nothing is added if empty.
    /// * `sub_directories` - Directories, relative to the current one, to move the file into
    pub fn modify_prefix_path(&mut self, prefix: &str, sub_directories: &[&str]) {
        let (dir, file) = self.split();
        self.dest_loc = relocate(dir, sub_directories).join(format!("{prefix}{file}"));
    }

    /// Replaces the file name, keeping the directory.
    ///
    /// # Returns
    /// * `bool` - False, leaving the destination untouched, if `file_name` is empty
    pub fn replace_file_name(&mut self, file_name: &str) -> bool {
        if file_name.is_empty() {
            return false;
        }

        let (dir, _) = self.split();
        self.dest_loc = dir.join(file_name);
        true
    }

    /// Writes the generated code to its destination, creating missing
    /// directories on the way.
    ///
    /// # Errors
    /// * `Error::IoError` if a directory or the file cannot be written
    pub fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.dest_loc.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        debug!("Writing file: {}", self.dest_loc.display());
        fs::write(&self.dest_loc, &self.data)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.dest_loc, fs::Permissions::from_mode(0o644))?;
        }

        Ok(())
    }
}

/// Nests `dir` under `sub_directories`. Roots and prefixes in the
/// sub-directories are dropped so the result always stays under `dir`.
fn relocate(dir: PathBuf, sub_directories: &[&str]) -> PathBuf {
    sub_directories
        .iter()
        .flat_map(|sub| Path::new(sub).components())
        .fold(dir, |mut acc, component| {
            match component {
                Component::Normal(_) | Component::ParentDir => acc.push(component),
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            }
            acc
        })
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
