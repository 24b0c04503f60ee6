//! Code generation pipeline.
//! Combines output location handling, package name inference, mutators and
//! template rendering into a single [`CodeGenerator::generate`] call.

use log::debug;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::{Error, Failed, Result};
use crate::generated::Generated;
use crate::location::{fix_location, OutputLoc};
use crate::package::infer_package_name;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

/// Capability every data value handed to a generator must provide.
pub trait PackageNameSetter {
    /// Sets the package name for the generated code.
    fn set_package_name(&mut self, pkg_name: &str);
}

/// Function run on the data before the code is rendered.
pub type DoFunc<T> = Box<dyn Fn(&mut T) -> Result<()>>;

/// Renders Go code from a template and data of type `T`.
pub struct CodeGenerator<T> {
    renderer: Box<dyn TemplateRenderer>,
    do_funcs: Vec<DoFunc<T>>,
    package_dir: PathBuf,
}

impl<T> std::fmt::Debug for CodeGenerator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("template", &self.renderer.name())
            .field("do_funcs", &self.do_funcs.len())
            .field("package_dir", &self.package_dir)
            .finish()
    }
}

impl<T: PackageNameSetter + Serialize> CodeGenerator<T> {
    /// Creates a generator rendering with `renderer`.
    pub fn new(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { renderer, do_funcs: Vec::new(), package_dir: PathBuf::from(".") }
    }

    /// Creates a generator from template source.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse
    pub fn from_template<N: Into<String>, S: Into<String>>(name: N, source: S) -> Result<Self> {
        Ok(Self::new(Box::new(MiniJinjaRenderer::new(name, source)?)))
    }

    /// Sets the directory inspected when code is generated into the current
    /// directory. Defaults to `.`.
    pub fn with_package_dir<P: Into<PathBuf>>(mut self, package_dir: P) -> Self {
        self.package_dir = package_dir.into();
        self
    }

    /// Adds a function to run on the data before rendering. Functions run in
    /// the order they were added.
    pub fn add_do_func<F>(&mut self, do_func: F)
    where
        F: Fn(&mut T) -> Result<()> + 'static,
    {
        self.do_funcs.push(Box::new(do_func));
    }

    /// Number of registered functions.
    pub fn do_func_count(&self) -> usize {
        self.do_funcs.len()
    }

    /// Generates code for the location configured in `output`.
    ///
    /// # Arguments
    /// * `output` - Output location configuration
    /// * `default_file_name` - File name used when `output` holds no location
    /// * `data` - Data to render; receives the inferred package name
    ///
    /// # Errors
    /// * `Error::InvalidParameter` if `default_file_name` is empty
    /// * `Error::InvalidUsage` if the output is required but missing
    /// * Any error of [`CodeGenerator::generate_with_loc`]
    pub fn generate(
        &self,
        output: &OutputLoc,
        default_file_name: &str,
        data: &mut T,
    ) -> std::result::Result<Generated, Failed> {
        if default_file_name.is_empty() {
            return Err(Failed::new(
                None,
                Error::InvalidParameter {
                    func: "CodeGenerator::generate()".to_string(),
                    reason: "default_file_name must not be an empty string".to_string(),
                },
            ));
        }

        let loc = output.resolve(default_file_name).map_err(|e| match e {
            Error::InvalidUsage { .. } => Failed::new(None, e),
            _ => Failed::new(Some(Generated::default()), e),
        })?;
        self.run(loc, data)
    }

    /// Generates code for the destination `loc`.
    ///
    /// # Returns
    /// * `Ok(Generated)` - Destination and rendered code
    /// * `Err(Failed)` - The error, with the partial result once the
    ///   destination has been normalized
    ///
    /// # Errors
    /// * `Error::InvalidParameter` if `loc` is empty
    /// * Location, package inspection, mutator and template errors
    pub fn generate_with_loc(&self, loc: &str, data: &mut T) -> std::result::Result<Generated, Failed> {
        if loc.is_empty() {
            return Err(Failed::new(
                None,
                Error::InvalidParameter {
                    func: "CodeGenerator::generate_with_loc()".to_string(),
                    reason: "loc must not be an empty string".to_string(),
                },
            ));
        }

        let loc = fix_location(loc).map_err(|e| Failed::new(Some(Generated::default()), e))?;
        self.run(loc, data)
    }

    fn run(&self, loc: String, data: &mut T) -> std::result::Result<Generated, Failed> {
        let mut generated = Generated::new(&loc, Vec::new());

        if let Err(e) = self.fill(&loc, data, &mut generated) {
            return Err(Failed::new(Some(generated), e));
        }
        Ok(generated)
    }

    fn fill(&self, loc: &str, data: &mut T, generated: &mut Generated) -> Result<()> {
        let pkg_name = infer_package_name(loc, &self.package_dir)?;
        debug!("Generating '{}' in package '{}'", loc, pkg_name);

        data.set_package_name(&pkg_name);

        for (idx, do_func) in self.do_funcs.iter().enumerate() {
            debug!("Running function {} of {}", idx + 1, self.do_funcs.len());
            do_func(&mut *data)?;
        }

        let context = minijinja::Value::from_serialize(&*data);
        generated.data = self.renderer.render(&context)?.into_bytes();
        Ok(())
    }
}
