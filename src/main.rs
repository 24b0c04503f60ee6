//! gogen's entry point.
//! Renders one template file with data from a JSON or YAML file and writes the
//! resulting Go file.

use gogen::{
    cli::{get_args, Args},
    data::TemplateData,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    CodeGenerator,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads the template and the data
/// 2. Generates the code for the configured output
/// 3. Applies the suffix, prefix and sub-directory edits
/// 4. Writes the file
fn run(args: Args) -> Result<()> {
    let template_name = args
        .template
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidParameter {
            func: "run()".to_string(),
            reason: format!("'{}' is not a template file", args.template.display()),
        })?;
    let source = std::fs::read_to_string(&args.template)?;

    let mut data = match &args.data {
        Some(path) => TemplateData::load(path)?,
        None => TemplateData::new(),
    };

    let generator = CodeGenerator::<TemplateData>::from_template(template_name.clone(), source)?;
    let default_name = args.default_name.unwrap_or(template_name);

    let mut generated = generator.generate(&args.output, &default_name, &mut data)?;

    let sub_directories: Vec<&str> = args.sub_directories.iter().map(String::as_str).collect();
    generated.modify_suffix_path(&args.suffix, &sub_directories);
    generated.modify_prefix_path(&args.prefix, &[]);

    generated.write_file()?;

    println!("Generated: '{}'", generated.dest_loc.display());
    Ok(())
}
