//! Command-line interface implementation for gogen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::location::OutputLoc;

/// Command-line arguments structure for gogen.
#[derive(Parser, Debug)]
#[command(author, version, about = "gogen: render Go source files from templates", long_about = None)]
pub struct Args {
    /// Path to the template file
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    #[command(flatten)]
    pub output: OutputLoc,

    /// JSON or YAML file holding the template data
    #[arg(short, long, value_name = "DATA")]
    pub data: Option<PathBuf>,

    /// File name used when no output is given. Defaults to the template's file stem
    #[arg(long, value_name = "NAME")]
    pub default_name: Option<String>,

    /// Suffix inserted before the .go extension
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Prefix added to the file name
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Sub-directory to place the file into. Repeat to nest
    #[arg(long = "subdir", value_name = "DIR")]
    pub sub_directories: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let printed = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                if let Err(err) = printed {
                    eprintln!("failed to print help: {}", err);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
