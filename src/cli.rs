//! Command-line interface implementation for touch.
//! Provides argument parsing and help text formatting using clap.

use crate::config::config_path;
use clap::{error::ErrorKind, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for touch.
#[derive(Parser, Debug)]
#[command(
    name = "touch",
    author,
    version,
    about = "touch: create a file with a header generated from touch.conf",
    long_about = None
)]
pub struct Args {
    /// File to create
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Configuration file to use instead of the one next to the executable
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing file without asking for confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Builds the clap command, with the resolved configuration path in the help text.
pub fn command() -> clap::Command {
    Args::command().after_help(format!(
        "Customize the touch command using the configuration file {}",
        config_path().display()
    ))
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the usage text if no file name is given
/// * With clap's default error handling for other argument errors,
///   including `--help` and `--version` which exit with status 0
pub fn get_args() -> Args {
    let parsed = command()
        .try_get_matches()
        .and_then(|matches| Args::from_arg_matches(&matches));

    match parsed {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("Error: No file name provided");
                command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
