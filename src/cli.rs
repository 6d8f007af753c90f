//! Command-line interface implementation for tmplsync.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXEMPT_FILES, DEFAULT_NAMESPACE};
use crate::processor::SyncOptions;

/// Command-line arguments structure for tmplsync.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tmplsync: carry edits from a rendered project back into its template",
    long_about = None
)]
pub struct Args {
    /// Template root, with placeholders in file names and contents
    #[arg(long, value_name = "DIR")]
    pub template_dir: PathBuf,

    /// Rendered project root
    #[arg(long, value_name = "DIR")]
    pub expanded_dir: PathBuf,

    /// Template variable and its rendered value; may be repeated
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// JSON or YAML file of variables; --var entries take precedence
    #[arg(long, value_name = "FILE")]
    pub vars_file: Option<PathBuf>,

    /// Show diffs and notices, but do not write any files
    #[arg(long)]
    pub diff_only: bool,

    /// Placeholder namespace, as in {{NAMESPACE.name}}
    #[arg(long, value_name = "NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Directory name whose unmapped files are not reported; may be repeated
    #[arg(long = "exclude-dir", value_name = "NAME", default_values = DEFAULT_EXCLUDED_DIRS)]
    pub exclude_dirs: Vec<String>,

    /// File name glob that is never compared or written; may be repeated
    #[arg(long = "exempt", value_name = "GLOB", default_values = DEFAULT_EXEMPT_FILES)]
    pub exempt: Vec<String>,

    /// Disable colored diff output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Collects the run options out of the parsed arguments.
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            diff_only: self.diff_only,
            excluded_dirs: self.exclude_dirs.clone(),
            exempt_patterns: self.exempt.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
