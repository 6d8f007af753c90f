//! tmplsync's main application entry point and orchestration logic.
//! Handles command-line argument parsing, variable loading, the sync run
//! and the final report.

use std::io::{self, Write};

use tmplsync::{
    cli::{get_args, Args},
    config::load_variables_file,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::Synchronizer,
    vars::{VariableBinding, VariableMap},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Bindings from the variables file first, then `--var`, so that the command
/// line wins on repeated names.
fn collect_bindings(args: &Args) -> Result<Vec<VariableBinding>> {
    let mut bindings = match &args.vars_file {
        Some(path) => load_variables_file(path)?,
        None => Vec::new(),
    };
    for spec in &args.vars {
        bindings.push(VariableBinding::parse(spec)?);
    }
    if bindings.is_empty() {
        return Err(Error::ConfigError(
            "at least one --var NAME=VALUE or --vars-file is required".to_string(),
        ));
    }
    Ok(bindings)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the substitution tables from the bindings
/// 2. Validates both roots
/// 3. Walks the expanded tree, printing diffs and updating the template
/// 4. Walks the template tree for files missing from the expanded tree
/// 5. Prints the report
fn run(args: Args) -> Result<()> {
    let bindings = collect_bindings(&args)?;
    let variables = VariableMap::build(&bindings, &args.namespace);
    let options = args.sync_options();

    let synchronizer =
        Synchronizer::new(&args.template_dir, &args.expanded_dir, &variables, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = synchronizer.run(&mut out)?;
    report.write_summary(&mut out)?;
    out.flush()?;

    if report.has_failures() {
        return Err(Error::SyncFailuresError {
            count: report.failures.len(),
        });
    }
    Ok(())
}
