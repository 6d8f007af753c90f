//! Error handling for tmplsync.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Custom error types for tmplsync operations.
///
/// Variants ending up in [`crate::report::FileFailure`] are local to one file;
/// everything else aborts the run before the template tree is touched.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur while writing console output
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A file inside one of the trees could not be read or written.
    #[error("Cannot access '{path}': {source}.")]
    FileAccessError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A text file is not valid UTF-8.
    #[error("'{path}' is not valid UTF-8 text: {source}.")]
    DecodeError {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// One of the roots does not exist or is not a directory.
    #[error("{path} is not a directory.")]
    NotADirectoryError { path: String },

    /// A `--var` argument without the `=` separator.
    #[error("--var expects NAME=VALUE, got '{spec}'.")]
    VariableFormatError { spec: String },

    /// A binding with nothing before the `=`.
    #[error("Variable name must not be empty in '{spec}'.")]
    EmptyVariableNameError { spec: String },

    /// Represents errors that occur while loading the variables file or options
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// An exemption pattern failed to compile.
    #[error("Invalid exemption pattern: {0}.")]
    GlobError(#[from] globset::Error),

    /// Directory traversal failed below one of the roots.
    #[error("Directory walk failed: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// At least one file comparison failed during the run.
    #[error("{count} file(s) could not be synchronized.")]
    SyncFailuresError { count: usize },
}

impl Error {
    /// Path of the file this error is about, if it is tied to one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::FileAccessError { path, .. } | Error::DecodeError { path, .. } => {
                Some(path.as_path())
            }
            Error::WalkError(e) => e.path(),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Wraps an io error with the path it happened on.
pub(crate) fn file_err(path: impl Into<PathBuf>, source: io::Error) -> Error {
    Error::FileAccessError {
        path: path.into(),
        source,
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
