use std::io;
use std::path::Path;

use tmplsync::error::Error;
use tmplsync::vars::VariableBinding;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid variables file".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid variables file.");

    let err = Error::NotADirectoryError {
        path: "/tmp/nope".to_string(),
    };
    assert_eq!(err.to_string(), "/tmp/nope is not a directory.");

    let err = Error::SyncFailuresError { count: 2 };
    assert_eq!(err.to_string(), "2 file(s) could not be synchronized.");
}

#[test]
fn test_var_without_separator() {
    let err = VariableBinding::parse("project_slug").unwrap_err();
    assert!(matches!(err, Error::VariableFormatError { .. }));
    assert_eq!(err.to_string(), "--var expects NAME=VALUE, got 'project_slug'.");
}

#[test]
fn test_var_with_empty_name() {
    let err = VariableBinding::parse("=simplecalc").unwrap_err();
    assert!(matches!(err, Error::EmptyVariableNameError { .. }));
}

#[test]
fn test_file_errors_carry_their_path() {
    let err = Error::FileAccessError {
        path: Path::new("/tmp/a.txt").to_path_buf(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.path(), Some(Path::new("/tmp/a.txt")));
    assert!(err.to_string().contains("/tmp/a.txt"));

    assert_eq!(Error::ConfigError("x".to_string()).path(), None);
}
