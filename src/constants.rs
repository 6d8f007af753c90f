//! Common constants used throughout tmplsync.

/// Bytes read from the head of a file to decide whether it is binary
pub const TEXT_CHUNK: usize = 16 * 1024;

/// Placeholder namespace, as in `{{cookiecutter.name}}`
pub const DEFAULT_NAMESPACE: &str = "cookiecutter";

/// Directory names whose unmapped files are never reported
pub const DEFAULT_EXCLUDED_DIRS: [&str; 2] = [".venv", ".mypy_cache"];

/// File names that are never compared or written
pub const DEFAULT_EXEMPT_FILES: [&str; 1] = ["README.md"];
