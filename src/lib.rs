//! tmplsync propagates edits made in a rendered project back into the
//! template it was generated from, turning rendered values back into
//! placeholders. It never creates files in the template and reports files
//! that exist on only one side.

/// Command-line interface module for tmplsync
pub mod cli;

/// Variables file loading (JSON or YAML)
pub mod config;

pub mod constants;

/// Colored unified diffs
pub mod diff;

/// Error types and handling for tmplsync
pub mod error;

/// Exempt file patterns and excluded directories
pub mod ignore;

pub mod logger;

/// Core synchronization of a template tree with an expanded tree
pub mod processor;

/// Per-file outcomes and the final report
pub mod report;

/// Path component substitution
pub mod translate;

/// Variable bindings and substitution tables
pub mod vars;

/// Recursive file enumeration
pub mod walker;
