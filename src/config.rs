//! Variables file loading.
//! A variables file is a flat JSON or YAML object mapping variable names to
//! scalar values, for example a cookiecutter replay file:
//!
//! ```json
//! { "project_slug": "simplecalc", "module_name": "calc", "use_docker": true }
//! ```

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::vars::VariableBinding;

/// A value allowed in a variables file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Float(x) => write!(f, "{}", x),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

/// Reads a variables file from disk.
///
/// # Errors
/// * `Error::ConfigError` if the file cannot be read or parsed
pub fn load_variables_file<P: AsRef<Path>>(path: P) -> Result<Vec<VariableBinding>> {
    let path = path.as_ref();
    debug!("Loading variables from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("cannot read variables file '{}': {}", path.display(), e))
    })?;
    parse_variables(&content)
}

/// Parses variables file content, trying JSON first and YAML second.
///
/// # Returns
/// * `Result<Vec<VariableBinding>>` - Bindings in file order
///
/// # Errors
/// * `Error::ConfigError` if the content is neither a JSON nor a YAML object
///   of scalars, or if a key is empty
pub fn parse_variables(content: &str) -> Result<Vec<VariableBinding>> {
    let raw: IndexMap<String, ScalarValue> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content).map_err(|e| {
            Error::ConfigError(format!("Invalid variables file format: {}", e))
        })?,
    };

    raw.into_iter()
        .map(|(name, value)| {
            if name.is_empty() {
                return Err(Error::ConfigError(
                    "variable names must not be empty".to_string(),
                ));
            }
            Ok(VariableBinding::new(name, value.to_string()))
        })
        .collect()
}
