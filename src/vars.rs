//! Variable bindings and the substitution tables built from them.
//!
//! A run needs two tables: one turning rendered values back into placeholders
//! (render→template) and its inverse (template→render). Both are iterated
//! longest source first so that a value such as `calc` cannot eat into a
//! longer value `simplecalc` that contains it.

use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::error::{Error, Result};

/// A user-supplied `NAME=VALUE` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBinding {
    pub name: String,
    pub value: String,
}

impl VariableBinding {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses `NAME=VALUE`, splitting on the first `=`.
    ///
    /// # Errors
    /// * `Error::VariableFormatError` if there is no `=`
    /// * `Error::EmptyVariableNameError` if `NAME` is empty
    pub fn parse(spec: &str) -> Result<Self> {
        let (name, value) = spec.split_once('=').ok_or_else(|| Error::VariableFormatError {
            spec: spec.to_string(),
        })?;
        if name.is_empty() {
            return Err(Error::EmptyVariableNameError {
                spec: spec.to_string(),
            });
        }
        Ok(Self::new(name, value))
    }

    /// The token standing in for this binding in the template.
    pub fn placeholder(&self, namespace: &str) -> String {
        format!("{{{{{}.{}}}}}", namespace, self.name)
    }
}

impl FromStr for VariableBinding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Ordered `(source, destination)` pairs applied by plain string replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    pairs: Vec<(String, String)>,
}

impl SubstitutionTable {
    /// Builds a table ordered by descending source length.
    /// Sources of equal length keep their insertion order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut pairs: Vec<(String, String)> = pairs.into_iter().collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { pairs }
    }

    /// Replaces every occurrence of each source, pair by pair, in table order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (source, destination) in &self.pairs {
            if result.contains(source.as_str()) {
                result = result.replace(source.as_str(), destination);
            }
        }
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(s, d)| (s.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Both substitution directions for one run.
#[derive(Debug, Clone, Default)]
pub struct VariableMap {
    /// Rendered value → placeholder
    pub render_to_template: SubstitutionTable,
    /// Placeholder → rendered value
    pub template_to_render: SubstitutionTable,
}

impl VariableMap {
    /// Builds both tables from bindings. Later bindings of the same name win.
    pub fn build(bindings: &[VariableBinding], namespace: &str) -> Self {
        let mut by_name: IndexMap<&str, &str> = IndexMap::new();
        for binding in bindings {
            by_name.insert(&binding.name, &binding.value);
        }

        let mut render_to_template: IndexMap<String, String> = IndexMap::new();
        let mut template_to_render: IndexMap<String, String> = IndexMap::new();
        for (name, value) in by_name {
            let placeholder = VariableBinding::new(name, value).placeholder(namespace);
            debug!("Binding '{}' -> '{}'", placeholder, value);
            if value.is_empty() {
                warn!("Variable '{}' has an empty value; it will not be substituted back", name);
            } else {
                render_to_template.insert(value.to_string(), placeholder.clone());
            }
            template_to_render.insert(placeholder, value.to_string());
        }

        Self {
            render_to_template: SubstitutionTable::from_pairs(render_to_template),
            template_to_render: SubstitutionTable::from_pairs(template_to_render),
        }
    }

    /// Parses raw `NAME=VALUE` strings and builds the map in one go.
    pub fn from_specs<S: AsRef<str>>(specs: &[S], namespace: &str) -> Result<Self> {
        let bindings = specs
            .iter()
            .map(|spec| VariableBinding::parse(spec.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(&bindings, namespace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_format() {
        let binding = VariableBinding::new("project_slug", "simplecalc");
        assert_eq!(binding.placeholder("cookiecutter"), "{{cookiecutter.project_slug}}");
        assert_eq!(binding.placeholder("baker"), "{{baker.project_slug}}");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let binding: VariableBinding = "url=https://x.org/?a=b".parse().unwrap();
        assert_eq!(binding.name, "url");
        assert_eq!(binding.value, "https://x.org/?a=b");
    }

    #[test]
    fn test_table_order_is_longest_first() {
        let table = SubstitutionTable::from_pairs(vec![
            ("ab".to_string(), "1".to_string()),
            ("abcd".to_string(), "2".to_string()),
            ("xy".to_string(), "3".to_string()),
        ]);
        let sources: Vec<&str> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(sources, vec!["abcd", "ab", "xy"]);
    }
}
