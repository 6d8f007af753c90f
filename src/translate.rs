//! Maps relative paths between the expanded tree and the template tree.

use std::path::{Component, Path, PathBuf};

use crate::vars::SubstitutionTable;

/// Applies `table` to every component of a relative path.
///
/// Components are substituted one by one so that a value can never match
/// across a path separator. Components that are not valid UTF-8 are kept as
/// they are.
///
/// # Example
/// ```
/// use std::path::Path;
/// use tmplsync::{translate::translate_path, vars::{VariableBinding, VariableMap}};
///
/// let vars = VariableMap::build(&[VariableBinding::new("slug", "calc")], "cookiecutter");
/// let translated = translate_path(Path::new("src/calc/calc_cli.py"), &vars.render_to_template);
/// assert_eq!(
///     translated,
///     Path::new("src/{{cookiecutter.slug}}/{{cookiecutter.slug}}_cli.py")
/// );
/// ```
pub fn translate_path<P: AsRef<Path>>(relative: P, table: &SubstitutionTable) -> PathBuf {
    relative
        .as_ref()
        .components()
        .map(|component| match component {
            Component::Normal(part) => match part.to_str() {
                Some(part) => PathBuf::from(table.apply(part)),
                None => PathBuf::from(part),
            },
            other => PathBuf::from(other.as_os_str()),
        })
        .collect()
}
