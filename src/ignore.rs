//! Exemption and exclusion handling.
//! Exempt files are matched by base name against glob patterns and are never
//! compared or written. Excluded directories only silence the unmapped report
//! for files below them.

use std::path::{Component, Path};

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

use crate::error::Result;

/// Compiles exemption patterns into a set of globs.
///
/// # Arguments
/// * `patterns` - Glob patterns matched against file base names
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns
///
/// # Errors
/// * `Error::GlobError` for an invalid pattern
///
/// # Example
/// ```
/// use tmplsync::ignore::build_exemptions;
///
/// let exempt = build_exemptions(&["README.md", "*.lock"]).unwrap();
/// assert!(exempt.is_match("README.md"));
/// assert!(exempt.is_match("Cargo.lock"));
/// assert!(!exempt.is_match("main.rs"));
/// ```
pub fn build_exemptions<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        debug!("Exempting files matching '{}'", pattern.as_ref());
        builder.add(Glob::new(pattern.as_ref())?);
    }
    Ok(builder.build()?)
}

/// Whether `relative` has a component equal to one of `excluded_dirs`.
pub fn is_excluded<S: AsRef<str>>(relative: &Path, excluded_dirs: &[S]) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(part) => {
            excluded_dirs.iter().any(|dir| part == std::ffi::OsStr::new(dir.as_ref()))
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_component_anywhere() {
        let dirs = [".venv", ".mypy_cache"];
        assert!(is_excluded(Path::new(".venv/lib/site.py"), &dirs));
        assert!(is_excluded(Path::new("pkg/.mypy_cache/x.json"), &dirs));
        assert!(!is_excluded(Path::new("pkg/venv/x.py"), &dirs));
        assert!(!is_excluded(Path::new("my.venv.txt"), &dirs));
    }
}
