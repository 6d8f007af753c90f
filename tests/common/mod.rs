#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tmplsync::vars::VariableMap;

/// A template tree and an expanded tree side by side in one temp dir.
pub struct Trees {
    _tmp: TempDir,
    pub template: PathBuf,
    pub expanded: PathBuf,
}

impl Trees {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let template = tmp.path().join("template");
        let expanded = tmp.path().join("expanded");
        fs::create_dir_all(&template).expect("create template root");
        fs::create_dir_all(&expanded).expect("create expanded root");
        Self {
            _tmp: tmp,
            template,
            expanded,
        }
    }

    pub fn template_file(&self, relative: &str, content: impl AsRef<[u8]>) -> &Self {
        write_file(&self.template, relative, content);
        self
    }

    pub fn expanded_file(&self, relative: &str, content: impl AsRef<[u8]>) -> &Self {
        write_file(&self.expanded, relative, content);
        self
    }

    pub fn read_template(&self, relative: &str) -> String {
        fs::read_to_string(self.template.join(relative)).expect("read template file")
    }

    /// A second, untouched copy of the template tree for byte comparisons.
    pub fn snapshot_template(&self) -> TempDir {
        let snapshot = TempDir::new().expect("create snapshot dir");
        copy_tree(&self.template, snapshot.path());
        snapshot
    }
}

pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write fixture file");
}

pub fn copy_tree(from: &Path, to: &Path) {
    for entry in walkdir::WalkDir::new(from) {
        let entry = entry.expect("walk fixture");
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

pub fn count_files(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

pub fn vars(specs: &[&str]) -> VariableMap {
    VariableMap::from_specs(specs, "cookiecutter").expect("valid bindings")
}
