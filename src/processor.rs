//! Core synchronization: carries edits from the expanded tree back into the
//! template tree.
//!
//! A run makes two passes. The first walks the expanded tree, locates each
//! file's template counterpart and rewrites it with the rendered values turned
//! back into placeholders. The second walks the template tree and records the
//! files that have no expanded counterpart. Only files that already exist in
//! the template are ever written.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use globset::GlobSet;
use log::{debug, error, info};

use crate::constants::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXEMPT_FILES, TEXT_CHUNK};
use crate::diff::{binary_notice, render_unified_diff};
use crate::error::{file_err, Error, Result};
use crate::ignore::{build_exemptions, is_excluded};
use crate::report::{FileFailure, Outcome, SkipReason, SyncReport};
use crate::translate::translate_path;
use crate::vars::VariableMap;
use crate::walker::{ensure_directory, walk_files, FileEntry};

/// Knobs for a run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Report and diff, but never write
    pub diff_only: bool,
    /// Directory names whose unmapped files go unreported
    pub excluded_dirs: Vec<String>,
    /// Glob patterns for file names that are never compared
    pub exempt_patterns: Vec<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            diff_only: false,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            exempt_patterns: DEFAULT_EXEMPT_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The write a file needs, decided before anything touches the disk.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Nothing to write
    Keep(Outcome),
    /// Replace the template text; `old` is what is there now
    WriteText { old: String, new: String },
    /// Replace the template bytes
    WriteBytes(Vec<u8>),
}

/// A file of the expanded tree paired with its template counterpart.
#[derive(Debug)]
pub struct FilePlan {
    /// Path relative to the expanded root
    pub expanded_relative: PathBuf,
    /// Path relative to the template root
    pub template_relative: PathBuf,
    pub template_path: PathBuf,
    pub operation: FileOperation,
}

impl FilePlan {
    pub fn outcome(&self) -> Outcome {
        match &self.operation {
            FileOperation::Keep(outcome) => *outcome,
            FileOperation::WriteText { .. } => Outcome::Updated,
            FileOperation::WriteBytes(_) => Outcome::BinaryDiffers,
        }
    }
}

/// Whether the head of a file contains a NUL byte.
///
/// Any error reading the file counts as binary, so that a file that cannot be
/// decoded is never rewritten as text.
pub fn is_binary<P: AsRef<Path>>(path: P) -> bool {
    let mut chunk = Vec::with_capacity(TEXT_CHUNK);
    match fs::File::open(path.as_ref()) {
        Ok(file) => match file.take(TEXT_CHUNK as u64).read_to_end(&mut chunk) {
            Ok(_) => chunk.contains(&0),
            Err(_) => true,
        },
        Err(_) => true,
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| file_err(path, e))
}

fn read_text(path: &Path) -> Result<String> {
    String::from_utf8(read_bytes(path)?).map_err(|source| Error::DecodeError {
        path: path.to_path_buf(),
        source,
    })
}

/// Synchronizes one template tree with one expanded tree.
pub struct Synchronizer<'a> {
    template_root: PathBuf,
    expanded_root: PathBuf,
    variables: &'a VariableMap,
    options: &'a SyncOptions,
    exemptions: GlobSet,
}

impl<'a> Synchronizer<'a> {
    /// Validates both roots and compiles the exemption patterns.
    ///
    /// # Errors
    /// * `Error::NotADirectoryError` if either root is not a directory
    /// * `Error::GlobError` if an exemption pattern is invalid
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        template_root: P,
        expanded_root: Q,
        variables: &'a VariableMap,
        options: &'a SyncOptions,
    ) -> Result<Self> {
        let template_root = template_root.as_ref().to_path_buf();
        let expanded_root = expanded_root.as_ref().to_path_buf();
        ensure_directory(&template_root)?;
        ensure_directory(&expanded_root)?;

        Ok(Self {
            template_root,
            expanded_root,
            variables,
            options,
            exemptions: build_exemptions(&options.exempt_patterns)?,
        })
    }

    /// Runs both passes, printing diffs and notices to `out` as files are
    /// processed. The closing summary is left to the caller
    /// ([`SyncReport::write_summary`]).
    ///
    /// # Errors
    /// Only console write failures abort the run; file errors end up in
    /// [`SyncReport::failures`].
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SyncReport> {
        let mut report = SyncReport::new(self.options.diff_only);

        for entry in walk_files(&self.expanded_root)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.record_failure(&mut report, &self.expanded_root, e);
                    continue;
                }
            };
            let plan = match self.plan(&entry) {
                Ok(plan) => plan,
                Err(e) => {
                    self.record_failure(&mut report, &entry.relative, e);
                    continue;
                }
            };

            let outcome = plan.outcome();
            debug!("'{}': {}", plan.expanded_relative.display(), outcome);
            if outcome == Outcome::Skipped(SkipReason::NoCounterpart)
                && !is_excluded(&plan.expanded_relative, &self.options.excluded_dirs)
            {
                report.mismatches.unmapped_in_expanded.insert(plan.expanded_relative.clone());
            }

            self.present(&plan, out)?;
            if !self.options.diff_only {
                if let Err(e) = self.apply(&plan) {
                    self.record_failure(&mut report, &plan.template_relative, e);
                    continue;
                }
            }
            report.outcomes.push((plan.expanded_relative, outcome));
        }

        let (missing, failures) = self.find_missing()?;
        report.mismatches.missing_in_expanded = missing.into_iter().collect();
        for (path, e) in failures {
            self.record_failure(&mut report, &path, e);
        }

        debug!(
            "Run complete: {} updated, {} binary, {} unchanged, {} failed",
            report.count(Outcome::Updated),
            report.count(Outcome::BinaryDiffers),
            report.count(Outcome::Unchanged),
            report.failures.len()
        );
        Ok(report)
    }

    /// Decides what `entry` needs without writing anything.
    pub fn plan(&self, entry: &FileEntry) -> Result<FilePlan> {
        let template_relative =
            translate_path(&entry.relative, &self.variables.render_to_template);
        let template_path = self.template_root.join(&template_relative);
        let mut plan = FilePlan {
            expanded_relative: entry.relative.clone(),
            template_relative,
            template_path,
            operation: FileOperation::Keep(Outcome::Unchanged),
        };

        if !plan.template_path.is_file() {
            debug!("No template counterpart for '{}'", entry.relative.display());
            plan.operation = FileOperation::Keep(Outcome::Skipped(SkipReason::NoCounterpart));
            return Ok(plan);
        }

        if entry.file_name().map_or(false, |name| self.exemptions.is_match(name)) {
            debug!("Skipping exempt file '{}'", entry.relative.display());
            plan.operation = FileOperation::Keep(Outcome::Skipped(SkipReason::Exempt));
            return Ok(plan);
        }

        if is_binary(&entry.absolute) {
            let expanded_bytes = read_bytes(&entry.absolute)?;
            if read_bytes(&plan.template_path)? != expanded_bytes {
                plan.operation = FileOperation::WriteBytes(expanded_bytes);
            }
        } else {
            let text = read_text(&entry.absolute)?;
            let new = self.variables.render_to_template.apply(&text);
            let old = read_text(&plan.template_path)?;
            if old != new {
                plan.operation = FileOperation::WriteText { old, new };
            }
        }
        Ok(plan)
    }

    /// Prints the diff or the binary notice for a plan.
    fn present<W: Write>(&self, plan: &FilePlan, out: &mut W) -> Result<()> {
        match &plan.operation {
            FileOperation::WriteText { old, new } => {
                write!(out, "{}", render_unified_diff(old, new, &plan.template_relative))?;
            }
            FileOperation::WriteBytes(_) if self.options.diff_only => {
                writeln!(out, "{}", binary_notice(&plan.template_relative))?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Writes a plan's new content over the existing template file.
    pub fn apply(&self, plan: &FilePlan) -> Result<()> {
        let path = &plan.template_path;
        match &plan.operation {
            FileOperation::Keep(_) => return Ok(()),
            FileOperation::WriteText { new, .. } => {
                fs::write(path, new).map_err(|e| file_err(path, e))?;
                debug!("Updated '{}'", plan.template_relative.display());
            }
            FileOperation::WriteBytes(bytes) => {
                fs::write(path, bytes).map_err(|e| file_err(path, e))?;
                info!("Updated binary file '{}'", plan.template_relative.display());
            }
        }
        Ok(())
    }

    /// Template files with no counterpart in the expanded tree, plus any
    /// entries the walk could not read.
    pub fn find_missing(&self) -> Result<(Vec<PathBuf>, Vec<(PathBuf, Error)>)> {
        let mut missing = Vec::new();
        let mut failures = Vec::new();
        for entry in walk_files(&self.template_root)? {
            match entry {
                Ok(entry) => {
                    let expanded_relative =
                        translate_path(&entry.relative, &self.variables.template_to_render);
                    if !self.expanded_root.join(&expanded_relative).is_file() {
                        debug!("No expanded counterpart for '{}'", entry.relative.display());
                        missing.push(entry.relative);
                    }
                }
                Err(e) => failures.push((self.template_root.clone(), e)),
            }
        }
        Ok((missing, failures))
    }

    fn record_failure(&self, report: &mut SyncReport, fallback: &Path, e: Error) {
        let path = e.path().unwrap_or(fallback).to_path_buf();
        error!("{}", e);
        report.failures.push(FileFailure { path, error: e });
    }
}
