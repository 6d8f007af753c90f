//! Per-file outcomes and the end-of-run report.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::Error;

/// Why a file of the expanded tree was not compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No file at the translated path in the template tree
    NoCounterpart,
    /// The base name matches an exemption pattern
    Exempt,
}

/// What happened to one file of the expanded tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Text content changed; written unless in diff-only mode
    Updated,
    /// Template already matches
    Unchanged,
    /// Binary content changed; written unless in diff-only mode
    BinaryDiffers,
    Skipped(SkipReason),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Updated => write!(f, "updated"),
            Outcome::Unchanged => write!(f, "unchanged"),
            Outcome::BinaryDiffers => write!(f, "binary differs"),
            Outcome::Skipped(SkipReason::NoCounterpart) => {
                write!(f, "skipped (no template counterpart)")
            }
            Outcome::Skipped(SkipReason::Exempt) => write!(f, "skipped (exempt)"),
        }
    }
}

/// A file whose comparison failed; the run went on without it.
#[derive(Debug)]
pub struct FileFailure {
    /// Location of the failing file, as precise as the error allows
    pub path: PathBuf,
    pub error: Error,
}

/// Structural differences between the two trees.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MismatchLists {
    /// Expanded files with no template counterpart
    pub unmapped_in_expanded: BTreeSet<PathBuf>,
    /// Template files with no expanded counterpart
    pub missing_in_expanded: BTreeSet<PathBuf>,
}

impl MismatchLists {
    pub fn is_empty(&self) -> bool {
        self.unmapped_in_expanded.is_empty() && self.missing_in_expanded.is_empty()
    }
}

/// Everything a run found out.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub diff_only: bool,
    /// Outcome per expanded-tree relative path, in walk order
    pub outcomes: Vec<(PathBuf, Outcome)>,
    pub mismatches: MismatchLists,
    pub failures: Vec<FileFailure>,
}

impl SyncReport {
    pub fn new(diff_only: bool) -> Self {
        Self {
            diff_only,
            ..Default::default()
        }
    }

    /// Number of files that ended with `outcome`.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == outcome).count()
    }

    /// Outcome recorded for an expanded-tree relative path.
    pub fn outcome_of<P: AsRef<std::path::Path>>(&self, relative: P) -> Option<Outcome> {
        let relative = relative.as_ref();
        self.outcomes.iter().find(|(p, _)| p == relative).map(|(_, o)| *o)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Writes the mismatch sections and the closing line.
    ///
    /// # Arguments
    /// * `out` - Destination, normally stdout
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.mismatches.unmapped_in_expanded.is_empty() {
            writeln!(out, "\nFiles present only in expanded dir (not written to template):")?;
            for path in &self.mismatches.unmapped_in_expanded {
                writeln!(out, "  {}", path.display())?;
            }
        }

        if !self.mismatches.missing_in_expanded.is_empty() {
            writeln!(out, "\nFiles present only in template dir (no counterpart in expanded):")?;
            for path in &self.mismatches.missing_in_expanded {
                writeln!(out, "  {}", path.display())?;
            }
        }

        if self.diff_only {
            writeln!(out, "\n(Diff-only mode - no files were modified.)")?;
        } else if self.mismatches.is_empty() && self.failures.is_empty() {
            writeln!(out, "Template and expanded project are fully in sync.")?;
        }
        Ok(())
    }
}
