//! The **Journal Auditor**: compares the declared forests against the journal
//! files actually present on disk.
//!
//! [`audit`] parses the assignment manifest once and hands back
//! [`ForestAudits`], a lazy iterator that lists one forest's journal
//! directory per step. A forest whose directory cannot be listed yields an
//! error outcome for that forest only; the remaining forests are still
//! audited.

pub mod manifest;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::vec;

use preflight_common::forest::{ForestAssignment, ForestLocation};
use thiserror::Error;
use tracing::debug;

pub use manifest::ManifestError;

#[derive(Debug, Error)]
#[error("cannot list {path}: {source}")]
pub struct JournalError {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    Ok,
    /// More journals than the threshold allows.
    Warning,
    /// No journal directory could be listed for this forest.
    Missing,
}

#[derive(Debug)]
pub struct ForestAudit {
    pub forest_name: String,
    pub journal_dir: PathBuf,
    pub location: ForestLocation,
    pub outcome: Result<usize, JournalError>,
    pub status: AuditStatus,
}

impl ForestAudit {
    pub fn journal_count(&self) -> Option<usize> {
        self.outcome.as_ref().ok().copied()
    }
}

/// `count > threshold` warns, so a count equal to the threshold is still fine.
pub fn judge(journal_count: usize, threshold: usize) -> AuditStatus {
    if journal_count > threshold {
        AuditStatus::Warning
    } else {
        AuditStatus::Ok
    }
}

/// Lazy, single pass sequence of audits in manifest order.
pub struct ForestAudits {
    forests: vec::IntoIter<ForestAssignment>,
    default_base: PathBuf,
    threshold: usize,
}

impl ForestAudits {
    pub fn new(forests: Vec<ForestAssignment>, default_base: &Path, threshold: usize) -> Self {
        Self {
            forests: forests.into_iter(),
            default_base: default_base.to_path_buf(),
            threshold,
        }
    }
}

impl Iterator for ForestAudits {
    type Item = ForestAudit;

    fn next(&mut self) -> Option<ForestAudit> {
        let forest: ForestAssignment = self.forests.next()?;
        Some(audit_forest(forest, &self.default_base, self.threshold))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.forests.size_hint()
    }
}

impl ExactSizeIterator for ForestAudits {}

pub fn audit(
    manifest_path: &Path,
    default_base: &Path,
    threshold: usize,
) -> Result<ForestAudits, ManifestError> {
    let forests: Vec<ForestAssignment> = manifest::read_manifest(manifest_path)?;
    debug!("{} forests assigned in {}", forests.len(), manifest_path.display());
    Ok(ForestAudits::new(forests, default_base, threshold))
}

fn audit_forest(forest: ForestAssignment, default_base: &Path, threshold: usize) -> ForestAudit {
    let journal_dir: PathBuf = forest.journal_dir(default_base);
    let outcome: Result<usize, JournalError> =
        count_journals(&journal_dir).map_err(|source| JournalError {
            path: journal_dir.clone(),
            source,
        });

    let status: AuditStatus = match &outcome {
        Ok(count) => judge(*count, threshold),
        Err(e) => {
            debug!("{}: {e}", forest.forest_name);
            AuditStatus::Missing
        }
    };

    ForestAudit {
        location: forest.location(),
        forest_name: forest.forest_name,
        journal_dir,
        outcome,
        status,
    }
}

fn count_journals(dir: &Path) -> io::Result<usize> {
    fs::read_dir(dir)?.try_fold(0, |count, entry| entry.map(|_| count + 1))
}
