use std::fmt;

use colored::*;
use preflight_common::forest::ForestLocation;
use preflight_common::network::probe::{PortCheckResult, ProbeOutcome};
use preflight_core::journal::{AuditStatus, ForestAudit};
use preflight_core::preflight::Verdict;

use crate::terminal::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ok,
    InUse,
    Warning,
    Ambiguous,
    Unresolved,
    Missing,
    Failed,
}

impl Marker {
    fn label(self) -> ColoredString {
        match self {
            Marker::Ok => "OK".color(colors::PASS),
            Marker::InUse => "IN USE".color(colors::FAIL),
            Marker::Warning => "WARNING".color(colors::FAIL),
            Marker::Ambiguous => "AMBIGUOUS".color(colors::UNKNOWN),
            Marker::Unresolved => "UNRESOLVED".color(colors::UNKNOWN),
            Marker::Missing => "MISSING".color(colors::UNKNOWN),
            Marker::Failed => "FAILED".color(colors::FAIL),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.label())
    }
}

pub fn port_marker(result: &PortCheckResult) -> Marker {
    match result.outcome {
        ProbeOutcome::Listening => Marker::InUse,
        ProbeOutcome::Free(_) => Marker::Ok,
        ProbeOutcome::AmbiguousResolver => Marker::Ambiguous,
        ProbeOutcome::Unresolvable => Marker::Unresolved,
    }
}

pub fn audit_marker(status: AuditStatus) -> Marker {
    match status {
        AuditStatus::Ok => Marker::Ok,
        AuditStatus::Warning => Marker::Warning,
        AuditStatus::Missing => Marker::Missing,
    }
}

pub fn process_marker(count: usize) -> Marker {
    if count > 0 { Marker::Warning } else { Marker::Ok }
}

pub fn audit_label(audit: &ForestAudit) -> String {
    match (&audit.outcome, audit.location) {
        (Ok(count), _) => format!("Found {count} journal files for forest {}", audit.forest_name),
        (Err(_), ForestLocation::DataDirectory) => {
            format!("Forest {} is not a directory on this host", audit.forest_name)
        }
        (Err(_), ForestLocation::DefaultBase) => format!("No directory found for {}", audit.forest_name),
    }
}

pub fn verdict_line(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Clean => "Host is ready for MarkLogic".color(colors::PASS).bold(),
        Verdict::Findings => "Host needs attention before MarkLogic starts".color(colors::FAIL).bold(),
        Verdict::Inconclusive => "Some checks could not be completed".color(colors::UNKNOWN).bold(),
    }
}
