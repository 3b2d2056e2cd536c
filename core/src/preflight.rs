//! # Preflight Run
//!
//! Collects every check into a [`PreflightReport`] without printing anything.
//! The checks are independent: a broken manifest only affects the journal
//! section, the ports are always probed.

use preflight_common::config::Config;
use preflight_common::host::{HostIdentity, RunningProcesses};
use preflight_common::network::probe::{PortCheckResult, ProbeOutcome};

use crate::journal::{self, AuditStatus, ForestAudit, ManifestError};
use crate::probe::{Connector, PortProbe, Resolver};
use crate::system::{self, ProcessTable, SystemProcessTable};

/// Emitted before each step so a front end can show what is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Processes,
    Port(u16),
    Journals,
}

#[derive(Debug)]
pub struct PreflightReport {
    pub host: HostIdentity,
    pub processes: RunningProcesses,
    pub ports: Vec<PortCheckResult>,
    pub journals: Result<Vec<ForestAudit>, ManifestError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing stands in the way of starting the server.
    Clean,
    /// A port is taken, the server already runs, or a forest has too many journals.
    Findings,
    /// The manifest could not be read, or the probe target could not be
    /// resolved or its resolver could not be trusted.
    Inconclusive,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Clean => 0,
            Verdict::Findings => 1,
            Verdict::Inconclusive => 2,
        }
    }
}

impl PreflightReport {
    pub fn verdict(&self) -> Verdict {
        let unverified: bool = self.ports.iter().any(|result| {
            matches!(result.outcome, ProbeOutcome::AmbiguousResolver | ProbeOutcome::Unresolvable)
        });
        if self.journals.is_err() || unverified {
            return Verdict::Inconclusive;
        }

        let port_bound: bool = self.ports.iter().any(PortCheckResult::bound);
        let journal_warning: bool = self.journals.as_ref().is_ok_and(|audits| {
            audits.iter().any(|audit| audit.status == AuditStatus::Warning)
        });

        if port_bound || self.processes.is_running() || journal_warning {
            Verdict::Findings
        } else {
            Verdict::Clean
        }
    }
}

/// Runs all checks against the live system.
pub async fn run(cfg: &Config, host: HostIdentity, on_progress: Option<&dyn Fn(Progress)>) -> PreflightReport {
    let probe = PortProbe::from_config(cfg);
    run_with(cfg, host, &probe, &SystemProcessTable, on_progress).await
}

pub async fn run_with<R, C, P>(
    cfg: &Config,
    host: HostIdentity,
    probe: &PortProbe<R, C>,
    process_table: &P,
    on_progress: Option<&dyn Fn(Progress)>,
) -> PreflightReport
where
    R: Resolver,
    C: Connector,
    P: ProcessTable,
{
    let notify = |step: Progress| {
        if let Some(callback) = on_progress {
            callback(step);
        }
    };

    notify(Progress::Processes);
    let processes: RunningProcesses = system::running_processes(process_table, &cfg.process_name);

    let ports: Vec<PortCheckResult> = probe
        .probe_all(&host.fqdn, &cfg.ports, |port| notify(Progress::Port(port)))
        .await;

    notify(Progress::Journals);
    let journals: Result<Vec<ForestAudit>, ManifestError> =
        journal::audit(&cfg.manifest_path, &cfg.forest_base_dir, cfg.journal_threshold)
            .map(|audits| audits.collect());

    PreflightReport {
        host,
        processes,
        ports,
        journals,
    }
}
