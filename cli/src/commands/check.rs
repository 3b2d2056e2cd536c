use colored::*;
use tracing::{error, warn};

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};
use preflight_common::config::Config;
use preflight_common::host::{HostIdentity, RunningProcesses};
use preflight_common::network::probe::{PortCheckResult, ProbeOutcome};
use preflight_common::success;
use preflight_core::journal::ForestAudit;
use preflight_core::preflight::{self, PreflightReport, Verdict};
use preflight_core::system;

pub async fn check(cfg: &Config) -> anyhow::Result<Verdict> {
    let host: HostIdentity = match &cfg.host {
        Some(name) => HostIdentity::new(name.clone(), name.clone()),
        None => system::host_identity(),
    };

    print::print_status(host_heading(&host));

    let on_progress = |step| spinner::report_progress(step);
    let report: PreflightReport = preflight::run(cfg, host, Some(&on_progress)).await;
    spinner::get_spinner().finish_and_clear();

    print_processes(&report.processes, cfg);
    print_ports(&report.ports, &report.host, cfg);
    print_journals(&report, cfg);

    let verdict: Verdict = report.verdict();
    print_summary(verdict, cfg);
    Ok(verdict)
}

fn host_heading(host: &HostIdentity) -> String {
    let fqdn: ColoredString = host.fqdn.color(colors::HOSTNAME);
    if host.hostname == host.fqdn {
        format!("Running pre-flight check for host: {fqdn}")
    } else {
        format!("Running pre-flight check for host: {fqdn} ({})", host.hostname)
    }
}

fn print_processes(processes: &RunningProcesses, cfg: &Config) {
    print::header("processes", cfg.quiet);
    let count: usize = processes.pids.len();
    print::status_line(
        &format!("{count} running {} processes detected", processes.name),
        format::process_marker(count),
    );
    for (idx, pid) in processes.pids.iter().enumerate() {
        let last: bool = idx + 1 == count;
        print::tree_item(&format!("Running {} process found with pid: {pid}", processes.name), last);
    }
}

fn print_ports(ports: &[PortCheckResult], host: &HostIdentity, cfg: &Config) {
    print::header("tcp ports", cfg.quiet);
    for result in ports {
        print::status_line(&format!("TCP binding for port {}", result.port), format::port_marker(result));
    }

    if ports.iter().any(PortCheckResult::resolution_ambiguous) {
        warn!(
            "{} and {} resolve to the same address; ports were not probed",
            host.fqdn, cfg.sentinel_host
        );
    }
    if ports.iter().any(|r| r.outcome == ProbeOutcome::Unresolvable) {
        warn!("{} could not be resolved; ports were not probed", host.fqdn);
    }
}

fn print_journals(report: &PreflightReport, cfg: &Config) {
    print::header("forest journals", cfg.quiet);
    match &report.journals {
        Err(e) => {
            print::status_line("Reading forest assignments", format::Marker::Failed);
            error!("{e}");
        }
        Ok(audits) if audits.is_empty() => {
            print::print_status(format!("No forests assigned in {}", cfg.manifest_path.display()));
        }
        Ok(audits) => audits.iter().for_each(print_audit),
    }
}

fn print_audit(audit: &ForestAudit) {
    print::status_line(&format::audit_label(audit), format::audit_marker(audit.status));
}

fn print_summary(verdict: Verdict, cfg: &Config) {
    let output: ColoredString = format::verdict_line(verdict);
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            match verdict {
                Verdict::Clean => success!("{}", output),
                _ => warn!("{}", output),
            }
        }
    }
}
