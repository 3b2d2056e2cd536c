use std::ffi::OsStr;
use std::net::IpAddr;

use preflight_common::host::{HostIdentity, RunningProcesses};
use sysinfo::{ProcessesToUpdate, System};
use tracing::debug;

pub trait ProcessTable {
    /// Pids of every process whose name contains `name`.
    fn find(&self, name: &str) -> Vec<u32>;
}

pub struct SystemProcessTable;

impl ProcessTable for SystemProcessTable {
    fn find(&self, name: &str) -> Vec<u32> {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        let mut pids: Vec<u32> = sys
            .processes_by_name(OsStr::new(name))
            .map(|process| process.pid().as_u32())
            .collect();
        pids.sort_unstable();
        pids
    }
}

pub fn running_processes(table: &impl ProcessTable, name: &str) -> RunningProcesses {
    RunningProcesses {
        name: name.to_string(),
        pids: table.find(name),
    }
}

/// Local hostname plus its canonical name.
///
/// The canonical name comes from a reverse lookup of the hostname's first
/// address and is only accepted when it is dotted; otherwise the plain
/// hostname is used for both.
pub fn host_identity() -> HostIdentity {
    let hostname: String = System::host_name().unwrap_or_else(|| String::from("localhost"));
    let fqdn: String = canonical_name(&hostname).unwrap_or_else(|| hostname.clone());
    debug!("host identity: {hostname} -> {fqdn}");
    HostIdentity::new(hostname, fqdn)
}

fn canonical_name(hostname: &str) -> Option<String> {
    let addrs: Vec<IpAddr> = dns_lookup::lookup_host(hostname).ok()?;
    let addr: IpAddr = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()?;
    dns_lookup::lookup_addr(&addr)
        .ok()
        .filter(|name| name.contains('.'))
}
