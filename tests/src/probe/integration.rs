#![cfg(test)]
use std::io::{ErrorKind, Read};
use std::net::TcpListener;
use std::time::Duration;

use preflight_common::config::Config;
use preflight_common::host::HostIdentity;
use preflight_common::network::probe::{ConnectFailure, ProbeOutcome};
use preflight_core::preflight::{self, Verdict};
use preflight_core::probe::PortProbe;
use tempfile::TempDir;

use crate::utils;

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn free_port_is_not_bound() {
    let probe = PortProbe::from_config(&Config::default());
    let port = free_port();

    let result = probe.probe("127.0.0.1", port).await;
    assert!(!result.bound());
    assert!(!result.resolution_ambiguous());
    assert_eq!(result.outcome, ProbeOutcome::Free(ConnectFailure::Refused));
}

/// The probe must hang up before returning: the listener side of the
/// accepted connection reads end-of-stream straight away.
#[tokio::test]
async fn bound_port_is_detected_and_the_socket_is_closed() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let probe = PortProbe::from_config(&Config::default());

    let result = probe.probe("127.0.0.1", port).await;
    assert!(result.bound());
    assert!(!result.resolution_ambiguous());

    let (mut accepted, _) = listener.accept().unwrap();
    accepted.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
    let mut buf = [0u8; 16];
    match accepted.read(&mut buf) {
        Ok(n) => assert_eq!(n, 0, "probe sent data instead of closing"),
        Err(e) => assert_eq!(e.kind(), ErrorKind::ConnectionReset, "probe socket still open: {e}"),
    }
}

#[tokio::test]
async fn sentinel_matching_the_host_skips_the_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let port = listener.local_addr().unwrap().port();
    let cfg = Config {
        sentinel_host: "127.0.0.1".to_string(),
        ..Config::default()
    };
    let probe = PortProbe::from_config(&cfg);

    let result = probe.probe("127.0.0.1", port).await;
    assert!(result.resolution_ambiguous());
    assert!(!result.bound());

    let accepted = listener.accept();
    assert!(matches!(accepted, Err(ref e) if e.kind() == ErrorKind::WouldBlock));
}

#[tokio::test]
async fn full_run_reports_the_bound_port_even_without_a_manifest() {
    let tmp = TempDir::new().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let busy = listener.local_addr().unwrap().port();
    let idle = free_port();
    let cfg = utils::loopback_config(tmp.path(), vec![busy, idle]);

    let host = HostIdentity::new("127.0.0.1", "127.0.0.1");
    let report = preflight::run(&cfg, host, None).await;

    let bound: Vec<bool> = report.ports.iter().map(|r| r.bound()).collect();
    assert_eq!(bound, vec![true, false]);
    assert!(report.journals.is_err());
    assert!(!report.processes.is_running());
    assert_eq!(report.verdict(), Verdict::Inconclusive);
}

#[tokio::test]
async fn full_run_with_a_busy_port_is_a_finding() {
    let tmp = TempDir::new().unwrap();
    utils::write_manifest(tmp.path(), "");
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let busy = listener.local_addr().unwrap().port();
    let cfg = utils::loopback_config(tmp.path(), vec![busy]);

    let host = HostIdentity::new("127.0.0.1", "127.0.0.1");
    let report = preflight::run(&cfg, host, None).await;

    assert!(report.journals.as_ref().unwrap().is_empty());
    assert_eq!(report.verdict(), Verdict::Findings);
}
