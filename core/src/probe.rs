//! The **Port Probe**: decides whether a TCP service already listens on a port.
//!
//! A naive connect test is easy to fool. On hosts behind a captive or wildcard
//! resolver every name collapses onto one catch-all address, so the probe first
//! resolves a sentinel name and compares it with the target. When both land on
//! the same address the resolver cannot tell "this host" apart from "nowhere"
//! and the probe abstains instead of connecting.
//!
//! Resolution and connection are reached through the [`Resolver`] and
//! [`Connector`] traits. Production code uses [`SystemResolver`] and
//! [`TcpConnector`]; tests swap in stubs.

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use preflight_common::config::Config;
use preflight_common::network::probe::{ConnectFailure, PortCheckResult, ProbeOutcome};
use tracing::debug;

pub use crate::network::resolver::SystemResolver;
pub use crate::network::tcp::TcpConnector;

/// Turns a host name or address literal into a single IP address.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, host: &str) -> io::Result<IpAddr>;
}

/// Makes one bounded connection attempt.
///
/// Implementations must release the socket before returning, whatever the
/// outcome.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, addr: SocketAddr, timeout: Duration) -> Result<(), ConnectFailure>;
}

pub struct PortProbe<R = SystemResolver, C = TcpConnector> {
    resolver: R,
    connector: C,
    sentinel: String,
    connect_timeout: Duration,
}

impl PortProbe {
    pub fn from_config(cfg: &Config) -> Self {
        Self::with_parts(SystemResolver, TcpConnector, cfg)
    }
}

impl<R: Resolver, C: Connector> PortProbe<R, C> {
    pub fn with_parts(resolver: R, connector: C, cfg: &Config) -> Self {
        Self {
            resolver,
            connector,
            sentinel: cfg.sentinel_host.clone(),
            connect_timeout: cfg.connect_timeout,
        }
    }

    /// Checks a single port on `host`. Never fails; see [`ProbeOutcome`].
    pub async fn probe(&self, host: &str, port: u16) -> PortCheckResult {
        let captive_addr: Option<IpAddr> = match self.resolver.resolve(&self.sentinel).await {
            Ok(addr) => Some(addr),
            Err(e) => {
                debug!("sentinel {} did not resolve: {e}", self.sentinel);
                None
            }
        };

        let host_addr: IpAddr = match self.resolver.resolve(host).await {
            Ok(addr) => addr,
            Err(e) => {
                debug!("{host} did not resolve: {e}");
                return PortCheckResult::new(port, ProbeOutcome::Unresolvable);
            }
        };

        if captive_addr == Some(host_addr) {
            debug!("{host} and sentinel {} both resolve to {host_addr}", self.sentinel);
            return PortCheckResult::new(port, ProbeOutcome::AmbiguousResolver);
        }

        let socket_addr: SocketAddr = SocketAddr::new(host_addr, port);
        let outcome: ProbeOutcome = match self.connector.connect(socket_addr, self.connect_timeout).await {
            Ok(()) => ProbeOutcome::Listening,
            Err(failure) => {
                debug!("{socket_addr}: {failure}");
                ProbeOutcome::Free(failure)
            }
        };
        PortCheckResult::new(port, outcome)
    }

    /// Probes every port in order, one at a time. `before_each` runs right
    /// before a port is checked.
    pub async fn probe_all<F>(&self, host: &str, ports: &[u16], mut before_each: F) -> Vec<PortCheckResult>
    where
        F: FnMut(u16),
    {
        let mut results: Vec<PortCheckResult> = Vec::with_capacity(ports.len());
        for &port in ports {
            before_each(port);
            results.push(self.probe(host, port).await);
        }
        results
    }
}
