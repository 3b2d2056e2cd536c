//! # Port Probe Results
//!
//! The outcome of checking a single candidate port. A probe never fails; every
//! resolution or connection problem ends up as one of the [`ProbeOutcome`]
//! variants so that callers can tell a free port from an unresolvable host
//! from a resolver that cannot be trusted.

use std::io;

use thiserror::Error;

/// Why a connect attempt did not produce a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectFailure {
    #[error("connection refused")]
    Refused,
    #[error("connect timed out")]
    TimedOut,
    #[error("unreachable ({0})")]
    Unreachable(io::ErrorKind),
}

impl From<io::Error> for ConnectFailure {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::ConnectionRefused => ConnectFailure::Refused,
            io::ErrorKind::TimedOut => ConnectFailure::TimedOut,
            kind => ConnectFailure::Unreachable(kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Something accepted the connection.
    Listening,
    /// The connect attempt failed, which is what a free port looks like.
    Free(ConnectFailure),
    /// The probe target did not resolve to any address.
    Unresolvable,
    /// The sentinel and the probe target resolved to the same address.
    /// No connection was attempted.
    AmbiguousResolver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortCheckResult {
    pub port: u16,
    pub outcome: ProbeOutcome,
}

impl PortCheckResult {
    pub fn new(port: u16, outcome: ProbeOutcome) -> Self {
        Self { port, outcome }
    }

    pub fn bound(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Listening)
    }

    pub fn resolution_ambiguous(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::AmbiguousResolver)
    }
}
