//! Shared configuration and data model for the preflight tool.
//!
//! Everything in here is plain data: the [`config::Config`] value handed to
//! every check, and the result types the checks produce. No IO happens in
//! this crate.

pub mod config;
pub mod forest;
pub mod host;
pub mod macros;
pub mod network;
