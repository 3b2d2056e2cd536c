pub mod check;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use preflight_common::config::Config;

#[derive(Parser)]
#[command(name = "preflight")]
#[command(about = "Pre-flight check for a MarkLogic host.")]
#[command(version)]
pub struct CommandLine {
    /// TCP ports that must be free, comma separated
    #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u16).range(1..))]
    pub ports: Option<Vec<u16>>,

    /// Forest assignment manifest
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Base directory of forests without their own data directory
    #[arg(short, long = "forest-dir", value_name = "DIR")]
    pub forest_dir: Option<PathBuf>,

    /// Warn when a forest holds more journal files than this
    #[arg(short, long = "journal-threshold", value_name = "COUNT")]
    pub journal_threshold: Option<usize>,

    /// Connect timeout per port in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Name used to detect a resolver that answers every lookup the same way
    #[arg(long, value_name = "NAME")]
    pub sentinel: Option<String>,

    /// Process name to look for in the process table
    #[arg(long = "process-name", value_name = "NAME")]
    pub process_name: Option<String>,

    /// Probe this host instead of the local FQDN
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Print less (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print more diagnostics (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let defaults = Config::default();
        Config {
            ports: self.ports.clone().unwrap_or(defaults.ports),
            manifest_path: self.manifest.clone().unwrap_or(defaults.manifest_path),
            forest_base_dir: self.forest_dir.clone().unwrap_or(defaults.forest_base_dir),
            journal_threshold: self.journal_threshold.unwrap_or(defaults.journal_threshold),
            connect_timeout: self
                .timeout
                .map(Duration::from_millis)
                .unwrap_or(defaults.connect_timeout),
            sentinel_host: self.sentinel.clone().unwrap_or(defaults.sentinel_host),
            process_name: self.process_name.clone().unwrap_or(defaults.process_name),
            host: self.host.clone(),
            quiet: self.quiet,
        }
    }
}
