use std::path::PathBuf;
use std::time::Duration;

/// Ports a MarkLogic node claims on startup.
pub const DEFAULT_PORTS: [u16; 6] = [7997, 7998, 7999, 8000, 8001, 8002];
pub const DEFAULT_MANIFEST_PATH: &str = "/var/opt/MarkLogic/assignments.xml";
pub const DEFAULT_FOREST_BASE_DIR: &str = "/var/opt/MarkLogic/Forests";
pub const DEFAULT_JOURNAL_THRESHOLD: usize = 2;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_SENTINEL_HOST: &str = "0.0.0.0";
pub const DEFAULT_PROCESS_NAME: &str = "MarkLogic";

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP ports that must be free before the server is started.
    pub ports: Vec<u16>,
    /// Location of `assignments.xml`.
    pub manifest_path: PathBuf,
    /// Base directory for forests whose assignment has no data directory.
    pub forest_base_dir: PathBuf,
    /// A forest holding more journals than this is flagged.
    pub journal_threshold: usize,
    /// Upper bound for a single connect attempt.
    pub connect_timeout: Duration,
    /// Lookup key used to detect a resolver that collapses every name
    /// onto one address.
    pub sentinel_host: String,
    /// Substring matched against the process table.
    pub process_name: String,
    /// Probe target. Resolved from the local hostname when `None`.
    pub host: Option<String>,
    /// 0 prints everything, anything above suppresses section headers.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ports: DEFAULT_PORTS.to_vec(),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            forest_base_dir: PathBuf::from(DEFAULT_FOREST_BASE_DIR),
            journal_threshold: DEFAULT_JOURNAL_THRESHOLD,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            sentinel_host: DEFAULT_SENTINEL_HOST.to_string(),
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            host: None,
            quiet: 0,
        }
    }
}
