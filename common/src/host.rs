/// Name of the machine the check runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    pub fqdn: String,
}

impl HostIdentity {
    pub fn new(hostname: impl Into<String>, fqdn: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            fqdn: fqdn.into(),
        }
    }
}

/// Server processes found in the process table at the time of the check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningProcesses {
    pub name: String,
    pub pids: Vec<u32>,
}

impl RunningProcesses {
    pub fn is_running(&self) -> bool {
        !self.pids.is_empty()
    }
}
