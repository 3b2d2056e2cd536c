#![cfg(test)]
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use preflight_common::config::Config;

pub const NS: &str = "http://marklogic.com/xdmp/assignments";

/// Config pointing at `root`, probing loopback only.
pub fn loopback_config(root: &Path, ports: Vec<u16>) -> Config {
    Config {
        ports,
        manifest_path: root.join("assignments.xml"),
        forest_base_dir: root.join("Forests"),
        connect_timeout: Duration::from_secs(1),
        host: Some("127.0.0.1".to_string()),
        process_name: "preflight-test-no-such-process".to_string(),
        ..Config::default()
    }
}

pub fn write_manifest(root: &Path, body: &str) -> PathBuf {
    let path = root.join("assignments.xml");
    fs::write(&path, format!(r#"<assignments xmlns="{NS}">{body}</assignments>"#)).unwrap();
    path
}

pub fn make_journals(dir: &Path, count: usize) {
    fs::create_dir_all(dir).unwrap();
    for i in 0..count {
        File::create(dir.join(format!("Journal{i}"))).unwrap();
    }
}
