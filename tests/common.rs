#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rin() -> Command {
    cargo_bin_cmd!("rindirect")
}

/// Unique config path inside the system temp dir; any previous file is removed.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rindirect.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write `content` as a config file and return its path.
pub fn write_test_config(name: &str, content: &str) -> String {
    let path = setup_test_config(name);
    fs::write(&path, content).expect("write test config");
    path
}

/// Temporary output file path inside tempdir, removed beforehand
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rindirect_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `rindirect --config <fresh path>` so tests never read the user's file.
pub fn rin_isolated(name: &str) -> Command {
    let cfg = setup_test_config(name);
    let mut cmd = rin();
    cmd.args(["--config", &cfg]);
    cmd
}
