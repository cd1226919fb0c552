use assert_cmd::Command;
use std::path::Path;

pub fn emotiq_cmd() -> Command {
    let mut cmd = Command::cargo_bin("emotiq").unwrap();
    cmd.env_remove("EMOTIQ_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a journal at `path`, optionally without demonstration entries
#[allow(dead_code)]
pub fn init_journal(path: &Path, demo: bool) {
    let mut cmd = emotiq_cmd();
    cmd.arg("init").arg(path);
    if !demo {
        cmd.arg("--no-demo");
    }
    cmd.assert().success();
}
