use std::path::Path;
use std::process::Command;

/// Spawn the locsync binary inside `dir` and capture exit code and output.
pub fn run_cli_in(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let bin = env!("CARGO_BIN_EXE_locsync");
    let output = Command::new(bin)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn locsync");
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

pub fn write_file(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write fixture");
}
