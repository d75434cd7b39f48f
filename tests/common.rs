// tests/common.rs

use assert_cmd::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn clipper_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("clipper"))
}

/// Writes `content` to `name` inside `dir` and returns the path as a string.
#[allow(dead_code)]
pub fn write_file(dir: &std::path::Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write test file");
    path.to_str().expect("temp path is valid UTF-8").to_string()
}
