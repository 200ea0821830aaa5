#![allow(dead_code)]

use std::process::{Command, Output};

use serde_json::Value;

/// Runs `flowgrid inspect` with the given arguments.
pub struct Inspect {
    output: Output,
}

impl Inspect {
    pub fn run(args: &[&str]) -> Self {
        let output = Command::new(env!("CARGO_BIN_EXE_flowgrid"))
            .arg("inspect")
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to spawn flowgrid");
        Self { output }
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parsed JSON report. Panics when the command failed.
    pub fn report(&self) -> Value {
        assert!(self.success(), "inspect failed: {}", self.stderr());
        serde_json::from_slice(&self.output.stdout).expect("stdout should be JSON")
    }
}

/// Widths of three 400-wide items on one row of a 1000x500 viewport.
pub const THREE_WIDE: &[&str] = &[
    "--widths",
    "400,400,400",
    "--item-height",
    "100",
    "--viewport-width",
    "1000",
    "--viewport-height",
    "500",
];

pub fn with<'a>(base: &[&'a str], extra: &[&'a str]) -> Vec<&'a str> {
    base.iter().chain(extra).copied().collect()
}
