//! Shared testing utilities for oaim CLI tests.

use assert_cmd::Command;
use std::fs;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Child, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `oaim` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("oaim").expect("Failed to locate oaim binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Path to spec.yaml in the work directory.
    pub fn spec_path(&self) -> PathBuf {
        self.work_dir().join("spec.yaml")
    }

    pub fn write_spec(&self, content: &str) {
        fs::write(self.spec_path(), content).expect("Failed to write spec.yaml");
    }

    pub fn read_spec(&self) -> String {
        fs::read_to_string(self.spec_path()).expect("Failed to read spec.yaml")
    }

    /// Write a spec.yaml listing `peers` under `bootstrap.peers`.
    pub fn write_spec_with_peers(&self, peers: &[String]) {
        if peers.is_empty() {
            self.write_spec("version: \"0.1\"\nbootstrap:\n  peers: []\n");
            return;
        }
        let mut content = String::from("version: \"0.1\"\nbootstrap:\n  peers:\n");
        for peer in peers {
            content.push_str(&format!("    - {}\n", peer));
        }
        self.write_spec(&content);
    }

    /// Spawn `oaim run-agent` on a free port; the agent is killed when dropped.
    pub fn spawn_agent(&self) -> RunningAgent {
        self.spawn_agent_with_log_filter(None)
    }

    /// Spawn `oaim run-agent` with `RUST_LOG` set to `filter` when given.
    pub fn spawn_agent_with_log_filter(&self, filter: Option<&str>) -> RunningAgent {
        let port = free_port();
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_oaim"));
        cmd.args(["run-agent", "--port", &port.to_string()]).current_dir(self.work_dir());
        match filter {
            Some(filter) => cmd.env("RUST_LOG", filter),
            None => cmd.env_remove("RUST_LOG"),
        };
        let child = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn oaim run-agent");

        RunningAgent { child: Some(child), port }
    }
}

/// A port nothing is listening on at the time of the call.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
    listener.local_addr().expect("Failed to read local address").port()
}

/// Handle to a background `oaim run-agent` process.
pub struct RunningAgent {
    child: Option<Child>,
    pub port: u16,
}

#[allow(dead_code)]
impl RunningAgent {
    pub fn ping_url(&self) -> String {
        format!("http://127.0.0.1:{}/ping", self.port)
    }

    /// Poll `/ping` until the agent answers, returning the body.
    pub fn wait_until_serving(&self) -> String {
        let deadline = Instant::now() + Duration::from_secs(15);
        loop {
            if let Ok(response) = reqwest::blocking::get(self.ping_url()) {
                return response.text().expect("Failed to read /ping body");
            }
            assert!(Instant::now() < deadline, "agent did not start serving on {}", self.port);
            thread::sleep(Duration::from_millis(100));
        }
    }

    /// Kill the agent and collect what it printed.
    pub fn stop(mut self) -> (String, String) {
        let mut child = self.child.take().expect("agent already stopped");
        let _ = child.kill();
        let output = child.wait_with_output().expect("Failed to collect agent output");
        (
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }
}

impl Drop for RunningAgent {
    fn drop(&mut self) {
        if let Some(child) = self.child.as_mut() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
