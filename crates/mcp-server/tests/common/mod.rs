use anyhow::Context as _;
use std::process::{Child, Command};
use std::time::Duration;

pub use profiler_test_support::ChildGuard;

pub fn ephemeral_port() -> anyhow::Result<u16> {
    profiler_test_support::ephemeral_port()
}

pub async fn wait_until_healthy(url: &str, timeout_dur: Duration) -> anyhow::Result<()> {
    profiler_test_support::wait_until_healthy(url, timeout_dur).await
}

pub fn spawn_server(port: u16) -> anyhow::Result<Child> {
    let bin = env!("CARGO_BIN_EXE_profiler-mcp-server");
    Command::new(bin)
        .env("LINKEDIN_API_KEY", "integration-test-key")
        .arg("--bind")
        .arg(format!("127.0.0.1:{port}"))
        .arg("--log-level")
        .arg("info")
        .spawn()
        .context("spawn profiler-mcp-server")
}
