use anyhow::{Context, Result};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Initialize tracing for the server process.
///
/// Everything goes to stderr: stdout carries the MCP transport and must stay
/// clean of log output.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("")
            .add_directive("slack_mcp=info".parse().unwrap())
            .add_directive("slack_api=debug".parse().unwrap())
            .add_directive(LevelFilter::WARN.into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to set global subscriber")
}
