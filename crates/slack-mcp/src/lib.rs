//! MCP server exposing Slack workspace operations as tools over stdio.

pub mod logging;
pub mod server;

pub use server::SlackServer;

use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};

/// Serve over the stdio transport until the channel closes.
pub async fn serve<S>(server: S) -> Result<()>
where
    S: rmcp::ServerHandler,
{
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
