use anyhow::Result;
use slack_api::{SlackClient, SlackConfig};
use slack_mcp::SlackServer;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = slack_mcp::logging::init() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    // Missing credentials are the one fatal case; never serve without them.
    let config = match SlackConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}; set SLACK_BOT_TOKEN and SLACK_TEAM_ID to run the server", e);
            std::process::exit(1);
        }
    };

    tracing::info!("starting slack mcp server");
    slack_mcp::serve(SlackServer::new(SlackClient::new(config))).await
}
