//! Client for the subset of the Slack Web API that the MCP server exposes.
//!
//! Every method issues exactly one bearer-authenticated HTTPS request and
//! returns the decoded response body verbatim, including any error Slack
//! embeds in it. Interpretation of the payload is left to the caller.

pub mod client;
pub mod config;
pub mod error;

pub use client::SlackClient;
pub use config::SlackConfig;
pub use error::Error;
