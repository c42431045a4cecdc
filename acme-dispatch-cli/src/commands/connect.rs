//! Connect command
//!
//! Resolves a URI and lets the selected provider create a client.

use crate::error::CliResult;
use acme_dispatch::{ProviderRegistry, ProviderResolver};
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ConnectReport {
    pub uri: String,
    pub provider: String,
    pub directory_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

pub async fn execute<R: ProviderRegistry>(
    resolver: &ProviderResolver<R>,
    uri: &str,
) -> CliResult<ConnectReport> {
    let client = resolver.resolve_str(uri).await?;
    tracing::debug!(provider = client.provider(), directory = %client.directory_url(), "Connected");

    Ok(ConnectReport {
        uri: client.endpoint().to_string(),
        provider: client.provider().to_string(),
        directory_url: client.directory_url().to_string(),
        timeout_secs: client.config().timeout.as_secs(),
        user_agent: client.config().user_agent.clone(),
    })
}

impl fmt::Display for ConnectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", "✓".green(), self.uri.bold())?;
        writeln!(f, "  provider:   {}", self.provider.green())?;
        writeln!(f, "  directory:  {}", self.directory_url)?;
        writeln!(f, "  timeout:    {}s", self.timeout_secs)?;
        write!(f, "  user agent: {}", self.user_agent)
    }
}
