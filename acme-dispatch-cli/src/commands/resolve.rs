//! Resolve command
//!
//! Shows which provider serves a URI, without connecting.

use crate::error::CliResult;
use acme_dispatch::{EndpointIdentifier, ProviderRegistry, ProviderResolver};
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ResolveReport {
    /// Normalized server URI
    pub uri: String,
    pub provider: String,
}

pub fn execute<R: ProviderRegistry>(
    resolver: &ProviderResolver<R>,
    uri: &str,
) -> CliResult<ResolveReport> {
    let endpoint = EndpointIdentifier::parse(uri)?;
    let provider = resolver.select(&endpoint)?;

    Ok(ResolveReport {
        uri: endpoint.to_string(),
        provider: provider.name().to_string(),
    })
}

impl fmt::Display for ResolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.uri.bold(), "→".dimmed(), self.provider.green())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use acme_dispatch::{AcmeError, InMemoryRegistry, providers::GenericProvider};

    #[test]
    fn test_resolve_builtin() {
        let report = execute(&ProviderResolver::builtin(), "acme://letsencrypt.org/staging").unwrap();

        assert_eq!(report.uri, "acme://letsencrypt.org/staging");
        assert_eq!(report.provider, "letsencrypt");
        assert!(report.to_string().contains("letsencrypt"));
    }

    #[test]
    fn test_resolve_ambiguous() {
        let registry = InMemoryRegistry::new();
        registry.register(GenericProvider);
        registry.register(GenericProvider);

        let err = execute(&ProviderResolver::new(registry), "https://example.test/dir").unwrap_err();
        assert!(matches!(
            err,
            CliError::Acme(AcmeError::AmbiguousProvider { count: 2, .. })
        ));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_resolve_malformed() {
        let err = execute(&ProviderResolver::builtin(), "not a uri::::").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
