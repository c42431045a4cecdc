//! Provider for plain directory URLs

use crate::{AcmeClient, AcmeProvider, ClientConfig, EndpointIdentifier, Result};
use async_trait::async_trait;

/// Accepts any `http` or `https` URL and treats it as the server's directory.
///
/// Works with every RFC 8555 compliant server.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericProvider;

#[async_trait]
impl AcmeProvider for GenericProvider {
    fn name(&self) -> &str {
        "generic"
    }

    fn accepts(&self, endpoint: &EndpointIdentifier) -> bool {
        endpoint.is_http()
    }

    async fn connect(
        &self,
        endpoint: &EndpointIdentifier,
        config: &ClientConfig,
    ) -> Result<AcmeClient> {
        AcmeClient::new(endpoint.clone(), self.name(), endpoint.as_url().clone(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_schemes() {
        let provider = GenericProvider;

        for raw in ["http://localhost:4001/directory", "https://acme.example.test/dir"] {
            assert!(provider.accepts(&EndpointIdentifier::parse(raw).unwrap()));
        }
        for raw in ["acme://letsencrypt.org", "ftp://example.test/dir", "mailto:admin@example.test"] {
            assert!(!provider.accepts(&EndpointIdentifier::parse(raw).unwrap()));
        }
    }

    #[tokio::test]
    async fn test_connect_uses_uri_as_directory() {
        let endpoint = EndpointIdentifier::parse("https://acme.example.test/directory").unwrap();
        let client = GenericProvider
            .connect(&endpoint, &ClientConfig::default())
            .await
            .unwrap();

        assert_eq!(client.directory_url().as_str(), "https://acme.example.test/directory");
        assert_eq!(client.provider(), "generic");
    }
}
