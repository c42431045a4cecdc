//! Let's Encrypt

use super::{accepts_acme_host, directories, lookup_directory};
use crate::{AcmeClient, AcmeProvider, ClientConfig, EndpointIdentifier, Result};
use async_trait::async_trait;
use url::Url;

const HOST: &str = "letsencrypt.org";

/// Provider for `acme://letsencrypt.org`.
///
/// - `acme://letsencrypt.org` (or `/`, `/v02`): production
/// - `acme://letsencrypt.org/staging`: staging, for testing
#[derive(Debug, Default, Clone, Copy)]
pub struct LetsEncryptProvider;

impl LetsEncryptProvider {
    /// Directory URL for an accepted identifier
    pub fn directory_url(&self, endpoint: &EndpointIdentifier) -> Result<Url> {
        lookup_directory(
            endpoint,
            &[
                ("", directories::LETS_ENCRYPT_PRODUCTION),
                ("/", directories::LETS_ENCRYPT_PRODUCTION),
                ("/v02", directories::LETS_ENCRYPT_PRODUCTION),
                ("/staging", directories::LETS_ENCRYPT_STAGING),
            ],
        )
    }
}

#[async_trait]
impl AcmeProvider for LetsEncryptProvider {
    fn name(&self) -> &str {
        "letsencrypt"
    }

    fn accepts(&self, endpoint: &EndpointIdentifier) -> bool {
        accepts_acme_host(endpoint, HOST)
    }

    async fn connect(
        &self,
        endpoint: &EndpointIdentifier,
        config: &ClientConfig,
    ) -> Result<AcmeClient> {
        let directory = self.directory_url(endpoint)?;
        AcmeClient::new(endpoint.clone(), self.name(), directory, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AcmeError;

    fn endpoint(raw: &str) -> EndpointIdentifier {
        EndpointIdentifier::parse(raw).unwrap()
    }

    #[test]
    fn test_accepts() {
        assert!(LetsEncryptProvider.accepts(&endpoint("acme://letsencrypt.org")));
        assert!(LetsEncryptProvider.accepts(&endpoint("acme://LetsEncrypt.org/staging")));
        assert!(LetsEncryptProvider.accepts(&endpoint("acme://letsencrypt.org/v01")));
        assert!(!LetsEncryptProvider.accepts(&endpoint("https://letsencrypt.org/")));
        assert!(!LetsEncryptProvider.accepts(&endpoint("acme://example.org")));
    }

    #[test]
    fn test_directory_url() {
        for raw in ["acme://letsencrypt.org", "acme://letsencrypt.org/", "acme://letsencrypt.org/v02"] {
            assert_eq!(
                LetsEncryptProvider.directory_url(&endpoint(raw)).unwrap().as_str(),
                directories::LETS_ENCRYPT_PRODUCTION
            );
        }
        assert_eq!(
            LetsEncryptProvider
                .directory_url(&endpoint("acme://letsencrypt.org/staging"))
                .unwrap()
                .as_str(),
            directories::LETS_ENCRYPT_STAGING
        );
    }

    #[tokio::test]
    async fn test_connect_unknown_path() {
        let err = LetsEncryptProvider
            .connect(&endpoint("acme://letsencrypt.org/v01"), &ClientConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AcmeError::UnknownServer(ref s) if s == "acme://letsencrypt.org/v01"));
    }
}
