//! BuyPass Go SSL

use super::{accepts_acme_host, directories, lookup_directory};
use crate::{AcmeClient, AcmeProvider, ClientConfig, EndpointIdentifier, Result};
use async_trait::async_trait;
use url::Url;

/// Provider for `acme://buypass.com` and `acme://buypass.com/staging`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuyPassProvider;

impl BuyPassProvider {
    pub fn directory_url(&self, endpoint: &EndpointIdentifier) -> Result<Url> {
        lookup_directory(
            endpoint,
            &[
                ("", directories::BUYPASS),
                ("/", directories::BUYPASS),
                ("/staging", directories::BUYPASS_STAGING),
            ],
        )
    }
}

#[async_trait]
impl AcmeProvider for BuyPassProvider {
    fn name(&self) -> &str {
        "buypass"
    }

    fn accepts(&self, endpoint: &EndpointIdentifier) -> bool {
        accepts_acme_host(endpoint, "buypass.com")
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

    #[test]
    fn test_buypass() {
        let production = EndpointIdentifier::parse("acme://buypass.com").unwrap();
        let staging = EndpointIdentifier::parse("acme://buypass.com/staging").unwrap();

        assert!(BuyPassProvider.accepts(&production));
        assert_eq!(
            BuyPassProvider.directory_url(&production).unwrap().as_str(),
            directories::BUYPASS
        );
        assert_eq!(
            BuyPassProvider.directory_url(&staging).unwrap().as_str(),
            directories::BUYPASS_STAGING
        );
        assert!(!BuyPassProvider.accepts(&EndpointIdentifier::parse("acme://buypass.no").unwrap()));
    }
}
