//! Google Trust Services

use super::{accepts_acme_host, directories, lookup_directory};
use crate::{AcmeClient, AcmeProvider, ClientConfig, EndpointIdentifier, Result};
use async_trait::async_trait;
use url::Url;

/// Provider for `acme://pki.goog` and `acme://pki.goog/staging`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleProvider;

impl GoogleProvider {
    pub fn directory_url(&self, endpoint: &EndpointIdentifier) -> Result<Url> {
        lookup_directory(
            endpoint,
            &[
                ("", directories::GOOGLE),
                ("/", directories::GOOGLE),
                ("/staging", directories::GOOGLE_STAGING),
            ],
        )
    }
}

#[async_trait]
impl AcmeProvider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn accepts(&self, endpoint: &EndpointIdentifier) -> bool {
        accepts_acme_host(endpoint, "pki.goog")
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
