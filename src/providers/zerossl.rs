//! ZeroSSL

use super::{accepts_acme_host, directories, lookup_directory};
use crate::{AcmeClient, AcmeProvider, ClientConfig, EndpointIdentifier, Result};
use async_trait::async_trait;
use url::Url;

/// Provider for `acme://zerossl.com`.
///
/// ZeroSSL requires external account binding; that is handled by the
/// protocol layer once connected.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroSslProvider;

impl ZeroSslProvider {
    pub fn directory_url(&self, endpoint: &EndpointIdentifier) -> Result<Url> {
        lookup_directory(endpoint, &[("", directories::ZEROSSL), ("/", directories::ZEROSSL)])
    }
}

#[async_trait]
impl AcmeProvider for ZeroSslProvider {
    fn name(&self) -> &str {
        "zerossl"
    }

    fn accepts(&self, endpoint: &EndpointIdentifier) -> bool {
        accepts_acme_host(endpoint, "zerossl.com")
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
