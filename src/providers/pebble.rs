//! Pebble test server

use super::accepts_acme_host;
use crate::{AcmeClient, AcmeError, AcmeProvider, ClientConfig, EndpointIdentifier, Result};
use async_trait::async_trait;
use url::Url;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 14000;

/// Provider for a local [Pebble](https://github.com/letsencrypt/pebble) server.
///
/// - `acme://pebble`: `https://localhost:14000/dir`
/// - `acme://pebble/pebble.test`: `https://pebble.test:14000/dir`
/// - `acme://pebble/pebble.test:14001`: `https://pebble.test:14001/dir`
///
/// Pebble serves its API with a certificate from a throwaway CA, so clients
/// created by this provider skip certificate verification.
#[derive(Debug, Default, Clone, Copy)]
pub struct PebbleProvider;

impl PebbleProvider {
    /// Directory URL for an accepted identifier
    pub fn directory_url(&self, endpoint: &EndpointIdentifier) -> Result<Url> {
        let unknown = || AcmeError::UnknownServer(endpoint.to_string());

        let path = endpoint.path();
        let authority = path.strip_prefix('/').unwrap_or(path);
        if authority.contains('/') {
            return Err(unknown());
        }

        let (host, port) = match authority.rsplit_once(':') {
            _ if authority.is_empty() => (DEFAULT_HOST, DEFAULT_PORT),
            // bracketed IPv6 literal without a port
            _ if authority.ends_with(']') => (authority, DEFAULT_PORT),
            Some((host, port)) => (host, port.parse::<u16>().map_err(|_| unknown())?),
            None => (authority, DEFAULT_PORT),
        };
        if !is_host(host) {
            return Err(unknown());
        }

        Url::parse(&format!("https://{}:{}/dir", host, port)).map_err(|_| unknown())
    }
}

/// A DNS name, IPv4 address or bracketed IPv6 literal. Anything else (userinfo,
/// queries, fragments) would change what the directory URL points at.
fn is_host(host: &str) -> bool {
    match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        Some(ipv6) => ipv6.parse::<std::net::Ipv6Addr>().is_ok(),
        None => {
            !host.is_empty()
                && host
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        }
    }
}

#[async_trait]
impl AcmeProvider for PebbleProvider {
    fn name(&self) -> &str {
        "pebble"
    }

    fn accepts(&self, endpoint: &EndpointIdentifier) -> bool {
        accepts_acme_host(endpoint, "pebble")
    }

    async fn connect(
        &self,
        endpoint: &EndpointIdentifier,
        config: &ClientConfig,
    ) -> Result<AcmeClient> {
        let directory = self.directory_url(endpoint)?;
        let config = config.clone().with_accept_invalid_certs(true);
        AcmeClient::new(endpoint.clone(), self.name(), directory, &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(raw: &str) -> Result<String> {
        let endpoint = EndpointIdentifier::parse(raw).unwrap();
        PebbleProvider
            .directory_url(&endpoint)
            .map(|url| url.to_string())
    }

    #[test]
    fn test_default_directory() {
        assert_eq!(directory("acme://pebble").unwrap(), "https://localhost:14000/dir");
        assert_eq!(directory("acme://pebble/").unwrap(), "https://localhost:14000/dir");
    }

    #[test]
    fn test_custom_host_and_port() {
        assert_eq!(
            directory("acme://pebble/pebble.test").unwrap(),
            "https://pebble.test:14000/dir"
        );
        assert_eq!(
            directory("acme://pebble/pebble.test:14001").unwrap(),
            "https://pebble.test:14001/dir"
        );
        assert_eq!(
            directory("acme://pebble/10.0.0.7:443").unwrap(),
            "https://10.0.0.7/dir"
        );
        assert_eq!(
            directory("acme://pebble/[::1]").unwrap(),
            "https://[::1]:14000/dir"
        );
        assert_eq!(
            directory("acme://pebble/[::1]:14001").unwrap(),
            "https://[::1]:14001/dir"
        );
    }

    #[test]
    fn test_invalid_paths() {
        for raw in [
            "acme://pebble/host/extra",
            "acme://pebble/host:notaport",
            "acme://pebble/:14000",
            "acme://pebble/host:70000",
            "acme://pebble/admin@evil.test",
            "acme://pebble/admin:secret@evil.test:14000",
            "acme://pebble/[not-ipv6]",
            "acme://pebble/[::1",
        ] {
            assert!(
                matches!(directory(raw), Err(AcmeError::UnknownServer(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_connect_relaxes_tls() {
        let endpoint = EndpointIdentifier::parse("acme://pebble").unwrap();
        let client = PebbleProvider
            .connect(&endpoint, &ClientConfig::default())
            .await
            .unwrap();

        assert!(client.config().accept_invalid_certs);
        assert_eq!(client.provider(), "pebble");
    }
}
