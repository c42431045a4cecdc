//! Provider resolution and connection dispatch

use crate::{
    client::AcmeClient,
    config::ClientConfig,
    endpoint::EndpointIdentifier,
    error::{AcmeError, Result},
    provider::AcmeProvider,
    registry::{InventoryRegistry, ProviderRegistry},
};
use std::sync::Arc;

/// Routes an identifier to the one provider that accepts it.
///
/// Every call enumerates the registry again, so providers added or removed
/// between calls are taken into account. Nothing is cached.
///
/// # Example
///
/// ```no_run
/// use acme_dispatch::ProviderResolver;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = ProviderResolver::builtin();
/// let client = resolver.resolve_str("acme://letsencrypt.org/staging").await?;
///
/// println!("{} -> {}", client.provider(), client.directory_url());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProviderResolver<R = InventoryRegistry> {
    registry: R,
    config: ClientConfig,
}

impl ProviderResolver<InventoryRegistry> {
    /// Resolver over the built-in, link-time registered providers
    pub fn builtin() -> Self {
        Self::new(InventoryRegistry)
    }
}

impl Default for ProviderResolver<InventoryRegistry> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<R: ProviderRegistry> ProviderResolver<R> {
    /// Create a resolver over `registry` with the default client configuration
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            config: ClientConfig::default(),
        }
    }

    /// Use `config` for the clients providers create
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// All registered providers that accept `endpoint`
    pub fn candidates(&self, endpoint: &EndpointIdentifier) -> Vec<Arc<dyn AcmeProvider>> {
        let providers = self.registry.providers();
        let registered = providers.len();

        let candidates: Vec<_> = providers
            .into_iter()
            .filter(|provider| provider.accepts(endpoint))
            .collect();

        tracing::debug!(
            endpoint = %endpoint,
            registered,
            candidates = candidates.len(),
            "Filtered ACME providers"
        );

        candidates
    }

    /// Pick the single provider accepting `endpoint` without connecting.
    ///
    /// Fails with [`AcmeError::NoProviderFound`] when nothing accepts the
    /// identifier and with [`AcmeError::AmbiguousProvider`] when more than
    /// one provider does.
    pub fn select(&self, endpoint: &EndpointIdentifier) -> Result<Arc<dyn AcmeProvider>> {
        let mut candidates = self.candidates(endpoint);

        match candidates.len() {
            0 => {
                tracing::warn!(endpoint = %endpoint, "No ACME provider found");
                Err(AcmeError::NoProviderFound(endpoint.clone()))
            }
            1 => Ok(candidates.remove(0)),
            count => {
                let providers: Vec<String> =
                    candidates.iter().map(|p| p.name().to_string()).collect();
                tracing::warn!(
                    endpoint = %endpoint,
                    count,
                    providers = ?providers,
                    "Multiple ACME providers accept the same server"
                );
                Err(AcmeError::AmbiguousProvider {
                    identifier: endpoint.clone(),
                    count,
                    providers,
                })
            }
        }
    }

    /// Connect to the server named by `endpoint`.
    ///
    /// The selected provider's result is returned as is, including its errors.
    pub async fn resolve(&self, endpoint: &EndpointIdentifier) -> Result<AcmeClient> {
        let provider = self.select(endpoint)?;
        tracing::info!(endpoint = %endpoint, provider = provider.name(), "Connecting to ACME server");

        provider.connect(endpoint, &self.config).await
    }

    /// Parse `server_uri` and connect to it.
    ///
    /// A malformed URI fails with [`AcmeError::MalformedIdentifier`] before
    /// the registry is consulted.
    pub async fn resolve_str(&self, server_uri: &str) -> Result<AcmeClient> {
        let endpoint = EndpointIdentifier::parse(server_uri)?;
        self.resolve(&endpoint).await
    }
}

/// Connect to an ACME server using the built-in providers.
///
/// `server_uri` is either the `http`/`https` URL of the server's directory or
/// a provider specific `acme://` URI.
pub async fn connect(server_uri: &str) -> Result<AcmeClient> {
    ProviderResolver::builtin().resolve_str(server_uri).await
}

/// Connect to an already parsed identifier using the built-in providers.
pub async fn connect_endpoint(endpoint: &EndpointIdentifier) -> Result<AcmeClient> {
    ProviderResolver::builtin().resolve(endpoint).await
}
