//! Provider trait

use crate::{client::AcmeClient, config::ClientConfig, endpoint::EndpointIdentifier, error::Result};
use async_trait::async_trait;

/// A pluggable strategy that knows how to connect to some ACME servers.
///
/// Providers are stateless. The resolver asks every registered provider
/// whether it [`accepts`](Self::accepts) an identifier and calls
/// [`connect`](Self::connect) on the single one that does.
///
/// # Example
///
/// ```
/// use acme_dispatch::{AcmeClient, AcmeProvider, ClientConfig, EndpointIdentifier, Result};
/// use async_trait::async_trait;
///
/// #[derive(Default)]
/// struct InternalCa;
///
/// #[async_trait]
/// impl AcmeProvider for InternalCa {
///     fn name(&self) -> &str {
///         "internal-ca"
///     }
///
///     fn accepts(&self, endpoint: &EndpointIdentifier) -> bool {
///         endpoint.is_acme_token() && endpoint.host_matches("ca.internal")
///     }
///
///     async fn connect(
///         &self,
///         endpoint: &EndpointIdentifier,
///         config: &ClientConfig,
///     ) -> Result<AcmeClient> {
///         let directory = url::Url::parse("https://ca.internal:9000/acme/directory").unwrap();
///         AcmeClient::new(endpoint.clone(), self.name(), directory, config)
///     }
/// }
/// ```
#[async_trait]
pub trait AcmeProvider: Send + Sync {
    /// Name used in logs and diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether this provider can serve `endpoint`.
    ///
    /// Must be pure: no I/O, no side effects, same answer every time.
    fn accepts(&self, endpoint: &EndpointIdentifier) -> bool;

    /// Connect to the server named by `endpoint`.
    ///
    /// Only called for identifiers this provider accepts.
    async fn connect(&self, endpoint: &EndpointIdentifier, config: &ClientConfig)
    -> Result<AcmeClient>;
}
