/// Client handle produced by a provider
use crate::{config::ClientConfig, endpoint::EndpointIdentifier, error::*};
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use url::Url;

/// Connection to an ACME server, as returned by a provider.
///
/// The resolver hands this back to the caller untouched. It carries what the
/// protocol layer needs to start talking to the server: the directory URL the
/// provider mapped the identifier to, and an HTTP client configured from the
/// [`ClientConfig`] in effect at connection time.
///
/// # Example
///
/// ```
/// use acme_dispatch::{AcmeClient, ClientConfig, EndpointIdentifier};
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let endpoint = EndpointIdentifier::parse("https://acme.example.test/directory")?;
/// let directory = endpoint.as_url().clone();
/// let client = AcmeClient::new(endpoint, "generic", directory, &ClientConfig::default())?;
///
/// assert_eq!(client.provider(), "generic");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AcmeClient {
    endpoint: EndpointIdentifier,
    provider: String,
    directory_url: Url,
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl AcmeClient {
    /// Create a client for `directory_url`.
    ///
    /// Fails if the configuration cannot be turned into an HTTP client, for
    /// example when the locale is not a valid header value.
    pub fn new(
        endpoint: EndpointIdentifier,
        provider: impl Into<String>,
        directory_url: Url,
        config: &ClientConfig,
    ) -> Result<Self> {
        let http_client = Self::build_http_client(config)?;

        Ok(Self {
            endpoint,
            provider: provider.into(),
            directory_url,
            config: config.clone(),
            http_client,
        })
    }

    fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        if let Some(locale) = &config.locale {
            let value = HeaderValue::from_str(locale)
                .map_err(|e| AcmeError::Config(format!("Invalid locale '{}': {}", locale, e)))?;
            headers.insert(ACCEPT_LANGUAGE, value);
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(client)
    }

    /// The identifier this client was resolved from
    pub fn endpoint(&self) -> &EndpointIdentifier {
        &self.endpoint
    }

    /// Name of the provider that created this client
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// URL of the server's directory resource
    pub fn directory_url(&self) -> &Url {
        &self.directory_url
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// HTTP client for talking to the server
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}
