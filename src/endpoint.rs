//! ACME server identifiers
//!
//! An [`EndpointIdentifier`] names the ACME server a client wants to talk to.
//! It is either the `http`/`https` URL of a server's directory resource, or an
//! `acme://` token understood by a specific provider, e.g.
//! `acme://letsencrypt.org/staging`.

use crate::error::{AcmeError, Result};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Scheme used by provider specific identifiers.
pub const ACME_SCHEME: &str = "acme";

/// Immutable, parsed ACME server identifier.
///
/// Input containing whitespace or control characters is rejected. Everything
/// else goes through [`url::Url`], so the stored form is normalized: the
/// scheme and special-scheme hosts are lower-cased.
///
/// # Example
///
/// ```
/// use acme_dispatch::EndpointIdentifier;
///
/// let endpoint = EndpointIdentifier::parse("acme://letsencrypt.org/staging").unwrap();
/// assert!(endpoint.is_acme_token());
/// assert!(endpoint.host_matches("letsencrypt.org"));
/// assert_eq!(endpoint.path(), "/staging");
///
/// assert!(EndpointIdentifier::parse("not a uri::::").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointIdentifier {
    url: Url,
}

impl EndpointIdentifier {
    /// Parse a raw identifier.
    ///
    /// Only absolute, scheme-qualified URIs are accepted. Anything else fails
    /// with [`AcmeError::MalformedIdentifier`].
    pub fn parse(raw: &str) -> Result<Self> {
        let malformed = |reason: String| AcmeError::MalformedIdentifier {
            input: raw.to_string(),
            reason,
        };

        // `Url::parse` silently strips or percent-encodes these
        if let Some(c) = raw.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(malformed(format!("illegal character {c:?}")));
        }

        Url::parse(raw)
            .map(Self::from_url)
            .map_err(|e| malformed(e.to_string()))
    }

    /// Wrap an already parsed URL.
    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    /// Lower-cased scheme, e.g. `https` or `acme`.
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// Path component. Empty for `acme://host` style tokens without a path.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Whether this is a provider specific `acme://` token.
    pub fn is_acme_token(&self) -> bool {
        self.scheme() == ACME_SCHEME
    }

    /// Whether this is a plain `http` or `https` URL.
    pub fn is_http(&self) -> bool {
        matches!(self.scheme(), "http" | "https")
    }

    /// Case-insensitive comparison of the host part.
    pub fn host_matches(&self, name: &str) -> bool {
        self.host().is_some_and(|host| host.eq_ignore_ascii_case(name))
    }

    /// Consume the identifier and return the underlying URL.
    pub fn into_url(self) -> Url {
        self.url
    }
}

impl fmt::Display for EndpointIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl FromStr for EndpointIdentifier {
    type Err = AcmeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EndpointIdentifier {
    type Error = AcmeError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EndpointIdentifier {
    type Error = AcmeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Url> for EndpointIdentifier {
    fn from(url: Url) -> Self {
        Self::from_url(url)
    }
}

impl AsRef<str> for EndpointIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
