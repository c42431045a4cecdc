/// Client configuration handed to providers when they connect
use crate::error::{AcmeError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default network timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable names understood by [`ClientConfig::from_env`].
pub mod env_vars {
    /// Network timeout in seconds
    pub const TIMEOUT: &str = "ACME_DISPATCH_TIMEOUT";

    /// User-Agent header value
    pub const USER_AGENT: &str = "ACME_DISPATCH_USER_AGENT";

    /// Accept-Language header value
    pub const LOCALE: &str = "ACME_DISPATCH_LOCALE";

    /// Skip TLS certificate verification (`1`/`true`)
    pub const ACCEPT_INVALID_CERTS: &str = "ACME_DISPATCH_ACCEPT_INVALID_CERTS";
}

/// Transport settings applied to every [`AcmeClient`](crate::AcmeClient) a
/// provider creates.
///
/// # Example
///
/// ```
/// use acme_dispatch::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(30))
///     .with_locale("de-DE");
///
/// assert_eq!(config.timeout, Duration::from_secs(30));
/// assert_eq!(config.locale.as_deref(), Some("de-DE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Network timeout for requests made through the client
    pub timeout: Duration,

    /// User-Agent sent with every request
    pub user_agent: String,

    /// Preferred language for server messages (Accept-Language)
    pub locale: Option<String>,

    /// Accept TLS certificates that do not chain to a trusted root.
    /// Only meant for local test servers.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            locale: None,
            accept_invalid_certs: false,
        }
    }
}

/// `acme-dispatch/<version>`
pub fn default_user_agent() -> String {
    format!("acme-dispatch/{}", env!("CARGO_PKG_VERSION"))
}

/// On-disk representation, every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    timeout: Option<u64>,
    user_agent: Option<String>,
    locale: Option<String>,
    accept_invalid_certs: Option<bool>,
}

impl ClientConfig {
    /// Set the network timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the Accept-Language header
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Accept invalid TLS certificates
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build a configuration from `ACME_DISPATCH_*` environment variables,
    /// falling back to the defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(env_vars::TIMEOUT) {
            config.timeout = parse_timeout(&raw)?;
        }
        if let Some(user_agent) = lookup(env_vars::USER_AGENT).filter(|v| !v.trim().is_empty()) {
            config.user_agent = user_agent;
        }
        if let Some(locale) = lookup(env_vars::LOCALE).filter(|v| !v.trim().is_empty()) {
            config.locale = Some(locale);
        }
        if let Some(raw) = lookup(env_vars::ACCEPT_INVALID_CERTS) {
            config.accept_invalid_certs = parse_flag(&raw);
        }

        Ok(config)
    }

    /// Parse a TOML document.
    ///
    /// ```
    /// use acme_dispatch::ClientConfig;
    ///
    /// let config = ClientConfig::from_toml_str("timeout = 5\nlocale = \"fr\"").unwrap();
    /// assert_eq!(config.timeout.as_secs(), 5);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| AcmeError::Config(format!("TOML parse error: {}", e)))?;

        Ok(Self::default().merge_file(file))
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AcmeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(secs) = file.timeout {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = file.user_agent {
            self.user_agent = user_agent;
        }
        if file.locale.is_some() {
            self.locale = file.locale;
        }
        if let Some(accept) = file.accept_invalid_certs {
            self.accept_invalid_certs = accept;
        }
        self
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| AcmeError::Config(format!("Invalid {} '{}': {}", env_vars::TIMEOUT, raw, e)))
}

fn parse_flag(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("acme-dispatch/"));
        assert!(config.locale.is_none());
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("tester/1.0")
            .with_locale("en-GB")
            .with_accept_invalid_certs(true);

        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "tester/1.0");
        assert_eq!(config.locale.as_deref(), Some("en-GB"));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            (env_vars::TIMEOUT, "42"),
            (env_vars::USER_AGENT, "custom/2"),
            (env_vars::LOCALE, "ja"),
            (env_vars::ACCEPT_INVALID_CERTS, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(42));
        assert_eq!(config.user_agent, "custom/2");
        assert_eq!(config.locale.as_deref(), Some("ja"));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[(env_vars::LOCALE, "  ")])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_lookup_invalid_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(env_vars::TIMEOUT, "soon")])).unwrap_err();
        assert!(matches!(err, AcmeError::Config(_)));
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_from_toml_str() {
        let config = ClientConfig::from_toml_str(
            r#"
            timeout = 25
            user_agent = "from-file/1"
            accept_invalid_certs = true
            "#,
        )
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(25));
        assert_eq!(config.user_agent, "from-file/1");
        assert!(config.locale.is_none());
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = ClientConfig::from_toml_str("retries = 3").unwrap_err();
        assert!(matches!(err, AcmeError::Config(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ClientConfig::from_file("/nonexistent/acme-dispatch.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/acme-dispatch.toml"));
    }
}
