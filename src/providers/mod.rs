//! Built-in providers
//!
//! | Provider               | Accepts                                    |
//! |------------------------|--------------------------------------------|
//! | [`GenericProvider`]     | any `http://` or `https://` directory URL  |
//! | [`LetsEncryptProvider`] | `acme://letsencrypt.org[/staging]`         |
//! | [`PebbleProvider`]      | `acme://pebble[/host[:port]]`              |
//! | [`ZeroSslProvider`]     | `acme://zerossl.com`                       |
//! | [`BuyPassProvider`]     | `acme://buypass.com[/staging]`             |
//! | [`GoogleProvider`]      | `acme://pki.goog[/staging]`                |
//!
//! The `acme://` providers only look at the host when deciding whether they
//! accept an identifier. An unknown path is reported by `connect` as
//! [`AcmeError::UnknownServer`].

pub mod buypass;
pub mod generic;
pub mod google;
pub mod letsencrypt;
pub mod pebble;
pub mod zerossl;

pub use buypass::BuyPassProvider;
pub use generic::GenericProvider;
pub use google::GoogleProvider;
pub use letsencrypt::LetsEncryptProvider;
pub use pebble::PebbleProvider;
pub use zerossl::ZeroSslProvider;

use crate::{endpoint::EndpointIdentifier, error::*};
use url::Url;

/// ACME directory URLs of well-known certificate authorities
pub mod directories {
    /// Let's Encrypt production directory
    pub const LETS_ENCRYPT_PRODUCTION: &str = "https://acme-v02.api.letsencrypt.org/directory";

    /// Let's Encrypt staging directory (for testing)
    pub const LETS_ENCRYPT_STAGING: &str = "https://acme-staging-v02.api.letsencrypt.org/directory";

    /// ZeroSSL production directory
    pub const ZEROSSL: &str = "https://acme.zerossl.com/v2/DV90";

    /// BuyPass production directory
    pub const BUYPASS: &str = "https://api.buypass.com/acme/directory";

    /// BuyPass test directory
    pub const BUYPASS_STAGING: &str = "https://api.test4.buypass.no/acme/directory";

    /// Google Trust Services
    pub const GOOGLE: &str = "https://dv.acme-v02.api.pki.goog/directory";

    /// Google Trust Services staging
    pub const GOOGLE_STAGING: &str = "https://dv.acme-v02.test-api.pki.goog/directory";
}

crate::register_provider!(GenericProvider);
crate::register_provider!(LetsEncryptProvider);
crate::register_provider!(PebbleProvider);
crate::register_provider!(ZeroSslProvider);
crate::register_provider!(BuyPassProvider);
crate::register_provider!(GoogleProvider);

/// Whether `endpoint` is an `acme://` token for `host`
fn accepts_acme_host(endpoint: &EndpointIdentifier, host: &str) -> bool {
    endpoint.is_acme_token() && endpoint.host_matches(host)
}

/// Look up the directory for the path of an `acme://` token.
///
/// `table` maps paths (including the empty path) to directory URLs.
fn lookup_directory(endpoint: &EndpointIdentifier, table: &[(&str, &str)]) -> Result<Url> {
    let (_, directory) = table
        .iter()
        .find(|(path, _)| *path == endpoint.path())
        .ok_or_else(|| AcmeError::UnknownServer(endpoint.to_string()))?;

    Url::parse(directory)
        .map_err(|e| AcmeError::Connection(format!("Invalid directory URL {}: {}", directory, e)))
}
