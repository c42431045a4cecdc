//! Integration tests for the providers registered at link time

use acme_dispatch::providers::directories;
use acme_dispatch::*;
use std::time::Duration;

#[tokio::test]
async fn test_connect_well_known_servers() {
    let cases = [
        ("https://acme.example.test/directory", "generic", "https://acme.example.test/directory"),
        ("acme://letsencrypt.org", "letsencrypt", directories::LETS_ENCRYPT_PRODUCTION),
        ("acme://letsencrypt.org/staging", "letsencrypt", directories::LETS_ENCRYPT_STAGING),
        ("acme://pebble", "pebble", "https://localhost:14000/dir"),
        ("acme://zerossl.com", "zerossl", directories::ZEROSSL),
        ("acme://buypass.com", "buypass", directories::BUYPASS),
        ("acme://buypass.com/staging", "buypass", directories::BUYPASS_STAGING),
        ("acme://pki.goog", "google", directories::GOOGLE),
        ("acme://pki.goog/staging", "google", directories::GOOGLE_STAGING),
    ];

    for (uri, provider, directory) in cases {
        let client = connect(uri).await.unwrap();
        assert_eq!(client.provider(), provider, "{uri}");
        assert_eq!(client.directory_url().as_str(), directory, "{uri}");
        assert_eq!(client.endpoint().as_str(), uri);
    }
}

#[tokio::test]
async fn test_unknown_acme_uri_has_no_provider() {
    let err = connect("acme://ca.example.invalid").await.unwrap_err();

    assert!(matches!(err, AcmeError::NoProviderFound(_)));
    assert_eq!(
        err.to_string(),
        "No ACME provider found for acme://ca.example.invalid"
    );
}

#[tokio::test]
async fn test_unknown_path_is_provider_error() {
    let err = connect("acme://letsencrypt.org/v01").await.unwrap_err();

    assert!(matches!(err, AcmeError::UnknownServer(_)));
    assert_eq!(err.category(), ErrorCategory::Provider);
}

#[tokio::test]
async fn test_malformed_uri() {
    let err = connect("not a uri::::").await.unwrap_err();
    assert!(matches!(err, AcmeError::MalformedIdentifier { .. }));
}

#[tokio::test]
async fn test_resolver_config_reaches_client() {
    let config = ClientConfig::default()
        .with_timeout(Duration::from_secs(3))
        .with_locale("fr-CH");
    let resolver = ProviderResolver::builtin().with_config(config.clone());

    let client = resolver.resolve_str("acme://letsencrypt.org").await.unwrap();
    assert_eq!(client.config(), &config);
}

#[tokio::test]
async fn test_builtin_seeded_registry_can_be_extended() {
    let registry = InMemoryRegistry::with_builtin();
    let resolver = ProviderResolver::new(registry.clone());

    // a second generic provider makes plain URLs ambiguous
    registry.register(providers::GenericProvider);
    let err = resolver
        .resolve_str("https://acme.example.test/directory")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AcmeError::AmbiguousProvider { count: 2, ref providers, .. }
            if providers.iter().all(|p| p == "generic")
    ));

    // acme:// tokens are unaffected
    let client = resolver.resolve_str("acme://pebble").await.unwrap();
    assert_eq!(client.provider(), "pebble");
}
