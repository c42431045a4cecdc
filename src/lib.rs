//! # acme-dispatch
//!
//! Connect to an ACME (Automatic Certificate Management Environment) server by
//! URI. The URI is routed to exactly one registered provider, which creates the
//! client for that server.
//!
//! ## Features
//!
//! - ✅ **Provider Resolution** - One provider per server URI, conflicts are reported
//! - ✅ **Pluggable Providers** - Register your own at link time or at runtime
//! - ✅ **Built-in Providers** - Generic directory URLs, Let's Encrypt, Pebble, ZeroSSL, BuyPass, Google
//! - ✅ **Typed Errors** - Malformed input, missing or ambiguous providers, provider failures
//!
//! ## Quick Start
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Plain directory URL, served by the generic provider
//!     let client = acme_dispatch::connect("https://acme-v02.api.letsencrypt.org/directory").await?;
//!
//!     // Provider specific URI
//!     let staging = acme_dispatch::connect("acme://letsencrypt.org/staging").await?;
//!     println!("{} -> {}", staging.provider(), staging.directory_url());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Injecting Providers
//!
//! ```
//! use acme_dispatch::{InMemoryRegistry, ProviderResolver, providers::GenericProvider};
//!
//! let registry = InMemoryRegistry::new();
//! registry.register(GenericProvider);
//!
//! let resolver = ProviderResolver::new(registry);
//! # let _ = resolver;
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use acme_dispatch::{AcmeError, ErrorCategory};
//!
//! # async fn example() {
//! match acme_dispatch::connect("acme://ca.example.invalid").await {
//!     Ok(client) => println!("connected via {}", client.provider()),
//!     Err(e) if e.category() == ErrorCategory::CallerInput => eprintln!("fix your input: {e}"),
//!     Err(e @ AcmeError::NoProviderFound(_)) => eprintln!("fix your deployment: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod resolver;

pub use client::*;
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use endpoint::*;
pub use error::*;
pub use provider::*;
pub use registry::{InMemoryRegistry, InventoryRegistry, ProviderRegistration, ProviderRegistry};
pub use resolver::*;

#[doc(hidden)]
pub use inventory;
