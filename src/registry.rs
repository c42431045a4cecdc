//! Provider registries
//!
//! A [`ProviderRegistry`] enumerates the providers available to a resolver.
//! Two implementations ship with the crate:
//!
//! - [`InventoryRegistry`] collects providers submitted at link time with
//!   [`register_provider!`](crate::register_provider). All built-in providers
//!   are registered this way.
//! - [`InMemoryRegistry`] holds an explicit list that can be changed at
//!   runtime. Use it to inject providers in tests or to add providers that
//!   are only known once the program runs.

use crate::provider::AcmeProvider;
use parking_lot::RwLock;
use std::sync::Arc;

/// Source of the providers a resolver chooses from.
///
/// Enumeration must not fail and must not have side effects visible to the
/// resolver. Order carries no meaning.
pub trait ProviderRegistry: Send + Sync {
    /// All providers currently registered
    fn providers(&self) -> Vec<Arc<dyn AcmeProvider>>;
}

impl<R: ProviderRegistry + ?Sized> ProviderRegistry for Arc<R> {
    fn providers(&self) -> Vec<Arc<dyn AcmeProvider>> {
        (**self).providers()
    }
}

impl<R: ProviderRegistry + ?Sized> ProviderRegistry for &R {
    fn providers(&self) -> Vec<Arc<dyn AcmeProvider>> {
        (**self).providers()
    }
}

impl ProviderRegistry for Vec<Arc<dyn AcmeProvider>> {
    fn providers(&self) -> Vec<Arc<dyn AcmeProvider>> {
        self.clone()
    }
}

/// A provider entry collected via inventory
pub struct ProviderRegistration {
    /// Provider type name (for debugging)
    pub type_name: &'static str,
    construct: fn() -> Arc<dyn AcmeProvider>,
}

inventory::collect!(ProviderRegistration);

impl ProviderRegistration {
    /// Create a registration from a constructor function
    pub const fn new(type_name: &'static str, construct: fn() -> Arc<dyn AcmeProvider>) -> Self {
        Self {
            type_name,
            construct,
        }
    }

    /// Create a fresh provider instance
    pub fn instantiate(&self) -> Arc<dyn AcmeProvider> {
        (self.construct)()
    }
}

#[doc(hidden)]
pub fn construct<P>() -> Arc<dyn AcmeProvider>
where
    P: AcmeProvider + Default + 'static,
{
    Arc::new(P::default())
}

/// Register a provider type with the process-wide [`InventoryRegistry`].
///
/// The type must implement [`AcmeProvider`] and [`Default`].
///
/// ```ignore
/// acme_dispatch::register_provider!(MyProvider);
/// ```
#[macro_export]
macro_rules! register_provider {
    ($provider:ty) => {
        $crate::inventory::submit! {
            $crate::registry::ProviderRegistration::new(
                stringify!($provider),
                $crate::registry::construct::<$provider>,
            )
        }
    };
}

/// Registry over every provider submitted with
/// [`register_provider!`](crate::register_provider).
///
/// The set is fixed at link time. Each call to
/// [`providers`](ProviderRegistry::providers) creates new instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryRegistry;

impl InventoryRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Type names of all registrations
    pub fn registrations(&self) -> Vec<&'static str> {
        inventory::iter::<ProviderRegistration>
            .into_iter()
            .map(|entry| entry.type_name)
            .collect()
    }
}

impl ProviderRegistry for InventoryRegistry {
    fn providers(&self) -> Vec<Arc<dyn AcmeProvider>> {
        inventory::iter::<ProviderRegistration>
            .into_iter()
            .map(ProviderRegistration::instantiate)
            .collect()
    }
}

/// Runtime-extensible registry.
///
/// Clones share the same provider list, so a provider registered through one
/// handle is seen by every resolver holding another.
#[derive(Clone, Default)]
pub struct InMemoryRegistry {
    providers: Arc<RwLock<Vec<Arc<dyn AcmeProvider>>>>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in providers
    pub fn with_builtin() -> Self {
        Self {
            providers: Arc::new(RwLock::new(InventoryRegistry.providers())),
        }
    }

    /// Add a provider
    pub fn register<P: AcmeProvider + 'static>(&self, provider: P) {
        self.register_arc(Arc::new(provider));
    }

    /// Add an already shared provider
    pub fn register_arc(&self, provider: Arc<dyn AcmeProvider>) {
        tracing::debug!(provider = provider.name(), "Registering ACME provider");
        self.providers.write().push(provider);
    }

    /// Remove every provider named `name`, returning how many were removed
    pub fn deregister(&self, name: &str) -> usize {
        let mut providers = self.providers.write();
        let before = providers.len();
        providers.retain(|p| p.name() != name);
        before - providers.len()
    }

    /// Remove all providers
    pub fn clear(&self) {
        self.providers.write().clear();
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}

impl ProviderRegistry for InMemoryRegistry {
    fn providers(&self) -> Vec<Arc<dyn AcmeProvider>> {
        self.providers.read().clone()
    }
}

impl std::fmt::Debug for InMemoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .providers
            .read()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        f.debug_struct("InMemoryRegistry")
            .field("providers", &names)
            .finish()
    }
}
