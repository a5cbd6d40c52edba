use crate::domain::ports::{Capability, ProviderFactory, RegistrationSource, RegistrationSourceBox};
use crate::domain::registration::ProviderEntry;
use crate::domain::selection::SelectionPolicy;
use crate::error::{BoxError, DiscoveryError};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use tracing::debug;

/// Every implementation the process knows how to construct, keyed by identity.
///
/// The catalog answers "how do I build `paylink.console`?". Whether that
/// implementation is actually offered for a capability is decided by the
/// registration source.
pub struct ProviderCatalog<C: ?Sized> {
    factories: HashMap<String, ProviderFactory<C>>,
}

impl<C: ?Sized> Default for ProviderCatalog<C> {
    fn default() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }
}

impl<C: ?Sized> ProviderCatalog<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the default construction path for `identity`.
    pub fn register<F>(&mut self, identity: impl Into<String>, factory: F) -> Result<(), DiscoveryError>
    where
        F: Fn() -> Result<Box<C>, BoxError> + Send + Sync + 'static,
    {
        let identity = identity.into();
        if self.factories.contains_key(&identity) {
            return Err(DiscoveryError::DuplicateImplementer(identity));
        }
        self.factories.insert(identity, Box::new(factory));
        Ok(())
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.factories.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn factory(&self, identity: &str) -> Option<&ProviderFactory<C>> {
        self.factories.get(identity)
    }
}

/// A provider instance together with the entry it was created from.
pub struct Discovered<C: ?Sized> {
    pub entry: ProviderEntry,
    pub provider: Box<C>,
}

impl<C: ?Sized> Discovered<C> {
    pub fn identity(&self) -> &str {
        &self.entry.identity
    }

    pub fn into_inner(self) -> Box<C> {
        self.provider
    }
}

impl<C: ?Sized> Deref for Discovered<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.provider
    }
}

impl<C: ?Sized> fmt::Debug for Discovered<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discovered").field("entry", &self.entry).finish_non_exhaustive()
    }
}

/// Lazy result of one discovery pass.
///
/// Entries are resolved up front; each provider is only constructed when its
/// element is pulled.
pub struct Discovery<'a, C: ?Sized> {
    pending: std::vec::IntoIter<(ProviderEntry, &'a ProviderFactory<C>)>,
}

impl<C: ?Sized> Iterator for Discovery<'_, C> {
    type Item = Result<Discovered<C>, DiscoveryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (entry, factory) = self.pending.next()?;
        debug!(identity = %entry.identity, "instantiating provider");
        Some(match factory() {
            Ok(provider) => Ok(Discovered { entry, provider }),
            Err(source) => Err(DiscoveryError::Instantiation {
                identity: entry.identity,
                source,
            }),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pending.size_hint()
    }
}

impl<C: ?Sized> ExactSizeIterator for Discovery<'_, C> {}

/// Locates providers of capability `C` by reading a registration source and
/// building the declared implementations from a catalog.
///
/// Results are not cached: every call to [`discover`](Self::discover) rescans
/// the source.
pub struct ProviderRegistry<C: ?Sized, S = RegistrationSourceBox> {
    catalog: ProviderCatalog<C>,
    source: S,
}

impl<C, S> ProviderRegistry<C, S>
where
    C: ?Sized + Capability,
    S: RegistrationSource,
{
    pub fn new(catalog: ProviderCatalog<C>, source: S) -> Self {
        Self { catalog, source }
    }

    /// Starts a discovery pass for `C`.
    ///
    /// Fails if the source is malformed or declares an identity the catalog
    /// cannot build. Construction failures surface per element.
    pub fn discover(&self) -> Result<Discovery<'_, C>, DiscoveryError> {
        let entries = self.source.entries(C::ID)?;
        debug!(
            capability = C::ID,
            operation = C::OPERATION,
            entries = entries.len(),
            "scanned registration source"
        );

        let resolved = entries
            .into_iter()
            .map(|entry| match self.catalog.factory(&entry.identity) {
                Some(factory) => Ok((entry, factory)),
                None => Err(DiscoveryError::UnknownImplementer {
                    capability: C::ID.to_string(),
                    identity: entry.identity,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Discovery {
            pending: resolved.into_iter(),
        })
    }

    /// Runs a discovery pass and picks one provider according to `policy`.
    ///
    /// `Ok(None)` means nothing is registered for `C`.
    pub fn select(&self, policy: SelectionPolicy) -> Result<Option<Discovered<C>>, DiscoveryError> {
        let mut discovery = self.discover()?;
        match policy {
            SelectionPolicy::First => discovery.next().transpose(),
            SelectionPolicy::Priority => {
                let mut best: Option<Discovered<C>> = None;
                for candidate in discovery {
                    let candidate = candidate?;
                    if best
                        .as_ref()
                        .is_none_or(|current| candidate.entry.priority > current.entry.priority)
                    {
                        best = Some(candidate);
                    }
                }
                Ok(best)
            }
            SelectionPolicy::ExactlyOne => {
                let count = discovery.len();
                if count > 1 {
                    return Err(DiscoveryError::Ambiguous {
                        capability: C::ID.to_string(),
                        count,
                    });
                }
                discovery.next().transpose()
            }
        }
    }
}
