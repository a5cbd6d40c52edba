//! Providers compiled into this binary.

use super::console::ConsolePaymentService;
use super::in_memory::InMemoryRegistrations;
use crate::application::registry::ProviderCatalog;
use crate::domain::ports::{Capability, PaymentService, PaymentServiceBox};
use crate::error::DiscoveryError;

/// Every payment implementation this binary can construct.
pub fn catalog() -> Result<ProviderCatalog<dyn PaymentService>, DiscoveryError> {
    let mut catalog = ProviderCatalog::new();
    catalog.register(ConsolePaymentService::IDENTITY, || {
        Ok(Box::new(ConsolePaymentService::new()) as PaymentServiceBox)
    })?;
    Ok(catalog)
}

/// The static registration table used when no manifest directory is configured.
pub fn registrations() -> InMemoryRegistrations {
    let mut source = InMemoryRegistrations::new();
    source.declare(<dyn PaymentService>::ID, ConsolePaymentService::IDENTITY, 0);
    source
}
