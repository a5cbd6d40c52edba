use super::payment::{PaymentReceipt, PaymentRequest};
use super::registration::ProviderEntry;
use crate::error::{BoxError, DiscoveryError, Result};

/// Type-level descriptor of a discoverable capability.
///
/// Implemented for the trait-object type of a capability so the registry can be
/// generic over it while registration sources still look it up by name.
pub trait Capability {
    /// Name under which providers of this capability are registered.
    const ID: &'static str;
    /// Signature of the operation the capability exposes.
    const OPERATION: &'static str;
}

/// The payment capability: charge `request.price` for `request.product_name`.
pub trait PaymentService: Send + Sync {
    fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt>;
}

impl Capability for dyn PaymentService {
    const ID: &'static str = "paylink.PaymentService";
    const OPERATION: &'static str = "pay(product_name, price)";
}

pub type PaymentServiceBox = Box<dyn PaymentService>;

/// Default construction path of a provider.
pub type ProviderFactory<C> = Box<dyn Fn() -> std::result::Result<Box<C>, BoxError> + Send + Sync>;

pub type PaymentServiceFactory = ProviderFactory<dyn PaymentService>;

/// Where registration entries come from: a compiled-in table, a manifest, ...
pub trait RegistrationSource {
    /// Entries declared for `capability`, in declaration order.
    ///
    /// Duplicates are returned as declared. A malformed source is an error,
    /// never a shortened list.
    fn entries(&self, capability: &str) -> std::result::Result<Vec<ProviderEntry>, DiscoveryError>;
}

impl<S: RegistrationSource + ?Sized> RegistrationSource for Box<S> {
    fn entries(&self, capability: &str) -> std::result::Result<Vec<ProviderEntry>, DiscoveryError> {
        (**self).entries(capability)
    }
}

pub type RegistrationSourceBox = Box<dyn RegistrationSource + Send + Sync>;
