use super::registry::ProviderRegistry;
use crate::domain::payment::{PaymentReceipt, PaymentRequest};
use crate::domain::ports::{Capability, PaymentService, RegistrationSource, RegistrationSourceBox};
use crate::domain::selection::SelectionPolicy;
use crate::error::Result;
use std::io::Write;
use tracing::{debug, warn};

/// Line written when discovery finds no payment provider.
pub const PROVIDER_NOT_FOUND: &str = "未找到支付模块";

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Paid(PaymentReceipt),
    ProviderNotFound,
}

/// Consumer of the payment capability.
///
/// `Checkout` has no compile-time knowledge of any provider. It asks the
/// registry for one, invokes it once, and reports the outcome as a single line.
pub struct Checkout<S = RegistrationSourceBox> {
    registry: ProviderRegistry<dyn PaymentService, S>,
    policy: SelectionPolicy,
}

impl<S: RegistrationSource> Checkout<S> {
    pub fn new(registry: ProviderRegistry<dyn PaymentService, S>, policy: SelectionPolicy) -> Self {
        Self { registry, policy }
    }

    /// Pays for `request` with the selected provider and writes the outcome to `out`.
    ///
    /// A missing provider is reported, not returned as an error. Discovery
    /// failures and provider rejections propagate.
    pub fn run<W: Write>(&self, request: &PaymentRequest, out: &mut W) -> Result<CheckoutOutcome> {
        match self.registry.select(self.policy)? {
            Some(provider) => {
                debug!(provider = provider.identity(), policy = ?self.policy, "provider selected");
                let receipt = provider.pay(request)?;
                writeln!(out, "{}", receipt.message)?;
                Ok(CheckoutOutcome::Paid(receipt))
            }
            None => {
                warn!(capability = <dyn PaymentService>::ID, "no payment provider registered");
                writeln!(out, "{PROVIDER_NOT_FOUND}")?;
                Ok(CheckoutOutcome::ProviderNotFound)
            }
        }
    }
}
