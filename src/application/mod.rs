//! Application layer: provider discovery and the payment consumer.
//!
//! `ProviderRegistry` turns a registration source plus a catalog of factories
//! into a lazy sequence of providers. `Checkout` picks one according to a
//! `SelectionPolicy` and invokes it.

pub mod checkout;
pub mod registry;
