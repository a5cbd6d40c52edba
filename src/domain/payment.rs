use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The price handed to a payment provider.
///
/// Wraps `rust_decimal::Decimal` so the scale written by the caller survives
/// formatting: `100.00` is displayed as `100.00`, not `100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arguments of a single `pay` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub product_name: String,
    pub price: Price,
}

impl PaymentRequest {
    pub fn new(product_name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            product_name: product_name.into(),
            price: price.into(),
        }
    }
}

/// Confirmation produced by a provider that accepted a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    /// Identity of the provider that handled the request.
    pub provider: String,
    /// Human-readable confirmation line.
    pub message: String,
}
