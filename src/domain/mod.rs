//! Domain layer: the payment capability contract, registration entries and
//! the ports the registry is built on.

pub mod payment;
pub mod ports;
pub mod registration;
pub mod selection;
