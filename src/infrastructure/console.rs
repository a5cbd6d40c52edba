use crate::domain::payment::{PaymentReceipt, PaymentRequest};
use crate::domain::ports::PaymentService;
use crate::error::Result;
use tracing::info;

/// Payment provider that accepts every request and confirms it with a message.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePaymentService;

impl ConsolePaymentService {
    /// Identity under which this provider is registered.
    pub const IDENTITY: &'static str = "paylink.console";

    pub fn new() -> Self {
        Self
    }
}

impl PaymentService for ConsolePaymentService {
    fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt> {
        let message = format!(
            "支付模块:购买产品 {},价格{}",
            request.product_name, request.price
        );
        info!(provider = Self::IDENTITY, receipt = %message, "payment confirmed");
        Ok(PaymentReceipt {
            provider: Self::IDENTITY.to_string(),
            message,
        })
    }
}
