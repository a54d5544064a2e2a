use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment methods accepted at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Momo,
    VnPay,
    ZaloPay,
    BankTransfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Momo => "Momo",
            PaymentMethod::VnPay => "VNPay",
            PaymentMethod::ZaloPay => "ZaloPay",
            PaymentMethod::BankTransfer => "Banking Transfer",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Payment declined: {0}")]
    Declined(String),

    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Charge/refund capability the reservation side depends on.
///
/// Implementations must not mutate domain state; they only decide whether a
/// monetary movement is accepted.
pub trait PaymentGateway: Send + Sync {
    /// Authorize and capture a charge.
    fn charge(&self, amount_vnd: i64, method: PaymentMethod) -> Result<(), GatewayError>;

    /// Return a previously captured amount to the payer.
    fn refund(&self, amount_vnd: i64, method: PaymentMethod) -> Result<(), GatewayError>;
}

/// Default adapter: accepts every charge and every refund.
pub struct ApproveAllGateway;

impl PaymentGateway for ApproveAllGateway {
    fn charge(&self, amount_vnd: i64, method: PaymentMethod) -> Result<(), GatewayError> {
        tracing::info!("Charging {} {} via {}", amount_vnd, crate::CURRENCY, method);
        Ok(())
    }

    fn refund(&self, amount_vnd: i64, method: PaymentMethod) -> Result<(), GatewayError> {
        tracing::info!("Refunding {} {} via {}", amount_vnd, crate::CURRENCY, method);
        Ok(())
    }
}

/// Failure-injection adapter: declines every movement with a fixed reason.
pub struct RejectingGateway {
    pub reason: String,
}

impl RejectingGateway {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PaymentGateway for RejectingGateway {
    fn charge(&self, _amount_vnd: i64, _method: PaymentMethod) -> Result<(), GatewayError> {
        Err(GatewayError::Declined(self.reason.clone()))
    }

    fn refund(&self, _amount_vnd: i64, _method: PaymentMethod) -> Result<(), GatewayError> {
        Err(GatewayError::Declined(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_all_accepts_charge_and_refund() {
        let gateway = ApproveAllGateway;
        assert!(gateway.charge(1_000_000, PaymentMethod::CreditCard).is_ok());
        assert!(gateway.refund(1_000_000, PaymentMethod::CreditCard).is_ok());
    }

    #[test]
    fn test_rejecting_gateway_declines() {
        let gateway = RejectingGateway::new("insufficient funds");
        let err = gateway
            .charge(5_000_000, PaymentMethod::Momo)
            .expect_err("charge should be declined");
        assert_eq!(err, GatewayError::Declined("insufficient funds".to_string()));
    }

    #[test]
    fn test_payment_method_serde_names() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).expect("serialize");
        assert_eq!(json, "\"BANK_TRANSFER\"");
        let method: PaymentMethod = serde_json::from_str("\"CREDIT_CARD\"").expect("deserialize");
        assert_eq!(method, PaymentMethod::CreditCard);
    }
}
