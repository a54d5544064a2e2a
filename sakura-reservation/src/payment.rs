use chrono::{DateTime, Utc};
use sakura_core::{GatewayError, PaymentGateway, PaymentMethod};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment lifecycle. The only backward-looking edge is Completed -> Refunded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Invalid payment transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// One monetary transaction. Amount and method are fixed at construction;
/// only the status moves, through [`Payment::process`] and
/// [`Payment::refund`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub amount_vnd: i64,
    pub currency: String,
    pub method: PaymentMethod,
    status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(amount_vnd: i64, method: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount_vnd,
            currency: sakura_core::CURRENCY.to_string(),
            method,
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Pending -> Completed, charging through the gateway. A declined charge
    /// leaves the payment Pending.
    pub fn process(&mut self, gateway: &dyn PaymentGateway) -> Result<(), PaymentError> {
        if self.status != PaymentStatus::Pending {
            return Err(PaymentError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: "COMPLETED".to_string(),
            });
        }
        gateway.charge(self.amount_vnd, self.method)?;
        self.status = PaymentStatus::Completed;
        Ok(())
    }

    /// Completed -> Refunded. Refunding a Pending or already-Refunded
    /// payment fails without mutation.
    pub fn refund(&mut self, gateway: &dyn PaymentGateway) -> Result<(), PaymentError> {
        if self.status != PaymentStatus::Completed {
            return Err(PaymentError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: "REFUNDED".to_string(),
            });
        }
        gateway.refund(self.amount_vnd, self.method)?;
        self.status = PaymentStatus::Refunded;
        Ok(())
    }
}
