pub mod payment;
pub mod pii;

pub use payment::{ApproveAllGateway, GatewayError, PaymentGateway, PaymentMethod, RejectingGateway};
pub use pii::Masked;

/// Currency every amount in the system is denominated in, as integer units.
pub const CURRENCY: &str = "VND";
