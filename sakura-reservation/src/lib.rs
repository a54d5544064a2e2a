pub mod passenger;
pub mod payment;
pub mod registry;
pub mod reservation;

pub use passenger::Passenger;
pub use payment::{Payment, PaymentError, PaymentStatus};
pub use registry::{RegistryError, ReservationRegistry};
pub use reservation::{Reservation, ReservationError, ReservationStatus};
