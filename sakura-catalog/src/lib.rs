pub mod cabin;
pub mod flight;
pub mod layout;
pub mod seat;

pub use cabin::{CabinClass, Fare, FareSchedule};
pub use flight::{Flight, FlightError, ManifestEntry};
pub use layout::{CabinLayout, CabinSection};
pub use seat::{Seat, SeatNumber, SeatNumberError};
