use crate::passenger::Passenger;
use crate::reservation::{Reservation, ReservationError};
use chrono::NaiveDate;
use sakura_catalog::{Flight, SeatNumber};
use sakura_core::{ApproveAllGateway, PaymentGateway, PaymentMethod};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Flight number already exists: {0}")]
    DuplicateFlight(String),

    #[error("Flight not found: {0}")]
    UnknownFlight(String),

    #[error("Reservation not found: {0}")]
    UnknownReservation(Uuid),

    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// Aggregate root owning every flight and reservation in the system.
///
/// Flights and reservations are kept in insertion order; flight numbers are
/// unique across the collection. All mutation goes through `&mut self`, so
/// each operation is atomic; concurrent callers put the whole registry
/// behind one lock (`Arc<Mutex<ReservationRegistry>>`).
pub struct ReservationRegistry {
    flights: Vec<Flight>,
    reservations: Vec<Reservation>,
    gateway: Arc<dyn PaymentGateway>,
}

impl ReservationRegistry {
    pub fn new() -> Self {
        Self::with_gateway(Arc::new(ApproveAllGateway))
    }

    /// Swap in a different gateway adapter, e.g. one that declines charges.
    pub fn with_gateway(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            flights: Vec::new(),
            reservations: Vec::new(),
            gateway,
        }
    }

    /// Register a flight. Rejects a duplicate flight number and leaves the
    /// existing flight untouched.
    pub fn add_flight(&mut self, flight: Flight) -> Result<(), RegistryError> {
        if self
            .flights
            .iter()
            .any(|f| f.flight_number() == flight.flight_number())
        {
            return Err(RegistryError::DuplicateFlight(
                flight.flight_number().to_string(),
            ));
        }
        tracing::info!(
            "Flight {} to {} added on {}",
            flight.flight_number(),
            flight.destination(),
            flight.flight_date()
        );
        self.flights.push(flight);
        Ok(())
    }

    /// Filter flights by destination (case-insensitive) and/or exact date.
    /// Both filters AND together; no filters returns every flight. Insertion
    /// order is preserved.
    pub fn find_flights(
        &self,
        destination: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|flight| {
                let destination_matches = destination
                    .map(|d| flight.destination().eq_ignore_ascii_case(d))
                    .unwrap_or(true);
                let date_matches = date.map(|d| flight.flight_date() == d).unwrap_or(true);
                destination_matches && date_matches
            })
            .collect()
    }

    pub fn flight(&self, flight_number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|f| f.flight_number() == flight_number)
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Book a seat: construct a reservation and confirm it in one step.
    ///
    /// On any failure (unknown flight, unknown or occupied seat, declined
    /// charge) the registry records nothing and the half-built reservation
    /// is discarded.
    pub fn create_reservation(
        &mut self,
        passenger: Passenger,
        flight_number: &str,
        seat_number: SeatNumber,
        method: PaymentMethod,
    ) -> Result<&Reservation, RegistryError> {
        let gateway = Arc::clone(&self.gateway);
        let flight = self
            .flights
            .iter_mut()
            .find(|f| f.flight_number() == flight_number)
            .ok_or_else(|| RegistryError::UnknownFlight(flight_number.to_string()))?;

        let mut reservation = Reservation::new(passenger, flight, seat_number);
        reservation.confirm(flight, gateway.as_ref(), method)?;

        tracing::info!(
            "Reservation {} confirmed: flight {}, seat {}",
            reservation.id(),
            flight_number,
            seat_number
        );
        self.reservations.push(reservation);
        let index = self.reservations.len() - 1;
        Ok(&self.reservations[index])
    }

    /// Cancel a confirmed reservation: frees its seat and refunds its
    /// payment.
    pub fn cancel_reservation(&mut self, reservation_id: Uuid) -> Result<(), RegistryError> {
        let gateway = Arc::clone(&self.gateway);
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id() == reservation_id)
            .ok_or(RegistryError::UnknownReservation(reservation_id))?;
        let flight = self
            .flights
            .iter_mut()
            .find(|f| f.id() == reservation.flight_id())
            .ok_or_else(|| RegistryError::UnknownFlight(reservation.flight_number().to_string()))?;

        reservation.cancel(flight, gateway.as_ref())?;
        tracing::info!("Reservation {} cancelled", reservation_id);
        Ok(())
    }

    pub fn reservation(&self, reservation_id: Uuid) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == reservation_id)
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
}

impl Default for ReservationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
