use crate::passenger::Passenger;
use crate::payment::{Payment, PaymentError};
use chrono::{DateTime, Utc};
use sakura_catalog::{Flight, FlightError, ManifestEntry, SeatNumber};
use sakura_core::{PaymentGateway, PaymentMethod};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation lifecycle: Pending -> Confirmed -> Cancelled, no way back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Invalid reservation transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Flight {given} is not the reservation's flight {expected}")]
    WrongFlight { expected: String, given: String },

    #[error(transparent)]
    Seat(#[from] FlightError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// Binds one passenger to one seat on one flight, and owns the payment made
/// for it.
///
/// A reservation is Confirmed only while it holds a Completed payment and
/// its seat is occupied; cancelling releases the seat and refunds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    id: Uuid,
    passenger: Passenger,
    flight_id: Uuid,
    flight_number: String,
    seat_number: SeatNumber,
    status: ReservationStatus,
    payment: Option<Payment>,
    created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(passenger: Passenger, flight: &Flight, seat_number: SeatNumber) -> Self {
        Self {
            id: Uuid::new_v4(),
            passenger,
            flight_id: flight.id(),
            flight_number: flight.flight_number().to_string(),
            seat_number,
            status: ReservationStatus::Pending,
            payment: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    pub fn flight_id(&self) -> Uuid {
        self.flight_id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn seat_number(&self) -> SeatNumber {
        self.seat_number
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Pending -> Confirmed: price the seat, take payment, occupy the seat.
    ///
    /// The seat is checked before any money moves, so a declined charge or a
    /// taken seat leaves reservation, flight and passenger untouched.
    pub fn confirm(
        &mut self,
        flight: &mut Flight,
        gateway: &dyn PaymentGateway,
        method: PaymentMethod,
    ) -> Result<(), ReservationError> {
        if self.status != ReservationStatus::Pending {
            return Err(ReservationError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: "CONFIRMED".to_string(),
            });
        }
        if flight.id() != self.flight_id {
            return Err(ReservationError::WrongFlight {
                expected: self.flight_number.clone(),
                given: flight.flight_number().to_string(),
            });
        }

        let seat = flight
            .seat(&self.seat_number)
            .ok_or_else(|| FlightError::UnknownSeat(self.seat_number.to_string()))?;
        if seat.is_occupied() {
            return Err(FlightError::SeatOccupied(self.seat_number.to_string()).into());
        }

        let mut payment = Payment::new(seat.price_vnd(), method);
        payment.process(gateway)?;

        // The seat was verified free under this same borrow, so assignment
        // cannot fail between the charge and here.
        flight.assign_seat(
            &self.seat_number,
            ManifestEntry {
                passenger_id: self.passenger.id,
                full_name: self.passenger.full_name(),
                seat_number: self.seat_number,
            },
        )?;
        self.payment = Some(payment);
        self.status = ReservationStatus::Confirmed;
        Ok(())
    }

    /// Confirmed -> Cancelled: release the seat and refund the payment.
    ///
    /// A refund that the gateway refuses is logged and swallowed; the
    /// cancellation itself still goes through.
    pub fn cancel(
        &mut self,
        flight: &mut Flight,
        gateway: &dyn PaymentGateway,
    ) -> Result<(), ReservationError> {
        if self.status != ReservationStatus::Confirmed {
            return Err(ReservationError::InvalidTransition {
                from: format!("{:?}", self.status),
                to: "CANCELLED".to_string(),
            });
        }
        if flight.id() != self.flight_id {
            return Err(ReservationError::WrongFlight {
                expected: self.flight_number.clone(),
                given: flight.flight_number().to_string(),
            });
        }

        flight.release_seat(&self.seat_number)?;
        if let Some(payment) = &mut self.payment {
            if let Err(err) = payment.refund(gateway) {
                tracing::warn!(
                    "Refund for reservation {} failed, cancelling anyway: {}",
                    self.id,
                    err
                );
            }
        }
        self.status = ReservationStatus::Cancelled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentStatus;
    use chrono::{NaiveDate, NaiveTime};
    use sakura_core::{ApproveAllGateway, RejectingGateway};

    fn flight() -> Flight {
        Flight::new(
            "SA100",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Tokyo",
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(14, 45, 0).unwrap(),
            "G12",
        )
    }

    fn passenger() -> Passenger {
        Passenger::new("C1234567", "Hanako", "Yamada", 34)
    }

    fn seat(raw: &str) -> SeatNumber {
        raw.parse().unwrap()
    }

    #[test]
    fn test_confirm_charges_seat_price_and_occupies() {
        let gateway = ApproveAllGateway;
        let mut flight = flight();
        let mut reservation = Reservation::new(passenger(), &flight, seat("1A"));

        reservation
            .confirm(&mut flight, &gateway, PaymentMethod::CreditCard)
            .unwrap();

        assert_eq!(reservation.status(), ReservationStatus::Confirmed);
        let payment = reservation.payment().expect("payment stored");
        assert_eq!(payment.amount_vnd, 10_000_000);
        assert_eq!(payment.status(), PaymentStatus::Completed);
        assert!(flight.seat(&seat("1A")).unwrap().is_occupied());
        assert_eq!(flight.manifest().len(), 1);
    }

    #[test]
    fn test_confirm_taken_seat_fails_before_payment() {
        let gateway = ApproveAllGateway;
        let mut flight = flight();
        let mut first = Reservation::new(passenger(), &flight, seat("8A"));
        first
            .confirm(&mut flight, &gateway, PaymentMethod::CreditCard)
            .unwrap();

        let mut second = Reservation::new(passenger(), &flight, seat("8A"));
        let err = second
            .confirm(&mut flight, &gateway, PaymentMethod::Momo)
            .unwrap_err();

        assert_eq!(
            err,
            ReservationError::Seat(FlightError::SeatOccupied("8A".to_string()))
        );
        assert_eq!(second.status(), ReservationStatus::Pending);
        assert!(second.payment().is_none());
        assert_eq!(flight.manifest().len(), 1);
    }

    #[test]
    fn test_declined_charge_keeps_everything_untouched() {
        let mut flight = flight();
        let mut reservation = Reservation::new(passenger(), &flight, seat("2B"));
        let err = reservation
            .confirm(
                &mut flight,
                &RejectingGateway::new("no funds"),
                PaymentMethod::BankTransfer,
            )
            .unwrap_err();

        assert!(matches!(err, ReservationError::Payment(_)));
        assert_eq!(reservation.status(), ReservationStatus::Pending);
        assert!(reservation.payment().is_none());
        assert!(!flight.seat(&seat("2B")).unwrap().is_occupied());
    }

    #[test]
    fn test_cancel_reverses_confirmation() {
        let gateway = ApproveAllGateway;
        let mut flight = flight();
        let mut reservation = Reservation::new(passenger(), &flight, seat("1A"));
        reservation
            .confirm(&mut flight, &gateway, PaymentMethod::CreditCard)
            .unwrap();

        reservation.cancel(&mut flight, &gateway).unwrap();

        assert_eq!(reservation.status(), ReservationStatus::Cancelled);
        assert!(!flight.seat(&seat("1A")).unwrap().is_occupied());
        assert_eq!(
            reservation.payment().unwrap().status(),
            PaymentStatus::Refunded
        );
    }

    #[test]
    fn test_cancel_requires_confirmed_status() {
        let gateway = ApproveAllGateway;
        let mut flight = flight();

        let mut pending = Reservation::new(passenger(), &flight, seat("1A"));
        assert!(pending.cancel(&mut flight, &gateway).is_err());
        assert_eq!(pending.status(), ReservationStatus::Pending);

        let mut done = Reservation::new(passenger(), &flight, seat("1B"));
        done.confirm(&mut flight, &gateway, PaymentMethod::CreditCard)
            .unwrap();
        done.cancel(&mut flight, &gateway).unwrap();
        // Cancelled is terminal.
        assert!(done.cancel(&mut flight, &gateway).is_err());
        assert_eq!(done.status(), ReservationStatus::Cancelled);
    }

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Confirmed).unwrap(),
            "\"CONFIRMED\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Refunded).unwrap(),
            "\"REFUNDED\""
        );
    }

    #[test]
    fn test_confirm_checks_flight_identity() {
        let gateway = ApproveAllGateway;
        let booked = flight();
        let mut other = Flight::new(
            "SA200",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "Osaka",
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            "G1",
        );
        let mut reservation = Reservation::new(passenger(), &booked, seat("1A"));

        let err = reservation
            .confirm(&mut other, &gateway, PaymentMethod::CreditCard)
            .unwrap_err();
        assert!(matches!(err, ReservationError::WrongFlight { .. }));
        assert!(!other.seat(&seat("1A")).unwrap().is_occupied());
    }
}
