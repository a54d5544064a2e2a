use crate::cabin::FareSchedule;
use crate::layout::CabinLayout;
use crate::seat::{Seat, SeatNumber};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FlightError {
    #[error("Seat not found: {0}")]
    UnknownSeat(String),

    #[error("Seat already occupied: {0}")]
    SeatOccupied(String),
}

/// Entry in a flight's passenger manifest, appended on seat assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub passenger_id: Uuid,
    pub full_name: String,
    pub seat_number: SeatNumber,
}

/// One scheduled departure owning its whole seat inventory.
///
/// The seat map is generated once at construction and never resized; seats
/// live and die with the flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    id: Uuid,
    flight_number: String,
    flight_date: NaiveDate,
    destination: String,
    departure_time: NaiveTime,
    arrival_time: NaiveTime,
    gate: String,
    seats: Vec<Seat>,
    seat_index: HashMap<SeatNumber, usize>,
    manifest: Vec<ManifestEntry>,
}

impl Flight {
    /// Build a flight on the fleet's stock cabin with the stock fares.
    pub fn new(
        flight_number: impl Into<String>,
        flight_date: NaiveDate,
        destination: impl Into<String>,
        departure_time: NaiveTime,
        arrival_time: NaiveTime,
        gate: impl Into<String>,
    ) -> Self {
        Self::with_layout(
            flight_number,
            flight_date,
            destination,
            departure_time,
            arrival_time,
            gate,
            &CabinLayout::default(),
            &FareSchedule::default(),
        )
    }

    pub fn with_layout(
        flight_number: impl Into<String>,
        flight_date: NaiveDate,
        destination: impl Into<String>,
        departure_time: NaiveTime,
        arrival_time: NaiveTime,
        gate: impl Into<String>,
        layout: &CabinLayout,
        schedule: &FareSchedule,
    ) -> Self {
        let mut seats = Vec::with_capacity(layout.seat_count());
        let mut seat_index = HashMap::with_capacity(layout.seat_count());
        for number in layout.seat_numbers() {
            seat_index.insert(number, seats.len());
            seats.push(Seat::new(number, schedule));
        }
        Self {
            id: Uuid::new_v4(),
            flight_number: flight_number.into(),
            flight_date,
            destination: destination.into(),
            departure_time,
            arrival_time,
            gate: gate.into(),
            seats,
            seat_index,
            manifest: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn flight_date(&self) -> NaiveDate {
        self.flight_date
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure_time(&self) -> NaiveTime {
        self.departure_time
    }

    pub fn arrival_time(&self) -> NaiveTime {
        self.arrival_time
    }

    pub fn gate(&self) -> &str {
        &self.gate
    }

    /// All seats in seat-map order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, number: &SeatNumber) -> Option<&Seat> {
        self.seat_index.get(number).map(|&i| &self.seats[i])
    }

    /// Unoccupied seats, in seat-map order.
    pub fn available_seats(&self) -> Vec<&Seat> {
        self.seats.iter().filter(|s| !s.is_occupied()).collect()
    }

    pub fn manifest(&self) -> &[ManifestEntry] {
        &self.manifest
    }

    /// Atomic check-then-occupy. Fails without touching the seat or the
    /// manifest when the number is unknown or the seat is already taken.
    pub fn assign_seat(
        &mut self,
        number: &SeatNumber,
        entry: ManifestEntry,
    ) -> Result<(), FlightError> {
        let index = *self
            .seat_index
            .get(number)
            .ok_or_else(|| FlightError::UnknownSeat(number.to_string()))?;
        let seat = &mut self.seats[index];
        if seat.is_occupied() {
            return Err(FlightError::SeatOccupied(number.to_string()));
        }
        seat.occupy();
        self.manifest.push(entry);
        Ok(())
    }

    /// Free an assigned seat and drop its manifest entry.
    pub fn release_seat(&mut self, number: &SeatNumber) -> Result<(), FlightError> {
        let index = *self
            .seat_index
            .get(number)
            .ok_or_else(|| FlightError::UnknownSeat(number.to_string()))?;
        self.seats[index].release();
        self.manifest.retain(|entry| entry.seat_number != *number);
        Ok(())
    }
}
