use crate::cabin::{CabinClass, FareSchedule};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A seat identifier: numeric row followed by a single column letter, "12C".
///
/// Serializes as its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatNumber {
    row: u32,
    column: char,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SeatNumberError {
    #[error("Seat number {0:?} is too short")]
    TooShort(String),

    #[error("Seat number {0:?} has a non-numeric row prefix")]
    InvalidRow(String),

    #[error("Seat number {0:?} does not end in a column letter A-Z")]
    InvalidColumn(String),
}

impl SeatNumber {
    /// Parse fails fast: a malformed identifier is a programming or data
    /// error, not user input to be reported softly.
    pub fn parse(raw: &str) -> Result<Self, SeatNumberError> {
        let raw = raw.trim();
        let mut chars = raw.chars();
        let column = chars
            .next_back()
            .ok_or_else(|| SeatNumberError::TooShort(raw.to_string()))?;
        let row_part = chars.as_str();
        if row_part.is_empty() {
            return Err(SeatNumberError::TooShort(raw.to_string()));
        }
        if !column.is_ascii_uppercase() {
            return Err(SeatNumberError::InvalidColumn(raw.to_string()));
        }
        let row: u32 = row_part
            .parse()
            .map_err(|_| SeatNumberError::InvalidRow(raw.to_string()))?;
        if row == 0 {
            return Err(SeatNumberError::InvalidRow(raw.to_string()));
        }
        Ok(Self { row, column })
    }

    pub fn new(row: u32, column: char) -> Result<Self, SeatNumberError> {
        Self::parse(&format!("{}{}", row, column))
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> char {
        self.column
    }

    /// Cabin class is derived from the row alone.
    pub fn cabin_class(&self) -> CabinClass {
        CabinClass::for_row(self.row)
    }
}

impl FromStr for SeatNumber {
    type Err = SeatNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

impl Serialize for SeatNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One bookable unit. Class, price and amenities are fixed at construction;
/// only the occupancy flag ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    number: SeatNumber,
    cabin_class: CabinClass,
    price_vnd: i64,
    amenities: Vec<String>,
    is_occupied: bool,
}

impl Seat {
    pub fn new(number: SeatNumber, schedule: &FareSchedule) -> Self {
        let cabin_class = number.cabin_class();
        let fare = schedule.fare(cabin_class);
        Self {
            number,
            cabin_class,
            price_vnd: fare.price_vnd,
            amenities: fare.amenities.clone(),
            is_occupied: false,
        }
    }

    pub fn number(&self) -> SeatNumber {
        self.number
    }

    pub fn cabin_class(&self) -> CabinClass {
        self.cabin_class
    }

    pub fn price_vnd(&self) -> i64 {
        self.price_vnd
    }

    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn is_occupied(&self) -> bool {
        self.is_occupied
    }

    /// Idempotent: occupying an occupied seat is a no-op.
    pub fn occupy(&mut self) {
        self.is_occupied = true;
    }

    /// Idempotent: releasing a free seat is a no-op.
    pub fn release(&mut self) {
        self.is_occupied = false;
    }
}
