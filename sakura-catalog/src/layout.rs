use crate::seat::SeatNumber;
use serde::{Deserialize, Serialize};

/// A contiguous block of rows sharing one column arrangement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinSection {
    pub first_row: u32,
    pub last_row: u32,
    pub columns: Vec<char>,
}

impl CabinSection {
    pub fn new(first_row: u32, last_row: u32, columns: &[char]) -> Self {
        Self {
            first_row,
            last_row,
            columns: columns.to_vec(),
        }
    }
}

/// Seating arrangement a flight generates its seat map from.
///
/// Every aircraft in the fleet currently flies the same single layout, so
/// `Default` is the one configuration in use: a 166-seat cabin with four
/// abreast up front and six abreast in Economy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinLayout {
    pub sections: Vec<CabinSection>,
}

impl Default for CabinLayout {
    fn default() -> Self {
        Self {
            sections: vec![
                CabinSection::new(1, 2, &['A', 'B', 'E', 'F']),
                CabinSection::new(3, 7, &['A', 'B', 'E', 'F']),
                CabinSection::new(8, 30, &['A', 'B', 'C', 'D', 'E', 'F']),
            ],
        }
    }
}

impl CabinLayout {
    /// Seat numbers in generation order: section by section, row by row,
    /// column by column. This order is also the seat map's iteration order.
    pub fn seat_numbers(&self) -> Vec<SeatNumber> {
        let mut numbers = Vec::with_capacity(self.seat_count());
        for section in &self.sections {
            for row in section.first_row..=section.last_row {
                for &column in &section.columns {
                    // Section data with row 0 or a non-letter column cannot
                    // form a seat number and is dropped here.
                    if let Ok(number) = SeatNumber::new(row, column) {
                        numbers.push(number);
                    }
                }
            }
        }
        numbers
    }

    pub fn seat_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| (s.last_row - s.first_row + 1) as usize * s.columns.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cabin::CabinClass;

    #[test]
    fn test_default_layout_has_166_seats() {
        let layout = CabinLayout::default();
        assert_eq!(layout.seat_count(), 166);
        assert_eq!(layout.seat_numbers().len(), 166);
    }

    #[test]
    fn test_default_layout_class_split() {
        let layout = CabinLayout::default();
        let numbers = layout.seat_numbers();
        let first = numbers
            .iter()
            .filter(|n| n.cabin_class() == CabinClass::First)
            .count();
        let business = numbers
            .iter()
            .filter(|n| n.cabin_class() == CabinClass::Business)
            .count();
        let economy = numbers
            .iter()
            .filter(|n| n.cabin_class() == CabinClass::Economy)
            .count();
        assert_eq!(first, 8);
        assert_eq!(business, 20);
        assert_eq!(economy, 138);
    }

    #[test]
    fn test_generation_order_starts_at_the_nose() {
        let layout = CabinLayout::default();
        let numbers = layout.seat_numbers();
        assert_eq!(numbers[0].to_string(), "1A");
        assert_eq!(numbers[1].to_string(), "1B");
        assert_eq!(numbers[4].to_string(), "2A");
        assert_eq!(numbers.last().map(|n| n.to_string()), Some("30F".to_string()));
    }
}
