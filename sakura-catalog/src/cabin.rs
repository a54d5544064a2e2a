use serde::{Deserialize, Serialize};

/// Cabin classes offered on every aircraft in the fleet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    First,
    Business,
    Economy,
}

impl CabinClass {
    /// Class a row belongs to. Rows 1-2 are First, 3-7 Business, everything
    /// further back Economy.
    pub fn for_row(row: u32) -> Self {
        if row <= 2 {
            CabinClass::First
        } else if row <= 7 {
            CabinClass::Business
        } else {
            CabinClass::Economy
        }
    }
}

/// Price and amenity bundle for one cabin class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fare {
    pub price_vnd: i64,
    pub amenities: Vec<String>,
}

impl Fare {
    fn new(price_vnd: i64, amenities: &[&str]) -> Self {
        Self {
            price_vnd,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Class -> fare lookup used when a flight builds its seat map.
///
/// The three classes differ only in this constant data, so seats carry a
/// [`CabinClass`] tag and read their fare from here instead of forming a
/// type hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareSchedule {
    pub currency: String,
    pub first: Fare,
    pub business: Fare,
    pub economy: Fare,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            currency: sakura_core::CURRENCY.to_string(),
            first: Fare::new(
                10_000_000,
                &["15kg Luggage", "Premium Meals", "Private Line", "Private Restroom"],
            ),
            business: Fare::new(
                5_000_000,
                &["10kg Luggage", "Business Meals", "Priority Boarding"],
            ),
            economy: Fare::new(1_000_000, &["2kg Luggage", "Standard Seat", "Basic Meal"]),
        }
    }
}

impl FareSchedule {
    pub fn fare(&self, class: CabinClass) -> &Fare {
        match class {
            CabinClass::First => &self.first,
            CabinClass::Business => &self.business,
            CabinClass::Economy => &self.economy,
        }
    }

    pub fn price_vnd(&self, class: CabinClass) -> i64 {
        self.fare(class).price_vnd
    }
}
