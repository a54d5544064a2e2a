use sakura_core::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity record for one traveler.
///
/// Passport numbers are not checked for uniqueness across passengers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Uuid,
    pub passport_number: Masked<String>,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Passenger {
    pub fn new(
        passport_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            passport_number: Masked::new(passport_number.into()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: None,
            phone: None,
        }
    }

    pub fn with_contact(mut self, email: Option<String>, phone: Option<String>) -> Self {
        self.email = email;
        self.phone = phone;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
