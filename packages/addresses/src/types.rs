// ABOUTME: Address entity and input types
// ABOUTME: Wire format matches the HTTP API (snake_case JSON)

use serde::{Deserialize, Serialize};

/// A stored address record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Input for creating an address. All fields required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCreateInput {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Partial update for an address. Fields left out of the request stay
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressUpdateInput {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AddressUpdateInput {
    /// Merge the patch into an existing record, field by field.
    pub fn apply_to(&self, address: &mut Address) {
        if let Some(street) = &self.street {
            address.street = street.clone();
        }
        if let Some(city) = &self.city {
            address.city = city.clone();
        }
        if let Some(state) = &self.state {
            address.state = state.clone();
        }
        if let Some(postal_code) = self.postal_code {
            address.postal_code = postal_code;
        }
        if let Some(latitude) = self.latitude {
            address.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            address.longitude = longitude;
        }
    }
}

/// Center point and radius for the proximity search. The radius is in
/// coordinate units, not meters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddressSearch {
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}
