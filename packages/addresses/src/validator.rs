// ABOUTME: Input validation for address create and update payloads
// ABOUTME: Range and shape checks run before the repository is invoked

use std::fmt;

use crate::types::{AddressCreateInput, AddressUpdateInput};

pub const POSTAL_CODE_MIN: i64 = 100_000;
pub const POSTAL_CODE_MAX: i64 = 999_999;
pub const STATE_MAX_LEN: usize = 20;

/// Validation errors for address data
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn check_street(street: &str, errors: &mut Vec<ValidationError>) {
    if street.trim().is_empty() {
        errors.push(ValidationError::new("street", "Street is required"));
    }
}

fn check_city(city: &str, errors: &mut Vec<ValidationError>) {
    if city.trim().is_empty() {
        errors.push(ValidationError::new("city", "City is required"));
    }
}

fn check_state(state: &str, errors: &mut Vec<ValidationError>) {
    if state.trim().is_empty() {
        errors.push(ValidationError::new("state", "State is required"));
    } else if state.chars().count() > STATE_MAX_LEN {
        errors.push(ValidationError::new(
            "state",
            format!("State must be at most {} characters", STATE_MAX_LEN),
        ));
    }
}

fn check_postal_code(postal_code: i64, errors: &mut Vec<ValidationError>) {
    if !(POSTAL_CODE_MIN..=POSTAL_CODE_MAX).contains(&postal_code) {
        errors.push(ValidationError::new(
            "postal_code",
            format!(
                "Postal code must be between {} and {}",
                POSTAL_CODE_MIN, POSTAL_CODE_MAX
            ),
        ));
    }
}

/// Validates address data for creation
pub fn validate_address_create(data: &AddressCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_street(&data.street, &mut errors);
    check_city(&data.city, &mut errors);
    check_state(&data.state, &mut errors);
    check_postal_code(data.postal_code, &mut errors);

    errors
}

/// Validates a partial update; only present fields are checked
pub fn validate_address_update(data: &AddressUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(street) = &data.street {
        check_street(street, &mut errors);
    }
    if let Some(city) = &data.city {
        check_city(city, &mut errors);
    }
    if let Some(state) = &data.state {
        check_state(state, &mut errors);
    }
    if let Some(postal_code) = data.postal_code {
        check_postal_code(postal_code, &mut errors);
    }

    errors
}
