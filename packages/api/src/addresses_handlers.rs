// ABOUTME: HTTP request handlers for address operations
// ABOUTME: Validate input, delegate to the repository, map the result

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use addrbook_addresses::{
    validate_address_create, validate_address_update, Address, AddressCreateInput, AddressSearch,
    AddressUpdateInput, DbState,
};

use super::response::{ApiError, MessageResponse};

/// Create a new address
pub async fn create_address(
    State(db): State<DbState>,
    Json(input): Json<AddressCreateInput>,
) -> Result<Json<Address>, ApiError> {
    info!("Creating address with postal code {}", input.postal_code);

    let errors = validate_address_create(&input);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let address = db.address_storage.create_address(&input).await?;
    Ok(Json(address))
}

/// Get a single address by id
pub async fn get_address(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> Result<Json<Address>, ApiError> {
    info!("Getting address: {}", id);

    match db.address_storage.get_address(id).await? {
        Some(address) => Ok(Json(address)),
        None => Err(ApiError::address_not_found()),
    }
}

/// Apply a partial update to an address
pub async fn update_address(
    State(db): State<DbState>,
    Path(id): Path<i64>,
    Json(patch): Json<AddressUpdateInput>,
) -> Result<Json<Address>, ApiError> {
    info!("Updating address: {}", id);

    let errors = validate_address_update(&patch);
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    match db.address_storage.update_address(id, &patch).await? {
        Some(address) => Ok(Json(address)),
        None => Err(ApiError::address_not_found()),
    }
}

/// Delete an address by id
pub async fn delete_address(
    State(db): State<DbState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Deleting address: {}", id);

    if db.address_storage.delete_address(id).await? {
        Ok(Json(MessageResponse {
            message: "Address deleted successfully".to_string(),
        }))
    } else {
        Err(ApiError::address_not_found())
    }
}

/// List addresses within a flat-plane distance of a center point
pub async fn addresses_within_distance(
    State(db): State<DbState>,
    Json(search): Json<AddressSearch>,
) -> Result<Json<Vec<Address>>, ApiError> {
    info!(
        "Searching addresses within {} of ({}, {})",
        search.distance, search.latitude, search.longitude
    );

    let addresses = db
        .address_storage
        .addresses_within_distance(search.latitude, search.longitude, search.distance)
        .await?;
    Ok(Json(addresses))
}
