// ABOUTME: HTTP API layer for Addrbook providing REST endpoints and routing
// ABOUTME: Thin adapter between axum and the address repository

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use addrbook_addresses::DbState;

pub mod addresses_handlers;
pub mod response;

/// Creates the addresses API router
pub fn create_addresses_router() -> Router<DbState> {
    Router::new()
        .route("/addresses/", post(addresses_handlers::create_address))
        .route(
            "/addresses/within_distance/",
            post(addresses_handlers::addresses_within_distance),
        )
        .route("/addresses/{id}", get(addresses_handlers::get_address))
        .route("/addresses/{id}", put(addresses_handlers::update_address))
        .route(
            "/addresses/{id}",
            delete(addresses_handlers::delete_address),
        )
}
