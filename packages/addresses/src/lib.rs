// ABOUTME: Address domain package
// ABOUTME: Types, validation, and the SQLite-backed repository

pub mod db;
pub mod storage;
pub mod types;
pub mod validator;

pub use db::DbState;
pub use storage::AddressStorage;
pub use types::{Address, AddressCreateInput, AddressSearch, AddressUpdateInput};
pub use validator::{validate_address_create, validate_address_update, ValidationError};
