// ABOUTME: Address repository over SQLite
// ABOUTME: CRUD operations plus the within-distance proximity query

use sqlx::{Row, SqlitePool};
use tracing::debug;

use addrbook_storage::{StorageError, StorageResult};

use crate::types::{Address, AddressCreateInput, AddressUpdateInput};

pub struct AddressStorage {
    pool: SqlitePool,
}

impl AddressStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new address and return it with its generated id.
    ///
    /// Constraint violations (duplicate postal code, range check) come
    /// back as `StorageError::Constraint`; dropping the transaction on
    /// any error path rolls the insert back.
    pub async fn create_address(&self, input: &AddressCreateInput) -> StorageResult<Address> {
        debug!("Creating address with postal code {}", input.postal_code);

        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let result = sqlx::query(
            r#"
            INSERT INTO addresses (street, city, state, postal_code, latitude, longitude)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.street)
        .bind(&input.city)
        .bind(&input.state)
        .bind(input.postal_code)
        .bind(input.latitude)
        .bind(input.longitude)
        .execute(&mut *tx)
        .await
        .map_err(StorageError::from)?;

        let id = result.last_insert_rowid();
        let row = sqlx::query("SELECT * FROM addresses WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        let address = row_to_address(&row)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(address)
    }

    /// Fetch an address by id. Absence is `Ok(None)`, not an error.
    pub async fn get_address(&self, id: i64) -> StorageResult<Option<Address>> {
        debug!("Fetching address: {}", id);

        let row = sqlx::query("SELECT * FROM addresses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        row.map(|r| row_to_address(&r)).transpose()
    }

    /// Apply a partial update to an address and return the merged
    /// record, or `Ok(None)` when no row matches `id`.
    pub async fn update_address(
        &self,
        id: i64,
        patch: &AddressUpdateInput,
    ) -> StorageResult<Option<Address>> {
        debug!("Updating address: {}", id);

        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let row = sqlx::query("SELECT * FROM addresses WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let mut address = row_to_address(&row)?;
        patch.apply_to(&mut address);

        sqlx::query(
            r#"
            UPDATE addresses
            SET street = ?, city = ?, state = ?, postal_code = ?, latitude = ?, longitude = ?
            WHERE id = ?
            "#,
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(address.postal_code)
        .bind(address.latitude)
        .bind(address.longitude)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(Some(address))
    }

    /// Delete an address by id. Returns whether a row was removed;
    /// not-found is a normal `false`, not an error.
    pub async fn delete_address(&self, id: i64) -> StorageResult<bool> {
        debug!("Deleting address: {}", id);

        let result = sqlx::query("DELETE FROM addresses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    /// All addresses whose squared planar distance from the center is
    /// within `distance` squared, in insertion order.
    ///
    /// This is a flat Euclidean approximation on raw coordinates, not
    /// a geodesic calculation; it only makes sense for small regions.
    /// The boundary is inclusive.
    pub async fn addresses_within_distance(
        &self,
        latitude: f64,
        longitude: f64,
        distance: f64,
    ) -> StorageResult<Vec<Address>> {
        debug!(
            "Searching addresses within {} of ({}, {})",
            distance, latitude, longitude
        );

        let rows = sqlx::query(
            r#"
            SELECT * FROM addresses
            WHERE (latitude - ?1) * (latitude - ?1)
                + (longitude - ?2) * (longitude - ?2) <= ?3 * ?3
            ORDER BY id
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(distance)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::from)?;

        rows.iter().map(row_to_address).collect()
    }
}

fn row_to_address(row: &sqlx::sqlite::SqliteRow) -> StorageResult<Address> {
    Ok(Address {
        id: row.try_get("id")?,
        street: row.try_get("street")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        postal_code: row.try_get("postal_code")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
    })
}
