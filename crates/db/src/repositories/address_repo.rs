//! Repository for the `addresses` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::address::{Address, CreateAddress, UpdateAddress};

pub(crate) const COLUMNS: &str =
    "id, student_id, street, number, city, state, created_at, updated_at";

/// Provides CRUD operations for student addresses.
pub struct AddressRepo;

impl AddressRepo {
    /// Insert a new address. Fails with a foreign-key violation if the
    /// student does not exist.
    pub async fn create(pool: &PgPool, input: &CreateAddress) -> Result<Address, sqlx::Error> {
        let query = format!(
            "INSERT INTO addresses (student_id, street, number, city, state) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Address>(&query)
            .bind(input.student_id)
            .bind(&input.street)
            .bind(input.number)
            .bind(&input.city)
            .bind(&input.state)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Address>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM addresses WHERE id = $1");
        sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Address>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM addresses ORDER BY id");
        sqlx::query_as::<_, Address>(&query).fetch_all(pool).await
    }

    /// List the addresses of one student. Empty when the student has none
    /// or does not exist.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Address>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM addresses WHERE student_id = $1 ORDER BY id");
        sqlx::query_as::<_, Address>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAddress,
    ) -> Result<Option<Address>, sqlx::Error> {
        let query = format!(
            "UPDATE addresses SET \
                street = COALESCE($2, street), \
                number = COALESCE($3, number), \
                city = COALESCE($4, city), \
                state = COALESCE($5, state), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .bind(&input.street)
            .bind(input.number)
            .bind(&input.city)
            .bind(&input.state)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Address>, sqlx::Error> {
        let query = format!("DELETE FROM addresses WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
