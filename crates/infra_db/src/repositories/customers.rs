//! Customer repository implementation
//!
//! This module provides database access for registered customers. The
//! `customers` table carries a unique index on `policy_reference`, so an
//! insert that loses a concurrent race fails with a unique-constraint
//! violation instead of silently duplicating; callers receive it as
//! [`DatabaseError::DuplicateEntry`].

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

use domain_registration::NewCustomer;

use crate::error::DatabaseError;

/// Database row representation of a registered customer
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub policy_reference: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// Repository for the durable customer collection
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Looks up the customer registered against a policy reference, if any.
    ///
    /// The unique index guarantees zero-or-one rows.
    pub async fn find_by_policy_reference(
        &self,
        reference: &str,
    ) -> Result<Option<CustomerRow>, DatabaseError> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                customer_id,
                first_name,
                last_name,
                policy_reference,
                date_of_birth,
                email,
                registered_at
            FROM customers
            WHERE policy_reference = $1
            "#,
        )
        .bind(reference)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::classify)
    }

    /// Inserts a new customer and returns the assigned identifier.
    ///
    /// A unique-constraint violation on `policy_reference` surfaces as
    /// [`DatabaseError::DuplicateEntry`].
    pub async fn insert(&self, customer: &NewCustomer) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO customers (
                first_name,
                last_name,
                policy_reference,
                date_of_birth,
                email,
                registered_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING customer_id
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.policy_reference)
        .bind(customer.date_of_birth)
        .bind(&customer.email)
        .bind(customer.registered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::classify)
    }

    /// One cheap round trip to verify the store is reachable
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::classify)?;
        Ok(())
    }
}
