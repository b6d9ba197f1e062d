//! PostgreSQL adapter for the `CustomerStore` port
//!
//! Translates between the domain's store contract and the repository layer:
//! rows become `CustomerRecord`s, and database errors are folded into the
//! port's error taxonomy. A unique-constraint violation becomes
//! [`StoreError::DuplicatePolicyReference`] so the registry can report it as
//! the same rejection as its pre-check.

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::CustomerId;
use domain_registration::{CustomerRecord, CustomerStore, NewCustomer, StoreError};

use crate::error::DatabaseError;
use crate::repositories::customers::{CustomerRepository, CustomerRow};

/// [`CustomerStore`] implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    repository: CustomerRepository,
}

impl PostgresCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }
}

impl From<CustomerRow> for CustomerRecord {
    fn from(row: CustomerRow) -> Self {
        CustomerRecord {
            id: CustomerId::new(row.customer_id),
            first_name: row.first_name,
            last_name: row.last_name,
            policy_reference: row.policy_reference,
            date_of_birth: row.date_of_birth,
            email: row.email,
            registered_at: row.registered_at,
        }
    }
}

fn store_error(error: DatabaseError, reference: &str) -> StoreError {
    match error {
        DatabaseError::DuplicateEntry(_) => StoreError::DuplicatePolicyReference {
            reference: reference.to_string(),
        },
        err if err.is_connection_error() => StoreError::Unavailable(err.to_string()),
        err => StoreError::Query(err.to_string()),
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn find_by_policy_reference(
        &self,
        reference: &str,
    ) -> Result<Option<CustomerRecord>, StoreError> {
        let row = self
            .repository
            .find_by_policy_reference(reference)
            .await
            .map_err(|err| store_error(err, reference))?;
        Ok(row.map(CustomerRecord::from))
    }

    async fn insert(&self, customer: NewCustomer) -> Result<CustomerId, StoreError> {
        let customer_id = self
            .repository
            .insert(&customer)
            .await
            .map_err(|err| store_error(err, &customer.policy_reference))?;
        Ok(CustomerId::new(customer_id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.repository
            .ping()
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}
