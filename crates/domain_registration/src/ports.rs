//! Registration domain ports
//!
//! The [`CustomerStore`] trait defines everything the registration workflow
//! needs from its data source, enabling swappable implementations: the
//! PostgreSQL adapter in `infra_db` for production and the in-memory mock
//! here for tests.
//!
//! The store is required to enforce uniqueness of the policy reference at
//! the storage layer. The check-then-insert sequence in the registry is not
//! atomic, so an insert that loses a race must fail fast with
//! [`StoreError::DuplicatePolicyReference`] rather than silently duplicate.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::CustomerId;

use crate::customer::{CustomerRecord, NewCustomer};

/// Errors reported by a customer store implementation.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The storage-layer uniqueness constraint rejected an insert
    #[error("a customer with policy reference {reference} already exists")]
    DuplicatePolicyReference { reference: String },

    /// The store could not be reached
    #[error("customer store unavailable: {0}")]
    Unavailable(String),

    /// A query failed for a reason other than the uniqueness constraint
    #[error("customer store query failed: {0}")]
    Query(String),
}

impl StoreError {
    /// True when the error is the uniqueness-constraint signal
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicatePolicyReference { .. })
    }
}

/// Persistent collection of customer records.
///
/// All methods are safe to invoke concurrently from independent callers;
/// implementations carry no cross-request locking beyond the storage-layer
/// constraint.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Looks up the record registered against a policy reference, if any
    async fn find_by_policy_reference(
        &self,
        reference: &str,
    ) -> Result<Option<CustomerRecord>, StoreError>;

    /// Inserts a new customer and returns the store-assigned identifier.
    ///
    /// Fails with [`StoreError::DuplicatePolicyReference`] when the
    /// storage-layer uniqueness constraint rejects the row.
    async fn insert(&self, customer: NewCustomer) -> Result<CustomerId, StoreError>;

    /// Readiness probe: one cheap round trip to the store
    async fn ping(&self) -> Result<(), StoreError>;
}

/// In-memory mock implementation of [`CustomerStore`] for testing without a
/// database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use tokio::sync::RwLock;

    /// Customer store backed by a `HashMap`, with identifiers assigned from
    /// an in-process sequence.
    #[derive(Debug, Default)]
    pub struct InMemoryCustomerStore {
        records: RwLock<HashMap<i64, CustomerRecord>>,
        sequence: AtomicI64,
        unavailable: AtomicBool,
    }

    impl InMemoryCustomerStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of records currently stored
        pub async fn record_count(&self) -> usize {
            self.records.read().await.len()
        }

        /// Returns a stored record by identifier
        pub async fn get(&self, id: CustomerId) -> Option<CustomerRecord> {
            self.records.read().await.get(&id.value()).cloned()
        }

        /// Makes every subsequent operation fail with
        /// [`StoreError::Unavailable`], simulating an unreachable store
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        fn check_available(&self) -> Result<(), StoreError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable(
                    "simulated store outage".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CustomerStore for InMemoryCustomerStore {
        async fn find_by_policy_reference(
            &self,
            reference: &str,
        ) -> Result<Option<CustomerRecord>, StoreError> {
            self.check_available()?;
            let records = self.records.read().await;
            Ok(records
                .values()
                .find(|r| r.policy_reference == reference)
                .cloned())
        }

        async fn insert(&self, customer: NewCustomer) -> Result<CustomerId, StoreError> {
            self.check_available()?;
            let mut records = self.records.write().await;

            // The storage-layer uniqueness constraint.
            if records
                .values()
                .any(|r| r.policy_reference == customer.policy_reference)
            {
                return Err(StoreError::DuplicatePolicyReference {
                    reference: customer.policy_reference,
                });
            }

            let id = CustomerId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
            records.insert(id.value(), customer.into_record(id));
            Ok(id)
        }

        async fn ping(&self) -> Result<(), StoreError> {
            self.check_available()
        }
    }
}
