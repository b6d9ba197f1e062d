//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL backing for the registration core:
//! the connection pool, the embedded schema migration, the customer
//! repository, and the adapter implementing the domain's `CustomerStore`
//! port.
//!
//! The schema declares `policy_reference` unique at the storage layer, so
//! the check-then-insert sequence in the registry cannot silently duplicate
//! a registration under concurrency: the losing insert fails fast and is
//! reported through the port as a duplicate.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresCustomerStore};
//!
//! let pool = create_pool(DatabaseConfig::new(url)).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresCustomerStore::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::PostgresCustomerStore;
pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
