//! Port adapters backed by PostgreSQL

pub mod customers;

pub use customers::PostgresCustomerStore;
