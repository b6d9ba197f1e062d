//! Repository implementations

pub mod customers;

pub use customers::{CustomerRepository, CustomerRow};
