//! Core Kernel - Foundational types and utilities for the registration system
//!
//! This crate provides the fundamental building blocks used across the other
//! crates:
//! - Strongly-typed identifiers for persisted entities
//! - The `Clock` abstraction supplying the current instant and calendar date

pub mod clock;
pub mod identifiers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identifiers::CustomerId;
