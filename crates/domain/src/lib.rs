//! Domain layer for the order packing engine.
//!
//! This crate provides the value types the engine moves around:
//! - `OrderItem`, one customer's request for a quantity of a single item
//! - `Order`, a customer's bundle of items bound for one destination
//! - `Container`, a fixed-capacity vessel holding orders for one destination

pub mod container;
pub mod error;
pub mod order;

pub use container::Container;
pub use error::ValidationError;
pub use order::{Destination, Order, OrderItem, Volume};
