//! Shared identifier types for the order packing engine.

pub mod types;

pub use types::{ItemId, OrderId};
