//! Domain error types.

use thiserror::Error;

use crate::order::Volume;

/// Input-shape errors rejected when a value is constructed.
///
/// Placement failures are never reported through this type; an order that
/// does not fit anywhere is recorded by the packing layer instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The customer identity is empty or whitespace.
    #[error("Customer is required")]
    BlankCustomer,

    /// The item name is empty or whitespace.
    #[error("Item name is required")]
    BlankItemName,

    /// `quantity * unit_volume` does not fit in a volume.
    #[error("Volume overflow: {quantity} x {unit_volume}")]
    VolumeOverflow { quantity: u32, unit_volume: Volume },

    /// A container must be able to hold something.
    #[error("Container capacity must be greater than 0")]
    NonPositiveCapacity,
}
