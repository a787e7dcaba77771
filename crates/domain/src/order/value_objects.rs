//! Value objects for the order domain.

use std::borrow::Borrow;

use common::ItemId;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Volume represented in whole cubic centimetres to keep comparisons exact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Volume(u64);

impl Volume {
    /// Creates a volume from cubic centimetres.
    pub const fn from_cubic_cm(cm3: u64) -> Self {
        Self(cm3)
    }

    /// Returns zero volume.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the volume in cubic centimetres.
    pub const fn cubic_cm(&self) -> u64 {
        self.0
    }

    /// Returns true if the volume is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn checked_multiply(self, quantity: u32) -> Option<Volume> {
        self.0.checked_mul(u64::from(quantity)).map(Volume)
    }

    /// Adds another volume, returning `None` on overflow.
    pub fn checked_add(self, other: Volume) -> Option<Volume> {
        self.0.checked_add(other.0).map(Volume)
    }

    /// Adds another volume, clamping at the maximum representable value.
    pub fn saturating_add(self, other: Volume) -> Volume {
        Volume(self.0.saturating_add(other.0))
    }

    /// Subtracts another volume, clamping at zero.
    pub fn saturating_sub(self, other: Volume) -> Volume {
        Volume(self.0.saturating_sub(other.0))
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cm3", self.0)
    }
}

impl From<u64> for Volume {
    fn from(cm3: u64) -> Self {
        Self(cm3)
    }
}

impl std::ops::Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl std::ops::AddAssign for Volume {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl std::iter::Sum for Volume {
    fn sum<I: Iterator<Item = Volume>>(iter: I) -> Self {
        iter.fold(Volume::zero(), |total, v| total.saturating_add(v))
    }
}

/// Where an order, and the container carrying it, is headed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    /// Creates a new destination from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the destination as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Destination {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Destination {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single requested line: some quantity of one item for one customer.
///
/// Immutable once built. The id distinguishes items whose fields happen to
/// be identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    id: ItemId,
    customer: String,
    name: String,
    quantity: u32,
    unit_volume: Volume,
    total_volume: Volume,
}

impl OrderItem {
    /// Creates a new order item.
    ///
    /// Fails when the customer or name is blank, or when the total volume
    /// overflows.
    pub fn new(
        customer: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_volume: Volume,
    ) -> Result<Self, ValidationError> {
        let customer = customer.into();
        let name = name.into();

        if customer.trim().is_empty() {
            return Err(ValidationError::BlankCustomer);
        }
        if name.trim().is_empty() {
            return Err(ValidationError::BlankItemName);
        }
        let total_volume = unit_volume
            .checked_multiply(quantity)
            .ok_or(ValidationError::VolumeOverflow {
                quantity,
                unit_volume,
            })?;

        Ok(Self {
            id: ItemId::new(),
            customer,
            name,
            quantity,
            unit_volume,
            total_volume,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_volume(&self) -> Volume {
        self.unit_volume
    }

    /// Returns the volume of the whole line (quantity * unit_volume).
    pub fn total_volume(&self) -> Volume {
        self.total_volume
    }

    /// Returns true if this item was requested by `customer`.
    pub fn belongs_to(&self, customer: &str) -> bool {
        self.customer == customer
    }
}
