//! JSON manifest describing pending items and the orders to build from them.

use std::path::Path;

use domain::{OrderItem, Volume};
use packing::OrderLimits;
use serde::Deserialize;

use crate::error::{PlannerError, Result};

/// Input to one planner run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Overrides the configured container capacity.
    #[serde(default)]
    pub container_capacity: Option<u64>,

    /// Pending items, in pool order.
    #[serde(default)]
    pub items: Vec<ItemEntry>,

    /// Aggregation requests, run in order.
    #[serde(default)]
    pub requests: Vec<OrderRequest>,
}

/// One pending item line.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub customer: String,
    pub name: String,
    pub quantity: u32,
    pub unit_volume: u64,
}

impl ItemEntry {
    pub fn to_item(&self) -> std::result::Result<OrderItem, domain::ValidationError> {
        OrderItem::new(
            self.customer.as_str(),
            self.name.as_str(),
            self.quantity,
            Volume::from_cubic_cm(self.unit_volume),
        )
    }
}

/// A request to aggregate one order for a customer.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub customer: String,
    pub max_items_quantity: u64,
    pub max_volume: u64,
    #[serde(default)]
    pub destination: Option<String>,
}

impl OrderRequest {
    pub fn limits(&self) -> OrderLimits {
        OrderLimits::new(self.max_items_quantity, Volume::from_cubic_cm(self.max_volume))
    }
}

impl Manifest {
    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
