//! Order aggregation and container packing.
//!
//! Pending order items are grouped into per-customer orders under quantity
//! and volume ceilings, then the orders are packed into capacity-bounded
//! containers per destination:
//! 1. `OrderAggregator::aggregate_order` makes one greedy pass over the pool
//! 2. the caller assigns each order a destination
//! 3. `ContainerAggregator::prepare_containers` packs them first-fit
//!
//! Every order handed to the packer ends up in exactly one container, in the
//! unplaceable record, or (when empty or without a destination) in the
//! skipped record.

pub mod container_aggregator;
pub mod error;
pub mod order_aggregator;
pub mod plan;
pub mod pool;
pub mod shared;

pub use container_aggregator::{ContainerAggregator, SkipReason, SkippedOrder};
pub use error::{PackingError, Result};
pub use order_aggregator::{OrderAggregator, OrderLimits};
pub use plan::PackingPlan;
pub use pool::PendingPool;
pub use shared::SharedOrderAggregator;
