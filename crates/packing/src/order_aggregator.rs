//! Greedy aggregation of pending items into customer orders.

use std::collections::HashSet;

use domain::{Order, OrderItem, Volume};

use crate::pool::PendingPool;

/// Ceilings an aggregated order must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLimits {
    /// Maximum summed item quantity.
    pub max_items_quantity: u64,
    /// Maximum summed item volume.
    pub max_volume: Volume,
}

impl OrderLimits {
    pub fn new(max_items_quantity: u64, max_volume: Volume) -> Self {
        Self {
            max_items_quantity,
            max_volume,
        }
    }
}

/// Groups pending order items into orders for one customer at a time.
#[derive(Debug, Clone, Default)]
pub struct OrderAggregator {
    pending: PendingPool,
}

impl OrderAggregator {
    /// Creates an aggregator with an empty pending pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator over an existing pool.
    pub fn with_pool(pending: PendingPool) -> Self {
        Self { pending }
    }

    /// Adds an item to the end of the pending pool.
    pub fn add_item(&mut self, item: OrderItem) {
        self.pending.push(item);
    }

    pub fn pending(&self) -> &PendingPool {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pending items requested by `customer`, in pool order.
    pub fn pending_for<'a>(&'a self, customer: &'a str) -> impl Iterator<Item = &'a OrderItem> {
        self.pending.iter().filter(move |i| i.belongs_to(customer))
    }

    /// Distinct customers with pending items, in first-seen order.
    pub fn customers(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.pending
            .iter()
            .filter(|i| seen.insert(i.customer()))
            .map(|i| i.customer().to_string())
            .collect()
    }

    /// Builds an order for `customer` from the pending pool.
    ///
    /// One forward scan: an item of this customer is taken when both running
    /// totals stay within `limits`, otherwise it is skipped and stays pending.
    /// There is no lookahead, so a later smaller item may be taken after a
    /// larger one was skipped. Items of other customers are untouched. An
    /// empty selection yields an empty order.
    #[tracing::instrument(skip(self), fields(pending = self.pending.len()))]
    pub fn aggregate_order(&mut self, customer: &str, limits: OrderLimits) -> Order {
        let mut current_quantity: u64 = 0;
        let mut current_volume = Volume::zero();

        let selected = self.pending.take_where(|item| {
            if !item.belongs_to(customer) {
                return false;
            }

            let next_quantity = current_quantity.checked_add(u64::from(item.quantity()));
            let next_volume = current_volume.checked_add(item.total_volume());

            match (next_quantity, next_volume) {
                (Some(quantity), Some(volume))
                    if quantity <= limits.max_items_quantity && volume <= limits.max_volume =>
                {
                    current_quantity = quantity;
                    current_volume = volume;
                    tracing::debug!(item = %item.id(), name = item.name(), "item selected");
                    true
                }
                _ => false,
            }
        });

        metrics::counter!("packing_items_selected").increment(selected.len() as u64);
        metrics::counter!("packing_orders_aggregated").increment(1);
        tracing::info!(
            customer,
            items = selected.len(),
            total_quantity = current_quantity,
            total_volume = current_volume.cubic_cm(),
            "order aggregated"
        );

        Order::new(selected)
    }

    /// Aggregates one order per pending customer, in first-seen order.
    pub fn aggregate_all(&mut self, limits: OrderLimits) -> Vec<Order> {
        self.customers()
            .iter()
            .map(|customer| self.aggregate_order(customer, limits))
            .collect()
    }
}
