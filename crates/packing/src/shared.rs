//! Thread-safe handle around an order aggregator.

use std::sync::Arc;

use domain::{Order, OrderItem};
use parking_lot::Mutex;

use crate::order_aggregator::{OrderAggregator, OrderLimits};

/// Cloneable handle sharing one pending pool between threads.
///
/// Each `aggregate_order` holds the lock for the whole scan-and-remove step,
/// so concurrent calls for different customers never consume the same item.
#[derive(Debug, Clone, Default)]
pub struct SharedOrderAggregator {
    inner: Arc<Mutex<OrderAggregator>>,
}

impl SharedOrderAggregator {
    /// Creates a shared aggregator with an empty pending pool.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&self, item: OrderItem) {
        self.inner.lock().add_item(item);
    }

    pub fn aggregate_order(&self, customer: &str, limits: OrderLimits) -> Order {
        self.inner.lock().aggregate_order(customer, limits)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending_count()
    }

    /// Copies the current pending items, in pool order.
    pub fn pending_snapshot(&self) -> Vec<OrderItem> {
        self.inner.lock().pending().as_slice().to_vec()
    }
}

impl From<OrderAggregator> for SharedOrderAggregator {
    fn from(aggregator: OrderAggregator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(aggregator)),
        }
    }
}
