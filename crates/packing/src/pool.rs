//! The pool of order items waiting to be aggregated.

use domain::OrderItem;

/// Ordered pool of pending order items.
///
/// Insertion order is the scan order for aggregation. Items leave the pool
/// by being moved out, so an item can never sit in the pool and in an order
/// at the same time, and items with identical fields are never confused.
#[derive(Debug, Clone, Default)]
pub struct PendingPool {
    items: Vec<OrderItem>,
}

impl PendingPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item at the end of the scan order.
    pub fn push(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[OrderItem] {
        &self.items
    }

    /// Scans the pool once, front to back, moving out every item `select`
    /// accepts.
    ///
    /// `select` sees items in pool order and may keep running state. The
    /// selected items come back in scan order; the rest stay in the pool in
    /// their original relative order.
    pub fn take_where<F>(&mut self, mut select: F) -> Vec<OrderItem>
    where
        F: FnMut(&OrderItem) -> bool,
    {
        let mut selected = Vec::new();
        let mut kept = Vec::with_capacity(self.items.len());

        for item in std::mem::take(&mut self.items) {
            if select(&item) {
                selected.push(item);
            } else {
                kept.push(item);
            }
        }

        self.items = kept;
        selected
    }

    /// Removes every item, returning them in pool order.
    pub fn drain(&mut self) -> Vec<OrderItem> {
        std::mem::take(&mut self.items)
    }
}

impl Extend<OrderItem> for PendingPool {
    fn extend<T: IntoIterator<Item = OrderItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<OrderItem> for PendingPool {
    fn from_iter<T: IntoIterator<Item = OrderItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::Volume;

    use super::*;

    fn item(name: &str) -> OrderItem {
        OrderItem::new("Ago", name, 1, Volume::from_cubic_cm(1)).unwrap()
    }

    #[test]
    fn test_take_where_preserves_order_on_both_sides() {
        let mut pool: PendingPool = ["a", "b", "c", "d"].into_iter().map(item).collect();

        let taken = pool.take_where(|i| i.name() == "b" || i.name() == "d");

        let taken: Vec<_> = taken.iter().map(OrderItem::name).collect();
        let left: Vec<_> = pool.iter().map(OrderItem::name).collect();
        assert_eq!(taken, ["b", "d"]);
        assert_eq!(left, ["a", "c"]);
    }

    #[test]
    fn test_take_where_removes_by_identity() {
        let first = item("same");
        let second = item("same");
        let second_id = second.id();
        let mut pool: PendingPool = [first, second].into_iter().collect();

        let mut seen = 0;
        let taken = pool.take_where(|_| {
            seen += 1;
            seen == 1
        });

        assert_eq!(taken.len(), 1);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.as_slice()[0].id(), second_id);
    }

    #[test]
    fn test_drain_empties_pool() {
        let mut pool = PendingPool::new();
        pool.push(item("a"));
        pool.extend([item("b")]);

        assert_eq!(pool.drain().len(), 2);
        assert!(pool.is_empty());
    }
}
