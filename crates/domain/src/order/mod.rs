//! Orders and the value types they are built from.

mod value_objects;

pub use value_objects::{Destination, OrderItem, Volume};

use common::OrderId;
use serde::Serialize;

/// A customer's bundle of order items.
///
/// Items keep their insertion order. The destination is assigned by the
/// caller after aggregation; an unset destination is a distinct state and
/// such orders are never packed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    items: Vec<OrderItem>,
    destination: Option<Destination>,
}

impl Order {
    /// Creates an order from items, with no destination yet.
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            id: OrderId::new(),
            items,
            destination: None,
        }
    }

    /// Returns this order bound for `destination`.
    pub fn with_destination(mut self, destination: impl Into<Destination>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Consumes the order, returning its items in insertion order.
    pub fn into_items(self) -> Vec<OrderItem> {
        self.items
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn set_destination(&mut self, destination: impl Into<Destination>) {
        self.destination = Some(destination.into());
    }

    pub fn clear_destination(&mut self) {
        self.destination = None;
    }

    /// Returns the customer of the first item, if any.
    pub fn customer(&self) -> Option<&str> {
        self.items.first().map(OrderItem::customer)
    }

    /// Returns true if the order has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all item quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }

    /// Sum of all item volumes.
    pub fn total_volume(&self) -> Volume {
        self.items.iter().map(OrderItem::total_volume).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(customer: &str, name: &str, quantity: u32, unit_volume: u64) -> OrderItem {
        OrderItem::new(customer, name, quantity, Volume::from_cubic_cm(unit_volume)).unwrap()
    }

    #[test]
    fn test_totals() {
        let order = Order::new(vec![item("Ago", "Tea", 2, 10), item("Ago", "Cup", 3, 5)]);
        assert_eq!(order.total_quantity(), 5);
        assert_eq!(order.total_volume().cubic_cm(), 35);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.customer(), Some("Ago"));
    }

    #[test]
    fn test_into_items_returns_items_in_order() {
        let order = Order::new(vec![item("Ago", "Tea", 1, 1), item("Ago", "Cup", 1, 1)]);
        let names: Vec<_> = order
            .into_items()
            .into_iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, ["Tea", "Cup"]);
    }

    #[test]
    fn test_empty_order_is_inert() {
        let order = Order::new(vec![]);
        assert!(order.is_empty());
        assert_eq!(order.total_quantity(), 0);
        assert!(order.total_volume().is_zero());
        assert_eq!(order.customer(), None);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let big = item("Ago", "Sofa", 1, 500);
        let small = item("Ago", "Pen", 1, 1);
        let order = Order::new(vec![big.clone(), small.clone()]);
        assert_eq!(order.items(), &[big, small]);
    }

    #[test]
    fn test_destination_is_unset_by_default() {
        let mut order = Order::new(vec![item("Ago", "Tea", 1, 1)]);
        assert!(order.destination().is_none());

        order.set_destination("Tallinn");
        assert_eq!(order.destination().map(Destination::as_str), Some("Tallinn"));

        order.clear_destination();
        assert!(order.destination().is_none());
    }

    #[test]
    fn test_empty_string_destination_is_still_set() {
        let order = Order::new(vec![item("Ago", "Tea", 1, 1)]).with_destination("");
        assert_eq!(order.destination(), Some(&Destination::new("")));
    }

    #[test]
    fn test_order_serialization_includes_destination() {
        let order = Order::new(vec![item("Ago", "Tea", 1, 4)]).with_destination("Tartu");
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["destination"], "Tartu");
        assert_eq!(json["items"][0]["total_volume"], 4);
    }
}
