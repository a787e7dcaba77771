//! The destination-keyed result of a packing pass.

use std::collections::BTreeMap;

use domain::{Container, Destination};
use serde::Serialize;

/// Containers opened by one packing pass, grouped by destination.
///
/// Containers for a destination are kept in the order they were opened,
/// which is also the first-fit scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackingPlan {
    containers: BTreeMap<Destination, Vec<Container>>,
}

impl PackingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destinations that received at least one order.
    pub fn destinations(&self) -> impl Iterator<Item = &Destination> {
        self.containers.keys()
    }

    /// Containers for `destination`, empty when there are none.
    pub fn containers_for(&self, destination: &str) -> &[Container] {
        self.containers
            .get(destination)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Destination, &[Container])> {
        self.containers.iter().map(|(d, c)| (d, c.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Total number of containers across all destinations.
    pub fn container_count(&self) -> usize {
        self.containers.values().map(Vec::len).sum()
    }

    /// Total number of orders packed across all containers.
    pub fn order_count(&self) -> usize {
        self.containers
            .values()
            .flatten()
            .map(|c| c.orders().len())
            .sum()
    }

    pub fn into_inner(self) -> BTreeMap<Destination, Vec<Container>> {
        self.containers
    }

    pub(crate) fn containers_mut(&mut self, destination: &Destination) -> &mut Vec<Container> {
        self.containers.entry(destination.clone()).or_default()
    }

    pub(crate) fn insert(&mut self, destination: Destination, containers: Vec<Container>) {
        self.containers.insert(destination, containers);
    }
}

#[cfg(test)]
mod tests {
    use domain::{Order, OrderItem, Volume};

    use super::*;

    #[test]
    fn test_unknown_destination_has_no_containers() {
        let plan = PackingPlan::new();
        assert!(plan.containers_for("Narva").is_empty());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_counts() {
        let dest = Destination::new("Narva");
        let mut container = Container::new(Volume::from_cubic_cm(10), Some(dest.clone())).unwrap();
        let item = OrderItem::new("Ago", "Tea", 1, Volume::from_cubic_cm(3)).unwrap();
        container
            .try_add_order(Order::new(vec![item]).with_destination(dest.clone()))
            .unwrap();

        let mut plan = PackingPlan::new();
        plan.containers_mut(&dest).push(container);

        assert_eq!(plan.container_count(), 1);
        assert_eq!(plan.order_count(), 1);
        assert_eq!(plan.destinations().collect::<Vec<_>>(), [&dest]);

        let json = serde_json::to_value(&plan).unwrap();
        assert!(json["Narva"].is_array());

        let inner = plan.into_inner();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[&dest].len(), 1);
    }
}
