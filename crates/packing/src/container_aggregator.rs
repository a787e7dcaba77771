//! First-fit packing of orders into per-destination containers.

use std::collections::BTreeMap;

use domain::{Container, Destination, Order, ValidationError, Volume};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::plan::PackingPlan;

/// Why an order was left out of packing without being unplaceable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The order has no items.
    NoItems,
    /// No destination was assigned.
    NoDestination,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoItems => "no_items",
            SkipReason::NoDestination => "no_destination",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An order that was not offered to any container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedOrder {
    pub order: Order,
    pub reason: SkipReason,
}

/// Packs orders into containers of one fixed capacity.
///
/// Containers are built fresh on every call. The unplaceable and skipped
/// records accumulate across calls until drained.
#[derive(Debug)]
pub struct ContainerAggregator {
    container_capacity: Volume,
    unplaceable: Vec<Order>,
    skipped: Vec<SkippedOrder>,
}

impl ContainerAggregator {
    /// Creates an aggregator whose containers all hold `container_capacity`.
    pub fn new(container_capacity: Volume) -> Result<Self> {
        if container_capacity.is_zero() {
            return Err(ValidationError::NonPositiveCapacity.into());
        }

        Ok(Self {
            container_capacity,
            unplaceable: Vec::new(),
            skipped: Vec::new(),
        })
    }

    pub fn container_capacity(&self) -> Volume {
        self.container_capacity
    }

    /// Orders that could not be packed, oldest first.
    pub fn unplaceable(&self) -> &[Order] {
        &self.unplaceable
    }

    /// Orders left out because they were empty or had no destination.
    pub fn skipped(&self) -> &[SkippedOrder] {
        &self.skipped
    }

    pub fn take_unplaceable(&mut self) -> Vec<Order> {
        std::mem::take(&mut self.unplaceable)
    }

    pub fn take_skipped(&mut self) -> Vec<SkippedOrder> {
        std::mem::take(&mut self.skipped)
    }

    /// Packs `orders` in the given order.
    ///
    /// Each order goes into the first container for its destination with
    /// enough room left, or into a newly opened one. Orders larger than a
    /// whole container are recorded as unplaceable without scanning.
    #[tracing::instrument(skip(self, orders), fields(capacity = self.container_capacity.cubic_cm()))]
    pub fn prepare_containers<I>(&mut self, orders: I) -> PackingPlan
    where
        I: IntoIterator<Item = Order>,
    {
        let mut plan = PackingPlan::new();

        for order in orders {
            let Some((destination, order)) = self.screen(order) else {
                continue;
            };

            let containers = plan.containers_mut(&destination);
            if let Err(order) = pack_first_fit(containers, self.container_capacity, &destination, order)
            {
                self.record_unplaceable(order);
            }
        }

        tracing::info!(
            destinations = plan.iter().count(),
            containers = plan.container_count(),
            orders = plan.order_count(),
            unplaceable = self.unplaceable.len(),
            "containers prepared"
        );
        plan
    }

    /// Packs `orders` with one parallel shard per destination.
    ///
    /// Produces the same containers as [`prepare_containers`]. Oversized
    /// orders are recorded first, in input order; orders rejected inside a
    /// shard follow, shard by shard in destination order.
    ///
    /// [`prepare_containers`]: ContainerAggregator::prepare_containers
    #[tracing::instrument(skip(self, orders), fields(capacity = self.container_capacity.cubic_cm()))]
    pub fn prepare_containers_parallel<I>(&mut self, orders: I) -> PackingPlan
    where
        I: IntoIterator<Item = Order>,
    {
        let mut shards: BTreeMap<Destination, Vec<Order>> = BTreeMap::new();
        for order in orders {
            if let Some((destination, order)) = self.screen(order) {
                shards.entry(destination).or_default().push(order);
            }
        }

        let capacity = self.container_capacity;
        let packed: Vec<(Destination, Vec<Container>, Vec<Order>)> = shards
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(destination, orders)| {
                let mut containers = Vec::new();
                let mut rejected = Vec::new();
                for order in orders {
                    if let Err(order) = pack_first_fit(&mut containers, capacity, &destination, order)
                    {
                        rejected.push(order);
                    }
                }
                (destination, containers, rejected)
            })
            .collect();

        let mut plan = PackingPlan::new();
        for (destination, containers, rejected) in packed {
            plan.insert(destination, containers);
            for order in rejected {
                self.record_unplaceable(order);
            }
        }

        tracing::info!(
            destinations = plan.iter().count(),
            containers = plan.container_count(),
            orders = plan.order_count(),
            unplaceable = self.unplaceable.len(),
            "containers prepared in parallel"
        );
        plan
    }

    /// Filters out orders that never reach a container.
    ///
    /// Returns the destination and order when the order should be packed.
    fn screen(&mut self, order: Order) -> Option<(Destination, Order)> {
        if order.is_empty() {
            self.record_skipped(order, SkipReason::NoItems);
            return None;
        }
        let Some(destination) = order.destination().cloned() else {
            self.record_skipped(order, SkipReason::NoDestination);
            return None;
        };
        if order.total_volume() > self.container_capacity {
            self.record_unplaceable(order);
            return None;
        }
        Some((destination, order))
    }

    fn record_unplaceable(&mut self, order: Order) {
        metrics::counter!("packing_orders_unplaceable").increment(1);
        tracing::warn!(
            order = %order.id(),
            volume = order.total_volume().cubic_cm(),
            capacity = self.container_capacity.cubic_cm(),
            "order cannot be placed"
        );
        self.unplaceable.push(order);
    }

    fn record_skipped(&mut self, order: Order, reason: SkipReason) {
        metrics::counter!("packing_orders_skipped").increment(1);
        tracing::debug!(order = %order.id(), %reason, "order skipped");
        self.skipped.push(SkippedOrder { order, reason });
    }
}

/// Places `order` in the first container with room, opening a new one if
/// none has. Hands the order back if even an empty container rejects it.
fn pack_first_fit(
    containers: &mut Vec<Container>,
    capacity: Volume,
    destination: &Destination,
    order: Order,
) -> std::result::Result<(), Order> {
    let mut order = order;
    for (index, container) in containers.iter_mut().enumerate() {
        match container.try_add_order(order) {
            Ok(()) => {
                metrics::counter!("packing_orders_placed").increment(1);
                tracing::debug!(%destination, container = index, "order placed");
                return Ok(());
            }
            Err(rejected) => order = rejected,
        }
    }

    let Ok(mut container) = Container::new(capacity, Some(destination.clone())) else {
        return Err(order);
    };
    container.try_add_order(order)?;
    containers.push(container);

    metrics::counter!("packing_containers_opened").increment(1);
    metrics::counter!("packing_orders_placed").increment(1);
    tracing::debug!(%destination, container = containers.len() - 1, "container opened");
    Ok(())
}

#[cfg(test)]
mod tests {
    use domain::OrderItem;

    use super::*;

    fn order(volume: u64, destination: Option<&str>) -> Order {
        let item = OrderItem::new("Ago", "Crate", 1, Volume::from_cubic_cm(volume)).unwrap();
        let order = Order::new(vec![item]);
        match destination {
            Some(d) => order.with_destination(d),
            None => order,
        }
    }

    fn aggregator(capacity: u64) -> ContainerAggregator {
        ContainerAggregator::new(Volume::from_cubic_cm(capacity)).unwrap()
    }

    fn volumes_left(plan: &PackingPlan, destination: &str) -> Vec<u64> {
        plan.containers_for(destination)
            .iter()
            .map(|c| c.volume_left().cubic_cm())
            .collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(ContainerAggregator::new(Volume::zero()).is_err());
    }

    #[test]
    fn test_second_order_opens_new_container() {
        let mut agg = aggregator(100);
        let plan = agg.prepare_containers([order(80, Some("NY")), order(30, Some("NY"))]);

        assert_eq!(volumes_left(&plan, "NY"), [20, 70]);
        assert!(agg.unplaceable().is_empty());
    }

    #[test]
    fn test_first_fit_uses_earliest_container_with_room() {
        let mut agg = aggregator(100);
        let plan = agg.prepare_containers([
            order(80, Some("NY")),
            order(50, Some("NY")),
            order(15, Some("NY")),
        ]);

        // 15 fits the first container, not the tighter-fitting second one
        assert_eq!(volumes_left(&plan, "NY"), [5, 50]);
    }

    #[test]
    fn test_oversized_order_is_unplaceable() {
        let mut agg = aggregator(100);
        let big = order(150, Some("NY"));
        let big_id = big.id();

        let plan = agg.prepare_containers([big]);

        assert!(plan.is_empty());
        assert_eq!(agg.unplaceable().len(), 1);
        assert_eq!(agg.unplaceable()[0].id(), big_id);
    }

    #[test]
    fn test_exact_capacity_order_is_placed() {
        let mut agg = aggregator(100);
        let plan = agg.prepare_containers([order(100, Some("NY"))]);
        assert_eq!(volumes_left(&plan, "NY"), [0]);
    }

    #[test]
    fn test_destinations_do_not_share_containers() {
        let mut agg = aggregator(100);
        let plan = agg.prepare_containers([order(10, Some("NY")), order(10, Some("LA"))]);

        assert_eq!(plan.container_count(), 2);
        assert_eq!(volumes_left(&plan, "NY"), [90]);
        assert_eq!(volumes_left(&plan, "LA"), [90]);
        for (destination, containers) in plan.iter() {
            assert_eq!(containers[0].destination(), Some(destination));
        }
    }

    #[test]
    fn test_empty_and_destinationless_orders_are_skipped() {
        let mut agg = aggregator(100);
        let empty = Order::new(vec![]).with_destination("NY");
        let nowhere = order(10, None);

        let plan = agg.prepare_containers([empty, nowhere]);

        assert!(plan.is_empty());
        assert!(agg.unplaceable().is_empty());
        let reasons: Vec<_> = agg.skipped().iter().map(|s| s.reason).collect();
        assert_eq!(reasons, [SkipReason::NoItems, SkipReason::NoDestination]);

        let drained = agg.take_skipped();
        assert_eq!(drained.len(), 2);
        assert!(agg.skipped().is_empty());
    }

    #[test]
    fn test_unplaceable_accumulates_across_calls_but_containers_do_not() {
        let mut agg = aggregator(100);
        let first = agg.prepare_containers([order(60, Some("NY")), order(200, Some("NY"))]);
        let second = agg.prepare_containers([order(30, Some("NY")), order(300, Some("NY"))]);

        assert_eq!(volumes_left(&first, "NY"), [40]);
        assert_eq!(volumes_left(&second, "NY"), [70]);
        assert_eq!(agg.unplaceable().len(), 2);

        let drained = agg.take_unplaceable();
        assert_eq!(drained.len(), 2);
        assert!(agg.unplaceable().is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential_containers() {
        let orders: Vec<Order> = (0..60)
            .map(|i| {
                let destination = ["NY", "LA", "SF"][i % 3];
                order((i as u64 * 37) % 120 + 1, Some(destination))
            })
            .collect();

        let mut sequential = aggregator(100);
        let mut parallel = aggregator(100);
        let a = sequential.prepare_containers(orders.clone());
        let b = parallel.prepare_containers_parallel(orders);

        assert_eq!(a, b);
        let mut a_ids: Vec<_> = sequential.unplaceable().iter().map(Order::id).collect();
        let mut b_ids: Vec<_> = parallel.unplaceable().iter().map(Order::id).collect();
        a_ids.sort_by_key(|id| id.as_uuid());
        b_ids.sort_by_key(|id| id.as_uuid());
        assert_eq!(a_ids, b_ids);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::NoItems.to_string(), "no_items");
        assert_eq!(SkipReason::NoDestination.to_string(), "no_destination");
    }
}
