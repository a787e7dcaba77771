//! Serializable summary of a planner run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::{ItemId, OrderId};
use domain::{Container, Order, OrderItem};
use packing::{PackingPlan, SkipReason, SkippedOrder};
use serde::Serialize;

/// Everything a run produced, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub container_capacity: u64,
    pub destinations: BTreeMap<String, Vec<ContainerSummary>>,
    pub unplaceable: Vec<OrderSummary>,
    pub skipped: Vec<SkippedSummary>,
    pub pending: Vec<PendingSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerSummary {
    pub used_volume: u64,
    pub volume_left: u64,
    pub orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer: Option<String>,
    pub destination: Option<String>,
    pub total_quantity: u64,
    pub total_volume: u64,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedSummary {
    pub order: OrderSummary,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Serialize)]
pub struct PendingSummary {
    pub id: ItemId,
    pub customer: String,
    pub name: String,
    pub quantity: u32,
    pub total_volume: u64,
}

impl Report {
    pub fn new(
        container_capacity: u64,
        plan: &PackingPlan,
        unplaceable: &[Order],
        skipped: &[SkippedOrder],
        pending: &[OrderItem],
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            container_capacity,
            destinations: plan
                .iter()
                .map(|(destination, containers)| {
                    (
                        destination.to_string(),
                        containers.iter().map(ContainerSummary::from).collect(),
                    )
                })
                .collect(),
            unplaceable: unplaceable.iter().map(OrderSummary::from).collect(),
            skipped: skipped
                .iter()
                .map(|s| SkippedSummary {
                    order: OrderSummary::from(&s.order),
                    reason: s.reason,
                })
                .collect(),
            pending: pending.iter().map(PendingSummary::from).collect(),
        }
    }

    pub fn container_count(&self) -> usize {
        self.destinations.values().map(Vec::len).sum()
    }
}

impl From<&Container> for ContainerSummary {
    fn from(container: &Container) -> Self {
        Self {
            used_volume: container.used_volume().cubic_cm(),
            volume_left: container.volume_left().cubic_cm(),
            orders: container.orders().iter().map(OrderSummary::from).collect(),
        }
    }
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            customer: order.customer().map(str::to_string),
            destination: order.destination().map(ToString::to_string),
            total_quantity: order.total_quantity(),
            total_volume: order.total_volume().cubic_cm(),
            items: order.items().iter().map(|i| i.name().to_string()).collect(),
        }
    }
}

impl From<&OrderItem> for PendingSummary {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id(),
            customer: item.customer().to_string(),
            name: item.name().to_string(),
            quantity: item.quantity(),
            total_volume: item.total_volume().cubic_cm(),
        }
    }
}
