//! Capacity-bounded containers.

use serde::Serialize;

use crate::error::ValidationError;
use crate::order::{Destination, Order, Volume};

/// A fixed-capacity vessel carrying orders to one destination.
///
/// Orders only enter through [`Container::try_add_order`], so the summed
/// order volume never exceeds the capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    capacity: Volume,
    destination: Option<Destination>,
    orders: Vec<Order>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(capacity: Volume, destination: Option<Destination>) -> Result<Self, ValidationError> {
        if capacity.is_zero() {
            return Err(ValidationError::NonPositiveCapacity);
        }

        Ok(Self {
            capacity,
            destination,
            orders: Vec::new(),
        })
    }

    pub fn capacity(&self) -> Volume {
        self.capacity
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.orders
    }

    /// Volume taken by the orders already on board.
    pub fn used_volume(&self) -> Volume {
        self.orders.iter().map(Order::total_volume).sum()
    }

    /// Remaining capacity, never below zero.
    pub fn volume_left(&self) -> Volume {
        self.capacity.saturating_sub(self.used_volume())
    }

    /// Returns true if `order` would fit in the remaining capacity.
    pub fn can_accept(&self, order: &Order) -> bool {
        order.total_volume() <= self.volume_left()
    }

    /// Admits `order` whole if it fits, otherwise hands it back untouched.
    ///
    /// The container is only modified on success.
    pub fn try_add_order(&mut self, order: Order) -> Result<(), Order> {
        if !self.can_accept(&order) {
            return Err(order);
        }
        self.orders.push(order);
        Ok(())
    }
}
