//! Command-line front end for the order packing engine.
//!
//! Reads a JSON manifest of pending items and aggregation requests, builds
//! the orders, packs them into containers and renders a JSON report.

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;

use std::path::Path;

use domain::{Order, Volume};
use packing::{ContainerAggregator, OrderAggregator};

pub use cli::Args;
pub use config::{Config, LogFormat};
pub use error::{PlannerError, Result};
pub use manifest::{ItemEntry, Manifest, OrderRequest};
pub use report::Report;

/// Aggregates and packs everything described by `manifest`.
#[tracing::instrument(skip_all, fields(items = manifest.items.len(), requests = manifest.requests.len()))]
pub fn run(manifest: &Manifest, config: &Config) -> Result<Report> {
    let mut aggregator = OrderAggregator::new();
    for (index, entry) in manifest.items.iter().enumerate() {
        let item = entry
            .to_item()
            .map_err(|source| PlannerError::InvalidItem { index, source })?;
        aggregator.add_item(item);
    }

    let orders: Vec<Order> = manifest
        .requests
        .iter()
        .map(|request| {
            let order = aggregator.aggregate_order(&request.customer, request.limits());
            match &request.destination {
                Some(destination) => order.with_destination(destination.as_str()),
                None => order,
            }
        })
        .collect();

    let capacity = manifest
        .container_capacity
        .unwrap_or(config.container_capacity);
    let mut packer = ContainerAggregator::new(Volume::from_cubic_cm(capacity))?;
    let plan = if config.parallel {
        packer.prepare_containers_parallel(orders)
    } else {
        packer.prepare_containers(orders)
    };

    let report = Report::new(
        capacity,
        &plan,
        packer.unplaceable(),
        packer.skipped(),
        aggregator.pending().as_slice(),
    );
    tracing::info!(
        containers = report.container_count(),
        unplaceable = report.unplaceable.len(),
        skipped = report.skipped.len(),
        pending = report.pending.len(),
        "plan ready"
    );
    Ok(report)
}

/// Loads the manifest at `path` and runs it.
pub fn run_from_path(path: &Path, config: &Config) -> Result<Report> {
    let manifest = Manifest::load(path)?;
    run(&manifest, config)
}
