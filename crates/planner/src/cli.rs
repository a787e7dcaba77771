//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "planner")]
#[command(version)]
#[command(about = "Aggregate pending order items into orders and pack them into containers", long_about = None)]
pub struct Args {
    /// JSON manifest with pending items and aggregation requests
    #[arg(env = "PLANNER_MANIFEST", default_value = "manifest.json")]
    pub manifest: PathBuf,

    /// Container capacity in cm3, used when the manifest sets none
    #[arg(short = 'c', long)]
    pub container_capacity: Option<u64>,

    /// Pack each destination on its own thread
    #[arg(short, long)]
    pub parallel: bool,
}

impl Args {
    /// Layers the command-line flags over the environment configuration.
    pub fn apply(&self, config: Config) -> Config {
        Config {
            container_capacity: self
                .container_capacity
                .unwrap_or(config.container_capacity),
            parallel: self.parallel || config.parallel,
            ..config
        }
    }
}
