// Dashboard entry point: build the combined dataset once, then serve it.
#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod server;
mod state;

use anyhow::Context;
use reshape::config::Settings;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Costs and Revenue dashboard...");

    let settings = Settings::load().context("failed to load settings")?;

    // All load errors are fatal: the dashboard needs the complete dataset to
    // render at all, so fail loudly instead of serving something wrong.
    let dataset = match reshape::load_combined_dataset(&settings.costs_path, &settings.revenue_path)
    {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            error!("failed to build the combined dataset: {e}");
            return Err(e.into());
        }
    };
    info!(records = dataset.records.len(), "combined dataset ready");

    server::serve(&settings, dataset).await
}
