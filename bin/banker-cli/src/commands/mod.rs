// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the plumbing they share.

pub mod check;
pub mod graph;
pub mod request;
pub mod simulate;

use allocator::NeedPolicy;
use anyhow::Context as _;
use resource_model::Units;
use service::{BankerService, Scenario, ServiceConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Options shared by every subcommand.
pub struct Settings {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub lenient: bool,
}

impl Settings {
    /// Loads the service configuration and applies command-line overrides.
    pub fn service_config(&self) -> anyhow::Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };
        if self.lenient {
            config.need_policy = NeedPolicy::Lenient.to_string();
        }
        Ok(config)
    }

    /// Builds a fresh service from the resolved configuration.
    pub fn build_service(&self) -> anyhow::Result<BankerService> {
        Ok(BankerService::new(self.service_config()?)?)
    }
}

/// Where the snapshot comes from: a scenario file or inline text.
#[derive(clap::Args)]
pub struct ScenarioArgs {
    /// Scenario file (.toml or .json).
    #[arg(short, long, conflicts_with_all = ["total", "allocation", "max_need"])]
    pub scenario: Option<PathBuf>,

    /// Total units per resource type (e.g., "10,5,7").
    #[arg(long, requires_all = ["allocation", "max_need"])]
    pub total: Option<String>,

    /// Allocation matrix, rows separated by ';' (e.g., "0,1,0;2,0,0").
    #[arg(long)]
    pub allocation: Option<String>,

    /// Maximum-need matrix, rows separated by ';'.
    #[arg(long)]
    pub max_need: Option<String>,
}

impl ScenarioArgs {
    /// Reads the scenario from a file or assembles it from inline text.
    pub async fn load(&self) -> anyhow::Result<Scenario> {
        if let Some(path) = &self.scenario {
            return load_scenario_file(path).await;
        }
        match (&self.total, &self.allocation, &self.max_need) {
            (Some(total), Some(allocation), Some(max_need)) => {
                Ok(Scenario::from_text(total, allocation, max_need)?)
            }
            _ => anyhow::bail!(
                "no snapshot given: pass --scenario <file> or all of --total, --allocation, --max-need"
            ),
        }
    }
}

async fn load_scenario_file(path: &Path) -> anyhow::Result<Scenario> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read scenario '{}'", path.display()))?;
    let scenario = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Scenario::from_json(&content)?,
        _ => Scenario::from_toml(&content)?,
    };
    tracing::info!(
        "loaded scenario '{}' with {} scripted requests",
        path.display(),
        scenario.requests.len(),
    );
    Ok(scenario)
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints the per-process allocation table.
pub fn print_state_table(state: &resource_model::ResourceState) {
    println!(
        "  {:<6} {:<16} {:<16} {:<16}",
        "Proc", "Allocation", "Max need", "Need",
    );
    println!("  {}", "-".repeat(56));
    for pid in 0..state.num_processes() {
        println!(
            "  {:<6} {:<16} {:<16} {:<16}",
            format!("P{pid}"),
            vector(state.allocation(pid)),
            vector(state.max_need(pid)),
            vector(&state.need(pid)),
        );
    }
}

/// Formats a unit vector as `[a, b, c]`.
pub fn vector(units: &[Units]) -> String {
    format!("{units:?}")
}

/// Output format of the `graph` command.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GraphFormat {
    Text,
    Json,
    Dot,
}
