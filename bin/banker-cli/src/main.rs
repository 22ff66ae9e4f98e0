// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # banker
//!
//! Command-line interface for the Banker's-algorithm allocator.
//!
//! ## Usage
//! ```bash
//! # Check whether a snapshot is safe
//! banker check --scenario scenarios/textbook.toml
//!
//! # Evaluate one request against a snapshot given inline
//! banker request --total 10,5,7 \
//!     --allocation "0,1,0;2,0,0;3,0,2;2,1,1;0,0,2" \
//!     --max-need "7,5,3;3,2,2;9,0,2;2,2,2;4,3,3" \
//!     --process 1 --request 1,0,2
//!
//! # Replay every scripted request and print statistics
//! banker simulate --scenario scenarios/textbook.toml
//!
//! # Export the resource-allocation graph for Graphviz
//! banker graph --scenario scenarios/textbook.toml --format dot | dot -Tsvg > rag.svg
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::{GraphFormat, ScenarioArgs, Settings};

#[derive(Parser)]
#[command(
    name = "banker",
    about = "Deadlock-avoidance resource allocator using the Banker's algorithm",
    version,
    author
)]
struct Cli {
    /// Path to a TOML service configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    /// Evaluate requests beyond a process's remaining need for safety
    /// instead of denying them.
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a snapshot and report whether it is safe.
    Check {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Initialize a snapshot and evaluate a single request.
    Request {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Index of the requesting process.
        #[arg(short, long)]
        process: usize,

        /// Requested units per resource type (e.g., "1,0,2").
        #[arg(short, long)]
        request: String,
    },

    /// Replay every request in a scenario and print statistics.
    Simulate {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Print the resource-allocation graph after replaying the scenario.
    Graph {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: GraphFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let settings = Settings {
        config: cli.config,
        json: cli.json,
        lenient: cli.lenient,
    };

    match cli.command {
        Commands::Check { scenario } => commands::check::execute(&settings, scenario).await,
        Commands::Request {
            scenario,
            process,
            request,
        } => commands::request::execute(&settings, scenario, process, request).await,
        Commands::Simulate { scenario } => commands::simulate::execute(&settings, scenario).await,
        Commands::Graph { scenario, format } => {
            commands::graph::execute(&settings, scenario, format).await
        }
    }
}
