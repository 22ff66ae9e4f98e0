// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker graph` command: print the resource-allocation graph.
//!
//! The scenario is replayed first, so the graph reflects every granted
//! request. `--format dot` output can be piped straight into Graphviz.

use super::{print_json, GraphFormat, ScenarioArgs, Settings};
use allocation_graph::{EdgeKind, NodeKind, ResourceGraph};
use service::GraphResponse;

pub async fn execute(
    settings: &Settings,
    scenario: ScenarioArgs,
    format: GraphFormat,
) -> anyhow::Result<()> {
    let scenario = scenario.load().await?;
    let service = settings.build_service()?;
    scenario.apply(&service)?;

    let graph = service.graph()?;
    tracing::info!("{}", graph.summary());

    // --json is an alias for --format json.
    let format = if settings.json { GraphFormat::Json } else { format };

    match format {
        GraphFormat::Json => print_json(&GraphResponse::from(&graph)),
        GraphFormat::Dot => {
            print!("{}", graph.to_dot());
            Ok(())
        }
        GraphFormat::Text => {
            print_text(&graph);
            Ok(())
        }
    }
}

fn print_text(graph: &ResourceGraph) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            banker · Resource-Allocation Graph       ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    println!("  {}", graph.summary());
    println!();

    // ── Adjacency ──────────────────────────────────────────────
    for node in &graph.nodes {
        let targets: Vec<String> = graph
            .edges_from(node.id)
            .map(|e| e.target.to_string())
            .collect();
        let label = match node.kind {
            NodeKind::Process => "needs",
            NodeKind::Resource => "held by",
        };
        let id = node.id.to_string();
        if targets.is_empty() {
            println!("  {id:<4} ({})", node.kind.as_str());
        } else {
            println!(
                "  {id:<4} ({}) {label} {}",
                node.kind.as_str(),
                targets.join(", "),
            );
        }
    }
    println!();

    // ── Edge List ──────────────────────────────────────────────
    for edge in &graph.edges {
        let arrow = match edge.kind {
            EdgeKind::Allocation => "──alloc──►",
            EdgeKind::Request => "──req────►",
        };
        println!("  {} {arrow} {}", edge.source, edge.target);
    }
    println!();
}
