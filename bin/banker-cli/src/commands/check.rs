// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker check` command: initialize a snapshot and report its safety.
//!
//! Scripted requests in the scenario are ignored; use `simulate` to replay
//! them.

use super::{print_json, print_state_table, vector, ScenarioArgs, Settings};
use safety_checker::SafetyReport;

#[derive(serde::Serialize)]
struct CheckOutput {
    initialize: service::InitializeResponse,
    report: SafetyReport,
}

pub async fn execute(settings: &Settings, scenario: ScenarioArgs) -> anyhow::Result<()> {
    let scenario = scenario.load().await?;
    let service = settings.build_service()?;

    let initialize = service.initialize(scenario.initialize_request())?;
    let report = service.safety_report()?;

    if settings.json {
        return print_json(&CheckOutput { initialize, report });
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║               banker · Safety Check                 ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let state = service.state()?;

    // ── Snapshot ───────────────────────────────────────────────
    println!("  Processes:  {}", state.num_processes());
    println!("  Resources:  {}", state.num_resources());
    println!("  Total:      {}", vector(state.total()));
    println!("  Available:  {}", vector(&initialize.available));
    println!();

    print_state_table(&state);
    println!();

    // ── Verdict ────────────────────────────────────────────────
    println!("  Verdict: {}", report.summary());
    println!();
    Ok(())
}
