// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker simulate` command: replay a scenario's scripted requests.
//!
//! Prints one line per request, the final snapshot, and the controller's
//! request statistics.

use super::{print_json, print_state_table, vector, ScenarioArgs, Settings};
use allocator::RequestStats;
use service::ScenarioOutcome;

#[derive(serde::Serialize)]
struct SimulateOutput {
    outcome: ScenarioOutcome,
    stats: RequestStats,
    safe_sequence: Vec<usize>,
}

pub async fn execute(settings: &Settings, scenario: ScenarioArgs) -> anyhow::Result<()> {
    let scenario = scenario.load().await?;
    if scenario.requests.is_empty() {
        tracing::warn!("scenario has no scripted requests; only the initial state is checked");
    }

    let service = settings.build_service()?;
    let outcome = scenario.apply(&service)?;
    let stats = service.stats()?;
    let report = service.safety_report()?;

    if settings.json {
        return print_json(&SimulateOutput {
            outcome,
            stats,
            safe_sequence: report.sequence,
        });
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              banker · Request Simulation            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    println!(
        "  Initial:  available {}, {}",
        vector(&outcome.initialize.available),
        if outcome.initialize.safe { "safe" } else { "UNSAFE" },
    );
    println!();

    // ── Requests ───────────────────────────────────────────────
    println!(
        "  {:<4} {:<6} {:<14} {:<8} {}",
        "#", "Proc", "Request", "Status", "Result",
    );
    println!("  {}", "-".repeat(72));

    for (i, (req, resp)) in outcome.responses.iter().enumerate() {
        let result = match (&resp.available, &resp.denial) {
            (Some(available), _) => format!("available {}", vector(available)),
            (None, Some(denial)) => denial.to_string(),
            (None, None) => String::new(),
        };
        println!(
            "  {:<4} {:<6} {:<14} {:<8} {}",
            i + 1,
            format!("P{}", req.process),
            vector(&req.request),
            resp.status_code(),
            result,
        );
    }
    println!();

    // ── Final State ────────────────────────────────────────────
    print_state_table(&service.state()?);
    println!();
    println!("  Final:    {}", report.summary());
    println!();

    // ── Statistics ─────────────────────────────────────────────
    println!("  {}", stats.summary());
    println!();
    Ok(())
}
