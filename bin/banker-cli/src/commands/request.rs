// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `banker request` command: evaluate one request against a snapshot.
//!
//! ```text
//! initialize(snapshot) → request(process, vector) → granted | denied(reason)
//! ```

use super::{print_json, print_state_table, vector, ScenarioArgs, Settings};
use service::AllocationRequest;

pub async fn execute(
    settings: &Settings,
    scenario: ScenarioArgs,
    process: usize,
    request: String,
) -> anyhow::Result<()> {
    let request = resource_model::parse_vector(&request)
        .map_err(|e| anyhow::anyhow!("invalid --request: {e}"))?;

    let scenario = scenario.load().await?;
    let service = settings.build_service()?;
    service.initialize(scenario.initialize_request())?;

    let before = service.available()?;
    let req = AllocationRequest { process, request };
    let resp = service.request_allocation(req.clone())?;

    if settings.json {
        return print_json(&resp);
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              banker · Request Evaluation            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    println!("  Process:    P{}", req.process);
    println!("  Request:    {}", vector(&req.request));
    println!("  Available:  {} (before)", vector(&before));
    println!("  Policy:     {}", service.policy()?);
    println!();

    // ── Decision ───────────────────────────────────────────────
    println!("  {}", resp.message);
    match (&resp.available, &resp.denial) {
        (Some(available), _) => println!("  Available:  {} (after)", vector(available)),
        (None, Some(denial)) => println!("  Detail:     {}", denial.detail()),
        (None, None) => {}
    }
    println!();

    print_state_table(&service.state()?);
    println!();
    Ok(())
}
