// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Banker's-algorithm safety simulation.
//!
//! # Algorithm
//! ```text
//! work   := available
//! finish := [false; P]
//! loop:
//!     progressed := false
//!     for i in 0..P where !finish[i]:
//!         if need[i] <= work (element-wise):
//!             work += allocation[i]      // P_i runs to completion, releases all
//!             finish[i] := true
//!             progressed := true
//!     if !progressed: break
//! safe := all(finish)
//! ```
//!
//! Within a pass, `work` grows as soon as a process finishes, so later
//! processes in the same pass already see the released units. Which fitting
//! process is picked first changes the reported sequence, never the verdict.
//!
//! # Complexity
//! At most `P` passes of `P × R` comparisons: O(P²·R).

use crate::{SafetyCheck, SafetyReport};
use resource_model::{ResourceState, Units};

/// The classical Banker's safety check.
///
/// # Example
/// ```
/// use resource_model::ResourceState;
/// use safety_checker::{BankersAlgorithm, SafetyCheck};
///
/// let state = ResourceState::new(
///     vec![4],
///     vec![vec![1], vec![1]],
///     vec![vec![3], vec![2]],
/// ).unwrap();
///
/// let report = BankersAlgorithm::new().check(&state);
/// assert!(report.safe);
/// assert_eq!(report.sequence, vec![0, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BankersAlgorithm;

impl BankersAlgorithm {
    /// Creates the checker.
    pub fn new() -> Self {
        Self
    }
}

impl SafetyCheck for BankersAlgorithm {
    fn name(&self) -> &str {
        "bankers"
    }

    fn check(&self, state: &ResourceState) -> SafetyReport {
        let num_processes = state.num_processes();
        if num_processes == 0 {
            return SafetyReport::trivially_safe();
        }

        let mut work: Vec<Units> = state.available().to_vec();
        let mut finish = vec![false; num_processes];
        let mut sequence = Vec::with_capacity(num_processes);
        let mut pass = 0usize;

        loop {
            pass += 1;
            let mut progressed = false;

            for pid in 0..num_processes {
                if finish[pid] || !fits(state, pid, &work) {
                    continue;
                }

                // Simulate P_pid finishing and releasing everything it holds.
                for (free, &held) in work.iter_mut().zip(state.allocation(pid)) {
                    *free = free.saturating_add(held);
                }
                finish[pid] = true;
                sequence.push(pid);
                progressed = true;
            }

            tracing::debug!(
                "safety pass {pass}: {}/{num_processes} finished, work {work:?}",
                sequence.len(),
            );

            if !progressed {
                break;
            }
        }

        let blocked: Vec<usize> = finish
            .iter()
            .enumerate()
            .filter_map(|(pid, &done)| (!done).then_some(pid))
            .collect();

        SafetyReport {
            safe: blocked.is_empty(),
            sequence,
            blocked,
        }
    }
}

/// Returns `true` if the remaining need of `pid` fits in `work`.
fn fits(state: &ResourceState, pid: usize, work: &[Units]) -> bool {
    (0..state.num_resources()).all(|rid| state.need_of(pid, rid) <= work[rid])
}
