// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests: invariants that must hold after any sequence of requests.

use allocator::{AllocationController, Decision, NeedPolicy};
use proptest::prelude::*;
use resource_model::Units;

/// A well-formed snapshot: allocation, extra declared need per cell, and
/// spare capacity per resource on top of the column sums.
#[derive(Debug, Clone)]
struct Snapshot {
    total: Vec<Units>,
    allocation: Vec<Vec<Units>>,
    max_need: Vec<Vec<Units>>,
}

fn snapshot() -> impl Strategy<Value = Snapshot> {
    (1usize..=5, 1usize..=4).prop_flat_map(|(processes, resources)| {
        (
            prop::collection::vec(prop::collection::vec(0u32..4, resources), processes),
            prop::collection::vec(prop::collection::vec(0u32..4, resources), processes),
            prop::collection::vec(0u32..6, resources),
        )
            .prop_map(move |(allocation, extra, spare)| {
                let total = (0..resources)
                    .map(|rid| allocation.iter().map(|row| row[rid]).sum::<Units>() + spare[rid])
                    .collect();
                let max_need = allocation
                    .iter()
                    .zip(&extra)
                    .map(|(held, more)| held.iter().zip(more).map(|(a, b)| a + b).collect())
                    .collect();
                Snapshot {
                    total,
                    allocation,
                    max_need,
                }
            })
    })
}

fn requests(max_processes: usize, resources: usize) -> impl Strategy<Value = Vec<(usize, Vec<Units>)>> {
    prop::collection::vec(
        (0..max_processes, prop::collection::vec(0u32..4, resources)),
        1..20,
    )
}

fn scenario() -> impl Strategy<Value = (Snapshot, Vec<(usize, Vec<Units>)>, bool)> {
    snapshot().prop_flat_map(|s| {
        let processes = s.allocation.len();
        let resources = s.total.len();
        (Just(s), requests(processes, resources), any::<bool>())
    })
}

proptest! {
    #[test]
    fn conservation_and_rollback_hold((snap, reqs, lenient) in scenario()) {
        let policy = if lenient { NeedPolicy::Lenient } else { NeedPolicy::Strict };
        let mut controller = AllocationController::new(policy);
        controller
            .initialize(snap.total.clone(), snap.allocation.clone(), snap.max_need.clone())
            .unwrap();
        prop_assert!(controller.state().is_conserved());

        for (pid, request) in reqs {
            let before = controller.state().clone();
            let decision = controller.request(pid, &request).unwrap();

            prop_assert!(controller.state().is_conserved());
            prop_assert_eq!(controller.state().total(), snap.total.as_slice());
            prop_assert_eq!(controller.state().max_need_matrix(), snap.max_need.as_slice());

            match decision {
                Decision::Granted { available } => {
                    prop_assert_eq!(available.as_slice(), controller.state().available());
                    prop_assert!(safety_checker::is_safe(controller.state()));
                }
                Decision::Denied(denial) => {
                    prop_assert_eq!(controller.state(), &before);
                    // Asking again gives the same answer.
                    let again = controller.request(pid, &request).unwrap();
                    prop_assert_eq!(again, Decision::Denied(denial));
                    prop_assert_eq!(controller.state(), &before);
                }
            }
        }
    }

    #[test]
    fn strict_policy_never_exceeds_max_need((snap, reqs, _) in scenario()) {
        let mut controller = AllocationController::new(NeedPolicy::Strict);
        controller
            .initialize(snap.total.clone(), snap.allocation.clone(), snap.max_need.clone())
            .unwrap();

        for (pid, request) in reqs {
            controller.request(pid, &request).unwrap();
            let state = controller.state();
            for p in 0..state.num_processes() {
                for (held, max) in state.allocation(p).iter().zip(state.max_need(p)) {
                    prop_assert!(held <= max);
                }
            }
        }
    }
}
