// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The resource snapshot: capacity, holdings, declared maxima and availability.
//!
//! ```text
//!            R resource types
//!          ┌───────────────┐
//! total    │ 10   5   7    │
//! available│  3   3   2    │  = total - Σ allocation (column sums)
//!          └───────────────┘
//!            ┌───────────┐   ┌───────────┐
//! P procs    │ allocation│   │ max_need  │   need = max_need - allocation
//!            └───────────┘   └───────────┘
//! ```
//!
//! `need` is never stored; it is derived on every read so it cannot drift
//! away from the two matrices it comes from.

use crate::StateError;
use std::fmt;

/// Units of a single resource type.
pub type Units = u32;

/// Direction in which [`ResourceState::apply_delta`] moves units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Units move from `available` to the process (tentative grant).
    Acquire,
    /// Units move from the process back to `available` (rollback).
    Release,
}

/// A complete point-in-time resource snapshot.
///
/// Built wholesale by [`ResourceState::new`]; afterwards only
/// [`ResourceState::apply_delta`] mutates it, and it always moves
/// `allocation` and `available` together so that
/// `available[j] + Σ allocation[i][j] == total[j]` holds between calls.
///
/// # Example
/// ```
/// use resource_model::ResourceState;
///
/// let state = ResourceState::new(
///     vec![10, 5, 7],
///     vec![vec![0, 1, 0], vec![2, 0, 0]],
///     vec![vec![7, 5, 3], vec![3, 2, 2]],
/// ).unwrap();
/// assert_eq!(state.available(), &[8, 4, 7]);
/// assert_eq!(state.need(1), vec![1, 2, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ResourceState {
    total: Vec<Units>,
    allocation: Vec<Vec<Units>>,
    max_need: Vec<Vec<Units>>,
    available: Vec<Units>,
}

impl ResourceState {
    /// Builds a snapshot, validating shapes and the max-need invariant.
    ///
    /// # Checks
    /// - `allocation` and `max_need` have the same number of rows.
    /// - Every row has exactly `total.len()` columns.
    /// - `max_need[i][j] >= allocation[i][j]`.
    /// - No resource is allocated beyond its total capacity.
    pub fn new(
        total: Vec<Units>,
        allocation: Vec<Vec<Units>>,
        max_need: Vec<Vec<Units>>,
    ) -> Result<Self, StateError> {
        if allocation.len() != max_need.len() {
            return Err(StateError::ProcessCountMismatch {
                allocation: allocation.len(),
                max_need: max_need.len(),
            });
        }

        let num_resources = total.len();
        check_columns("allocation", &allocation, num_resources)?;
        check_columns("max_need", &max_need, num_resources)?;

        for (process, (held, declared)) in allocation.iter().zip(&max_need).enumerate() {
            for (resource, (&allocated, &max)) in held.iter().zip(declared).enumerate() {
                if max < allocated {
                    return Err(StateError::MaxNeedBelowAllocation {
                        process,
                        resource,
                        allocated,
                        max_need: max,
                    });
                }
            }
        }

        let mut available = Vec::with_capacity(num_resources);
        for (resource, &capacity) in total.iter().enumerate() {
            // Summed as u64 so a pathological matrix cannot wrap before the check.
            let allocated: u64 = allocation.iter().map(|row| u64::from(row[resource])).sum();
            if allocated > u64::from(capacity) {
                return Err(StateError::OverCommitted {
                    resource,
                    allocated,
                    total: capacity,
                });
            }
            available.push(capacity - allocated as Units);
        }

        Ok(Self {
            total,
            allocation,
            max_need,
            available,
        })
    }

    /// Returns the snapshot that exists before any initialization:
    /// no processes and no resource types.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of processes (`P`).
    pub fn num_processes(&self) -> usize {
        self.allocation.len()
    }

    /// Returns the number of resource types (`R`).
    pub fn num_resources(&self) -> usize {
        self.total.len()
    }

    /// Returns `true` if the snapshot tracks no processes and no resources.
    pub fn is_empty(&self) -> bool {
        self.total.is_empty() && self.allocation.is_empty()
    }

    /// System-wide capacity per resource type.
    pub fn total(&self) -> &[Units] {
        &self.total
    }

    /// Units currently free per resource type.
    pub fn available(&self) -> &[Units] {
        &self.available
    }

    /// Units of each resource held by `pid`.
    ///
    /// # Panics
    /// Panics if `pid` is out of range; use [`Self::validate_request`] first
    /// when the index comes from outside.
    pub fn allocation(&self, pid: usize) -> &[Units] {
        &self.allocation[pid]
    }

    /// Declared maximum need of `pid`.
    ///
    /// # Panics
    /// Panics if `pid` is out of range.
    pub fn max_need(&self, pid: usize) -> &[Units] {
        &self.max_need[pid]
    }

    /// The full allocation matrix, one row per process.
    pub fn allocation_matrix(&self) -> &[Vec<Units>] {
        &self.allocation
    }

    /// The full max-need matrix, one row per process.
    pub fn max_need_matrix(&self) -> &[Vec<Units>] {
        &self.max_need
    }

    /// Remaining need of `pid` for resource `rid`.
    ///
    /// Saturates at zero: a process that was allowed to borrow beyond its
    /// declared maximum has no further need rather than a negative one.
    pub fn need_of(&self, pid: usize, rid: usize) -> Units {
        self.max_need[pid][rid].saturating_sub(self.allocation[pid][rid])
    }

    /// Remaining need vector of `pid`.
    pub fn need(&self, pid: usize) -> Vec<Units> {
        (0..self.num_resources())
            .map(|rid| self.need_of(pid, rid))
            .collect()
    }

    /// Checks that `pid` exists and `request` has one entry per resource type.
    pub fn validate_request(&self, pid: usize, request: &[Units]) -> Result<(), StateError> {
        if pid >= self.num_processes() {
            return Err(StateError::ProcessOutOfRange {
                process: pid,
                num_processes: self.num_processes(),
            });
        }
        if request.len() != self.num_resources() {
            return Err(StateError::RequestLengthMismatch {
                expected: self.num_resources(),
                actual: request.len(),
            });
        }
        Ok(())
    }

    /// Moves `delta` units between `available` and the allocation row of `pid`.
    ///
    /// Callers are expected to have validated the request already. The
    /// arithmetic is still checked: the new row and the new available vector
    /// are computed first and swapped in only if every entry fits, so a
    /// rejected delta leaves the snapshot untouched.
    pub fn apply_delta(
        &mut self,
        pid: usize,
        delta: &[Units],
        direction: Direction,
    ) -> Result<(), StateError> {
        self.validate_request(pid, delta)?;

        let mut row = self.allocation[pid].clone();
        let mut available = self.available.clone();

        for (rid, &units) in delta.iter().enumerate() {
            let moved = match direction {
                Direction::Acquire => row[rid]
                    .checked_add(units)
                    .zip(available[rid].checked_sub(units)),
                Direction::Release => row[rid]
                    .checked_sub(units)
                    .zip(available[rid].checked_add(units)),
            };
            let (held, free) = moved.ok_or(StateError::DeltaOutOfRange {
                process: pid,
                resource: rid,
            })?;
            row[rid] = held;
            available[rid] = free;
        }

        self.allocation[pid] = row;
        self.available = available;
        Ok(())
    }

    /// Returns `true` if `available[j] + Σ allocation[i][j] == total[j]` for every `j`.
    pub fn is_conserved(&self) -> bool {
        self.total.iter().enumerate().all(|(rid, &capacity)| {
            let held: u64 = self
                .allocation
                .iter()
                .map(|row| u64::from(row[rid]))
                .sum();
            held + u64::from(self.available[rid]) == u64::from(capacity)
        })
    }

    /// Returns a one-line summary suitable for logging.
    pub fn summary(&self) -> String {
        format!(
            "{} processes, {} resource types, total {:?}, available {:?}",
            self.num_processes(),
            self.num_resources(),
            self.total,
            self.available,
        )
    }
}

fn check_columns(
    matrix: &'static str,
    rows: &[Vec<Units>],
    expected: usize,
) -> Result<(), StateError> {
    for (process, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(StateError::DimensionMismatch {
                matrix,
                process,
                expected,
                actual: row.len(),
            });
        }
    }
    Ok(())
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total:     {:?}", self.total)?;
        writeln!(f, "available: {:?}", self.available)?;
        for pid in 0..self.num_processes() {
            writeln!(
                f,
                "P{pid}: alloc {:?} max {:?} need {:?}",
                self.allocation[pid],
                self.max_need[pid],
                self.need(pid),
            )?;
        }
        Ok(())
    }
}
