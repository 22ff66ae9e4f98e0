// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The request-evaluation protocol.
//!
//! ```text
//! request(pid, req)
//!     │ 1. pid in range, len(req) == R        ──► Err(Malformed)
//!     │ 2. req <= available                   ──► Denied(InsufficientResources)
//!     │ 3. req <= need[pid]   (Strict only)   ──► Denied(ExceedsMaxNeed)
//!     ▼
//! apply_delta(+req)            tentative grant
//!     │
//!     ▼
//! SafetyCheck::check ── safe ──► Granted(available)      commit
//!     │
//!   unsafe
//!     ▼
//! apply_delta(-req) ──► Denied(UnsafeState)               rollback
//! ```
//!
//! Every path returns with the snapshot either committed-and-safe or
//! exactly as it was before the call.

use crate::{AllocatorError, Decision, Denial, NeedPolicy, RequestStats};
use resource_model::{Direction, ResourceState, Units};
use safety_checker::{BankersAlgorithm, SafetyCheck, SafetyReport};

/// Owns the resource snapshot and is its only writer.
///
/// # Example
/// ```
/// use allocator::{AllocationController, NeedPolicy};
///
/// let mut controller = AllocationController::new(NeedPolicy::Strict);
/// let report = controller
///     .initialize(
///         vec![10, 5, 7],
///         vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2], vec![2, 1, 1], vec![0, 0, 2]],
///         vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2], vec![2, 2, 2], vec![4, 3, 3]],
///     )
///     .unwrap();
/// assert!(report.safe);
///
/// let decision = controller.request(1, &[1, 0, 2]).unwrap();
/// assert!(decision.is_granted());
/// assert_eq!(controller.state().available(), &[2, 3, 0]);
/// ```
pub struct AllocationController {
    state: ResourceState,
    policy: NeedPolicy,
    checker: Box<dyn SafetyCheck>,
    stats: RequestStats,
}

impl AllocationController {
    /// Creates a controller over the empty snapshot, using the Banker's check.
    pub fn new(policy: NeedPolicy) -> Self {
        Self::with_checker(policy, Box::new(BankersAlgorithm::new()))
    }

    /// Creates a controller over the empty snapshot with a custom safety oracle.
    pub fn with_checker(policy: NeedPolicy, checker: Box<dyn SafetyCheck>) -> Self {
        Self {
            state: ResourceState::empty(),
            policy,
            checker,
            stats: RequestStats::default(),
        }
    }

    /// Replaces the whole snapshot and returns its safety report.
    ///
    /// On malformed input the previous snapshot is kept unchanged.
    pub fn initialize(
        &mut self,
        total: Vec<Units>,
        allocation: Vec<Vec<Units>>,
        max_need: Vec<Vec<Units>>,
    ) -> Result<SafetyReport, AllocatorError> {
        let state = ResourceState::new(total, allocation, max_need)?;
        self.state = state;
        self.stats.record_initialize();

        let report = self.checker.check(&self.state);
        tracing::info!("snapshot initialized: {}", self.state.summary());
        if report.safe {
            tracing::info!("initial state: {}", report.summary());
        } else {
            tracing::warn!("initial state: {}", report.summary());
        }
        Ok(report)
    }

    /// Evaluates a request from process `pid` for `request` units.
    ///
    /// Malformed input is an `Err`; a refusal is `Ok(Decision::Denied(..))`.
    pub fn request(&mut self, pid: usize, request: &[Units]) -> Result<Decision, AllocatorError> {
        if let Err(e) = self.state.validate_request(pid, request) {
            self.stats.record_malformed();
            return Err(e.into());
        }

        if let Some(denial) = self.check_available(request) {
            return Ok(self.deny(pid, denial));
        }

        match self.policy {
            NeedPolicy::Strict => {
                if let Some(denial) = self.check_need(pid, request) {
                    return Ok(self.deny(pid, denial));
                }
            }
            NeedPolicy::Lenient => {
                if self.check_need(pid, request).is_some() {
                    tracing::warn!(
                        "P{pid} requests {request:?} beyond its remaining need {:?}; evaluating anyway",
                        self.state.need(pid),
                    );
                }
            }
        }

        if let Err(e) = self.state.apply_delta(pid, request, Direction::Acquire) {
            self.stats.record_malformed();
            return Err(e.into());
        }

        self.stats.record_safety_check();
        let report = self.checker.check(&self.state);

        if report.safe {
            self.stats.record_granted();
            tracing::info!(
                "granted P{pid} {request:?}, available now {:?}",
                self.state.available(),
            );
            return Ok(Decision::Granted {
                available: self.state.available().to_vec(),
            });
        }

        // Undo exactly what was applied above; this cannot fail.
        self.state.apply_delta(pid, request, Direction::Release)?;
        Ok(self.deny(pid, Denial::UnsafeState))
    }

    /// The current snapshot.
    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    /// Safety report for the current snapshot.
    ///
    /// Read-only; not counted in [`RequestStats::safety_checks`].
    pub fn safety_report(&self) -> SafetyReport {
        self.checker.check(&self.state)
    }

    /// The need policy in force.
    pub fn policy(&self) -> NeedPolicy {
        self.policy
    }

    /// Changes the need policy for subsequent requests.
    pub fn set_policy(&mut self, policy: NeedPolicy) {
        self.policy = policy;
    }

    /// Name of the safety oracle in use.
    pub fn checker_name(&self) -> &str {
        self.checker.name()
    }

    /// Cumulative request statistics.
    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    fn check_available(&self, request: &[Units]) -> Option<Denial> {
        request
            .iter()
            .zip(self.state.available())
            .enumerate()
            .find(|(_, (requested, available))| requested > available)
            .map(|(resource, (&requested, &available))| Denial::InsufficientResources {
                resource,
                requested,
                available,
            })
    }

    fn check_need(&self, pid: usize, request: &[Units]) -> Option<Denial> {
        request.iter().enumerate().find_map(|(resource, &requested)| {
            let need = self.state.need_of(pid, resource);
            (requested > need).then_some(Denial::ExceedsMaxNeed {
                resource,
                requested,
                need,
            })
        })
    }

    fn deny(&mut self, pid: usize, denial: Denial) -> Decision {
        self.stats.record_denied(&denial);
        tracing::info!("denied P{pid}: {} ({})", denial.reason(), denial.detail());
        Decision::Denied(denial)
    }
}

impl Default for AllocationController {
    fn default() -> Self {
        Self::new(NeedPolicy::default())
    }
}

impl std::fmt::Debug for AllocationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllocationController")
            .field("policy", &self.policy)
            .field("checker", &self.checker.name())
            .field("processes", &self.state.num_processes())
            .field("resources", &self.state.num_resources())
            .field("available", &self.state.available())
            .finish()
    }
}
