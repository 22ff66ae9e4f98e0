// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # safety-checker
//!
//! Decides whether a [`ResourceState`] is *safe*: whether some ordering of
//! all processes exists in which each one can obtain its full declared
//! maximum, run, and release everything it holds.
//!
//! # Trait-Based Extensibility
//!
//! The allocation controller talks to a [`SafetyCheck`] trait object, so a
//! different oracle (or a test stub) can be plugged in without touching the
//! request protocol:
//!
//! ```ignore
//! struct AlwaysUnsafe;
//! impl SafetyCheck for AlwaysUnsafe {
//!     fn name(&self) -> &str { "always-unsafe" }
//!     fn check(&self, state: &ResourceState) -> SafetyReport { /* ... */ }
//! }
//! ```
//!
//! Checks are pure: they read the snapshot and never modify it.
//!
//! # Example
//! ```
//! use resource_model::ResourceState;
//!
//! let state = ResourceState::new(
//!     vec![10, 5, 7],
//!     vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2], vec![2, 1, 1], vec![0, 0, 2]],
//!     vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2], vec![2, 2, 2], vec![4, 3, 3]],
//! ).unwrap();
//!
//! let report = safety_checker::check(&state);
//! assert!(report.safe);
//! println!("{}", report.summary());
//! ```

mod bankers;
mod report;

pub use bankers::BankersAlgorithm;
pub use report::SafetyReport;

use resource_model::ResourceState;

/// A safety oracle over resource snapshots.
pub trait SafetyCheck: Send + Sync {
    /// Human-readable name of this check.
    fn name(&self) -> &str;

    /// Simulates completion of every process and reports the verdict.
    fn check(&self, state: &ResourceState) -> SafetyReport;
}

/// Runs the Banker's safety check on `state`.
pub fn check(state: &ResourceState) -> SafetyReport {
    BankersAlgorithm::new().check(state)
}

/// Returns only the verdict of the Banker's safety check.
pub fn is_safe(state: &ResourceState) -> bool {
    check(state).safe
}
