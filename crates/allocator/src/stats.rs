// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Request statistics for diagnostics.
//!
//! [`RequestStats`] counts how the controller has answered requests:
//! grants, each kind of denial, malformed input, and how many safety
//! simulations were run. Counters survive re-initialization.

use crate::Denial;

/// Cumulative statistics about allocation requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct RequestStats {
    /// Number of snapshots installed via `initialize`.
    pub initializations: u64,
    /// Total number of requests seen, including malformed ones.
    pub total_requests: u64,
    /// Requests that were committed.
    pub granted: u64,
    /// Requests denied because some resource had too few free units.
    pub denied_insufficient: u64,
    /// Requests denied because they exceeded the declared maximum need.
    pub denied_exceeds_need: u64,
    /// Requests denied because the grant would have been unsafe.
    pub denied_unsafe: u64,
    /// Requests rejected as malformed input.
    pub malformed: u64,
    /// Safety simulations run (one per initialize, one per tentative grant).
    pub safety_checks: u64,
}

impl RequestStats {
    /// Total denials of any kind.
    pub fn denied(&self) -> u64 {
        self.denied_insufficient + self.denied_exceeds_need + self.denied_unsafe
    }

    /// Fraction of well-formed requests that were granted, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` if no well-formed request has been made.
    pub fn grant_ratio(&self) -> f64 {
        let decided = self.granted + self.denied();
        if decided == 0 {
            return 0.0;
        }
        self.granted as f64 / decided as f64
    }

    pub(crate) fn record_initialize(&mut self) {
        self.initializations += 1;
        self.safety_checks += 1;
    }

    pub(crate) fn record_malformed(&mut self) {
        self.total_requests += 1;
        self.malformed += 1;
    }

    pub(crate) fn record_safety_check(&mut self) {
        self.safety_checks += 1;
    }

    pub(crate) fn record_granted(&mut self) {
        self.total_requests += 1;
        self.granted += 1;
    }

    pub(crate) fn record_denied(&mut self, denial: &Denial) {
        self.total_requests += 1;
        match denial {
            Denial::InsufficientResources { .. } => self.denied_insufficient += 1,
            Denial::ExceedsMaxNeed { .. } => self.denied_exceeds_need += 1,
            Denial::UnsafeState => self.denied_unsafe += 1,
        }
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Requests: {} total ({} granted, {} denied, {:.0}% grant rate), \
             denials: {} insufficient / {} over need / {} unsafe, \
             {} malformed, {} safety checks",
            self.total_requests,
            self.granted,
            self.denied(),
            self.grant_ratio() * 100.0,
            self.denied_insufficient,
            self.denied_exceeds_need,
            self.denied_unsafe,
            self.malformed,
            self.safety_checks,
        )
    }
}
