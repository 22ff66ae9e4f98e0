// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The verdict produced by a safety check.

/// Outcome of simulating process completion on a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SafetyReport {
    /// `true` if every process can run to completion.
    pub safe: bool,
    /// Processes in the order the simulation let them finish.
    ///
    /// When `safe` is `true` this is a complete safe sequence.
    pub sequence: Vec<usize>,
    /// Processes that could never finish, in ascending order. Empty when safe.
    pub blocked: Vec<usize>,
}

impl SafetyReport {
    /// A report for a snapshot with no processes, which is trivially safe.
    pub fn trivially_safe() -> Self {
        Self {
            safe: true,
            sequence: Vec::new(),
            blocked: Vec::new(),
        }
    }

    /// Renders the completion order as `P1 -> P3 -> P4`.
    pub fn sequence_label(&self) -> String {
        self.sequence
            .iter()
            .map(|pid| format!("P{pid}"))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Returns a one-line summary suitable for logging or CLI display.
    pub fn summary(&self) -> String {
        if self.safe {
            if self.sequence.is_empty() {
                "SAFE (no processes)".to_string()
            } else {
                format!("SAFE, sequence {}", self.sequence_label())
            }
        } else {
            let blocked = self
                .blocked
                .iter()
                .map(|pid| format!("P{pid}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "UNSAFE, {} of {} processes can finish, blocked: {blocked}",
                self.sequence.len(),
                self.sequence.len() + self.blocked.len(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_label() {
        let r = SafetyReport {
            safe: true,
            sequence: vec![1, 3, 4, 0, 2],
            blocked: vec![],
        };
        assert_eq!(r.sequence_label(), "P1 -> P3 -> P4 -> P0 -> P2");
        assert_eq!(r.summary(), "SAFE, sequence P1 -> P3 -> P4 -> P0 -> P2");
    }

    #[test]
    fn test_unsafe_summary() {
        let r = SafetyReport {
            safe: false,
            sequence: vec![2],
            blocked: vec![0, 1],
        };
        assert_eq!(r.summary(), "UNSAFE, 1 of 3 processes can finish, blocked: P0, P1");
    }

    #[test]
    fn test_trivially_safe() {
        let r = SafetyReport::trivially_safe();
        assert!(r.safe);
        assert_eq!(r.summary(), "SAFE (no processes)");
    }
}
