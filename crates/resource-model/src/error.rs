// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for snapshot construction and mutation.

/// Errors raised while building or mutating a [`crate::ResourceState`].
///
/// Every variant describes malformed input: the caller handed over vectors
/// of the wrong shape, an inconsistent matrix, or an index that does not
/// exist. None of them leave the snapshot modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A row has a different number of resource columns than `total`.
    #[error("{matrix} row for process {process} has {actual} columns, expected {expected}")]
    DimensionMismatch {
        matrix: &'static str,
        process: usize,
        expected: usize,
        actual: usize,
    },

    /// The allocation and max-need matrices disagree on the process count.
    #[error("allocation has {allocation} processes but max_need has {max_need}")]
    ProcessCountMismatch { allocation: usize, max_need: usize },

    /// A process holds more units than it declared it would ever need.
    #[error("process {process} holds {allocated} of resource {resource} but declared a max need of {max_need}")]
    MaxNeedBelowAllocation {
        process: usize,
        resource: usize,
        allocated: u32,
        max_need: u32,
    },

    /// The column sum of the allocation matrix exceeds the resource capacity.
    #[error("resource {resource} is over-committed: {allocated} allocated of {total} total")]
    OverCommitted {
        resource: usize,
        allocated: u64,
        total: u32,
    },

    /// The process index does not name a process in the snapshot.
    #[error("process {process} does not exist (snapshot has {num_processes} processes)")]
    ProcessOutOfRange { process: usize, num_processes: usize },

    /// A request or delta vector has the wrong number of resource entries.
    #[error("request has {actual} entries, expected {expected}")]
    RequestLengthMismatch { expected: usize, actual: usize },

    /// Applying a delta would overflow or drive a counter below zero.
    #[error("delta on resource {resource} for process {process} is out of range")]
    DeltaOutOfRange { process: usize, resource: usize },

    /// Text input could not be parsed into a vector or matrix.
    #[error("parse error: {0}")]
    Parse(String),
}

