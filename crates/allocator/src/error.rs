// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the allocation controller.

/// Errors returned by [`crate::AllocationController`].
///
/// Denied requests are *not* errors: they come back as
/// [`crate::Decision::Denied`]. Only malformed input ends up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocatorError {
    /// The input does not fit the current snapshot's shape.
    #[error("malformed input: {0}")]
    Malformed(#[from] resource_model::StateError),
}
