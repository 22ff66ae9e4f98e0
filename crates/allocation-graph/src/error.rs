// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for graph identifiers.

/// Errors that can occur when working with the allocation graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node label is neither `P<n>` nor `R<n>`.
    #[error("invalid node id '{0}': expected 'P<n>' or 'R<n>'")]
    InvalidNodeId(String),
}
