// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the service facade.

/// Errors that can occur when driving the allocator through the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The allocator rejected malformed input.
    #[error("allocator error: {0}")]
    Allocator(#[from] allocator::AllocatorError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A scenario file could not be read or parsed.
    #[error("scenario error: {0}")]
    Scenario(String),

    /// A previous holder of the state lock panicked.
    #[error("allocator state lock is poisoned")]
    StatePoisoned,
}

impl ServiceError {
    /// Returns `true` if the error was caused by malformed caller input.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Allocator(allocator::AllocatorError::Malformed(_)))
    }
}
