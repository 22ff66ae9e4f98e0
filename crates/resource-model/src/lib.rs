// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # resource-model
//!
//! The data model shared by every other crate in the workspace: a fixed set
//! of processes competing for a fixed set of reusable resource types.
//!
//! # Key Components
//!
//! - [`ResourceState`]: the snapshot of `total`, `allocation`, `max_need`
//!   and the derived `available` vector. `need` is computed on demand.
//! - [`Direction`]: which way [`ResourceState::apply_delta`] moves units.
//! - [`parse_vector`] / [`parse_matrix`]: the comma-separated text form
//!   (`"10,5,7"`, `"0,1,0;2,0,0"`).
//! - [`StateError`]: malformed-input errors.
//!
//! # Invariants
//!
//! After construction and after every successful delta:
//! - `max_need[i][j] >= allocation[i][j]` holds as initialized,
//! - `available[j] + Σ_i allocation[i][j] == total[j]`,
//! - `available[j] >= 0` (enforced by the unsigned type and checked arithmetic).

mod error;
mod parse;
mod state;

pub use error::StateError;
pub use parse::{parse_matrix, parse_vector};
pub use state::{Direction, ResourceState, Units};
