// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # allocator
//!
//! Deadlock avoidance for a fixed set of processes and resource types.
//! Every request is granted tentatively, checked for safety with the
//! Banker's algorithm, and either committed or rolled back.
//!
//! # Key Components
//!
//! - [`AllocationController`]: owns the [`resource_model::ResourceState`]
//!   and runs the request protocol.
//! - [`Decision`] / [`Denial`]: the outcome of a well-formed request.
//! - [`NeedPolicy`]: whether requests beyond a process's remaining declared
//!   need are denied outright (`Strict`) or left to the safety check
//!   (`Lenient`).
//! - [`RequestStats`]: cumulative counters for diagnostics.
//! - [`AllocatorError`]: malformed input.
//!
//! # Ownership Model
//!
//! The controller is the only writer of the snapshot. It takes `&mut self`
//! for every mutating call, so sharing it across threads requires an
//! external lock held for the whole request (see the `service` crate).

mod controller;
mod decision;
mod error;
mod policy;
mod stats;

pub use controller::AllocationController;
pub use decision::{Decision, Denial};
pub use error::AllocatorError;
pub use policy::NeedPolicy;
pub use stats::RequestStats;
