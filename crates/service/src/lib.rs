// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # service
//!
//! The external surface of the allocator: three operations over one shared,
//! mutex-guarded `AllocationController`.
//!
//! | Operation        | Input                 | Output                 |
//! |------------------|-----------------------|------------------------|
//! | `initialize`     | `InitializeRequest`   | `InitializeResponse`   |
//! | `request`        | `AllocationRequest`   | `AllocationResponse`   |
//! | `graph_snapshot` | none                  | `GraphResponse`        |
//!
//! Denials are ordinary responses carrying a reason; only malformed input,
//! bad configuration and a poisoned lock surface as `ServiceError`.
//!
//! A `Scenario` bundles a snapshot with a scripted request list and can be
//! loaded from TOML, JSON or the comma-separated text form.

mod config;
mod error;
mod scenario;
mod service;
mod wire;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use scenario::{Scenario, ScenarioOutcome};
pub use service::BankerService;
pub use wire::{
    AllocationRequest, AllocationResponse, GraphResponse, InitializeRequest, InitializeResponse,
};
