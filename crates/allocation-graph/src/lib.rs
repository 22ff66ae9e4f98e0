// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # allocation-graph
//!
//! Derives a resource-allocation graph (RAG) from a
//! [`resource_model::ResourceState`] for visualization.
//!
//! - One node per process (`P{i}`) and per resource type (`R{j}`).
//! - Allocation edge `R_j -> P_i` iff `allocation[i][j] > 0`.
//! - Request edge `P_i -> R_j` iff `need[i][j] > 0`.
//!
//! The graph is purely descriptive: no allocation decision reads it.
//!
//! # Example
//! ```
//! use allocation_graph::GraphBuilder;
//! use resource_model::ResourceState;
//!
//! let state = ResourceState::new(
//!     vec![10, 5, 7],
//!     vec![vec![0, 1, 0], vec![2, 0, 0]],
//!     vec![vec![7, 5, 3], vec![3, 2, 2]],
//! ).unwrap();
//!
//! let graph = GraphBuilder::build(&state);
//! println!("{}", graph.summary());
//! println!("{}", graph.to_dot());
//! ```

mod error;
mod graph;
mod node;

pub use error::GraphError;
pub use graph::{GraphBuilder, ResourceGraph};
pub use node::{Edge, EdgeKind, Node, NodeId, NodeKind};
