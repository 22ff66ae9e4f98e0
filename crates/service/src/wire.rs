// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Request and response shapes for the three external operations.
//!
//! Field names match the JSON the allocator has always spoken:
//!
//! ```json
//! // initialize
//! {"total_resources": [10, 5, 7], "allocation": [[0, 1, 0]], "max_need": [[7, 5, 3]]}
//! {"message": "System initialized", "available": [10, 4, 7], "safe": true, "safe_sequence": [0]}
//!
//! // allocate
//! {"process": 0, "request": [1, 0, 0]}
//! {"granted": true, "message": "Request granted", "available": [9, 4, 7]}
//! {"granted": false, "message": "Request denied (insufficient resources)", "reason": "insufficient resources", ...}
//!
//! // rag
//! {"nodes": ["P0", "R0", "R1", "R2"], "edges": [["P0", "R0"], ["R1", "P0"]]}
//! ```

use allocation_graph::{NodeId, ResourceGraph};
use allocator::{Decision, Denial};
use resource_model::Units;
use safety_checker::SafetyReport;

/// Input of the initialize operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InitializeRequest {
    pub total_resources: Vec<Units>,
    pub allocation: Vec<Vec<Units>>,
    pub max_need: Vec<Vec<Units>>,
}

/// Output of the initialize operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InitializeResponse {
    pub message: String,
    pub available: Vec<Units>,
    pub safe: bool,
    /// Present when the state is safe and sequence reporting is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_sequence: Option<Vec<usize>>,
}

impl InitializeResponse {
    pub(crate) fn new(available: Vec<Units>, report: SafetyReport, with_sequence: bool) -> Self {
        let safe_sequence = (with_sequence && report.safe).then_some(report.sequence);
        Self {
            message: "System initialized".to_string(),
            available,
            safe: report.safe,
            safe_sequence,
        }
    }
}

/// Input of the request operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AllocationRequest {
    pub process: usize,
    pub request: Vec<Units>,
}

/// Output of the request operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AllocationResponse {
    pub granted: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<Vec<Units>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial: Option<Denial>,
}

impl AllocationResponse {
    /// Status code the HTTP transport historically used for this outcome.
    ///
    /// `200` granted, `400` for a request the resources or declared need
    /// cannot cover, `403` for a request refused as unsafe.
    pub fn status_code(&self) -> u16 {
        match &self.denial {
            None => 200,
            Some(Denial::UnsafeState) => 403,
            Some(Denial::InsufficientResources { .. } | Denial::ExceedsMaxNeed { .. }) => 400,
        }
    }
}

impl From<Decision> for AllocationResponse {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Granted { available } => Self {
                granted: true,
                message: "Request granted".to_string(),
                available: Some(available),
                reason: None,
                denial: None,
            },
            Decision::Denied(denial) => {
                let reason = denial.reason();
                Self {
                    granted: false,
                    message: format!("Request denied ({reason})"),
                    available: None,
                    reason: Some(reason),
                    denial: Some(denial),
                }
            }
        }
    }
}

/// Output of the graph-snapshot operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GraphResponse {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl From<&ResourceGraph> for GraphResponse {
    fn from(graph: &ResourceGraph) -> Self {
        Self {
            nodes: graph.node_ids(),
            edges: graph.edge_pairs(),
        }
    }
}
