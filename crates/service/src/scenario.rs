// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scenario files: an initial snapshot plus a scripted list of requests.
//!
//! # TOML Format
//! ```toml
//! total_resources = [10, 5, 7]
//! allocation = [[0, 1, 0], [2, 0, 0], [3, 0, 2], [2, 1, 1], [0, 0, 2]]
//! max_need = [[7, 5, 3], [3, 2, 2], [9, 0, 2], [2, 2, 2], [4, 3, 3]]
//!
//! [[requests]]
//! process = 1
//! request = [1, 0, 2]
//! ```
//!
//! The same fields are accepted as JSON when the file ends in `.json`.

use crate::wire::{AllocationRequest, AllocationResponse, InitializeRequest, InitializeResponse};
use crate::{BankerService, ServiceError};
use resource_model::{parse_matrix, parse_vector, Units};
use std::path::Path;

/// A snapshot and the requests to replay against it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    pub total_resources: Vec<Units>,
    pub allocation: Vec<Vec<Units>>,
    pub max_need: Vec<Vec<Units>>,
    #[serde(default)]
    pub requests: Vec<AllocationRequest>,
}

/// What happened when a scenario was replayed.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScenarioOutcome {
    pub initialize: InitializeResponse,
    pub responses: Vec<(AllocationRequest, AllocationResponse)>,
}

impl ScenarioOutcome {
    /// Number of granted requests.
    pub fn granted(&self) -> usize {
        self.responses.iter().filter(|(_, r)| r.granted).count()
    }

    /// Number of denied requests.
    pub fn denied(&self) -> usize {
        self.responses.len() - self.granted()
    }
}

impl Scenario {
    /// Loads a scenario, choosing the format from the file extension.
    ///
    /// `.json` files are parsed as JSON; anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self, ServiceError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::Scenario(format!("cannot read scenario '{}': {e}", path.display()))
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    /// Parses a scenario from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ServiceError> {
        toml::from_str(toml_str)
            .map_err(|e| ServiceError::Scenario(format!("TOML parse error: {e}")))
    }

    /// Parses a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(json)
            .map_err(|e| ServiceError::Scenario(format!("JSON parse error: {e}")))
    }

    /// Builds a scenario from the comma-separated text form.
    ///
    /// Matrix rows are separated by newlines or `;`.
    pub fn from_text(total: &str, allocation: &str, max_need: &str) -> Result<Self, ServiceError> {
        let scenario_err = |what: &str, e: resource_model::StateError| {
            ServiceError::Scenario(format!("invalid {what}: {e}"))
        };
        Ok(Self {
            total_resources: parse_vector(total).map_err(|e| scenario_err("total", e))?,
            allocation: parse_matrix(allocation).map_err(|e| scenario_err("allocation", e))?,
            max_need: parse_matrix(max_need).map_err(|e| scenario_err("max need", e))?,
            requests: Vec::new(),
        })
    }

    /// The initialize payload for this scenario.
    pub fn initialize_request(&self) -> InitializeRequest {
        InitializeRequest {
            total_resources: self.total_resources.clone(),
            allocation: self.allocation.clone(),
            max_need: self.max_need.clone(),
        }
    }

    /// Initializes `service` and replays every request in order.
    ///
    /// Stops at the first malformed request; denials are recorded and
    /// replay continues.
    pub fn apply(&self, service: &BankerService) -> Result<ScenarioOutcome, ServiceError> {
        let initialize = service.initialize(self.initialize_request())?;
        let mut responses = Vec::with_capacity(self.requests.len());
        for req in &self.requests {
            let resp = service.request_allocation(req.clone())?;
            tracing::debug!("P{} {:?}: {}", req.process, req.request, resp.message);
            responses.push((req.clone(), resp));
        }
        Ok(ScenarioOutcome {
            initialize,
            responses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceConfig;

    const TEXTBOOK_TOML: &str = r#"
total_resources = [10, 5, 7]
allocation = [[0, 1, 0], [2, 0, 0], [3, 0, 2], [2, 1, 1], [0, 0, 2]]
max_need = [[7, 5, 3], [3, 2, 2], [9, 0, 2], [2, 2, 2], [4, 3, 3]]

[[requests]]
process = 1
request = [1, 0, 2]

[[requests]]
process = 0
request = [0, 2, 0]
"#;

    #[test]
    fn test_from_toml() {
        let s = Scenario::from_toml(TEXTBOOK_TOML).unwrap();
        assert_eq!(s.total_resources, vec![10, 5, 7]);
        assert_eq!(s.allocation.len(), 5);
        assert_eq!(s.requests.len(), 2);
        assert_eq!(s.requests[0].process, 1);
    }

    #[test]
    fn test_from_json_without_requests() {
        let s = Scenario::from_json(
            r#"{"total_resources": [3], "allocation": [[1]], "max_need": [[2]]}"#,
        )
        .unwrap();
        assert!(s.requests.is_empty());
    }

    #[test]
    fn test_from_text() {
        let s = Scenario::from_text("10,5,7", "0,1,0;2,0,0", "7,5,3\n3,2,2").unwrap();
        assert_eq!(s.total_resources, vec![10, 5, 7]);
        assert_eq!(s.allocation, vec![vec![0, 1, 0], vec![2, 0, 0]]);
        assert_eq!(s.max_need, vec![vec![7, 5, 3], vec![3, 2, 2]]);
    }

    #[test]
    fn test_from_text_bad_number() {
        let err = Scenario::from_text("10,x,7", "0,1,0", "7,5,3").unwrap_err();
        assert!(matches!(err, ServiceError::Scenario(_)));
        assert!(err.to_string().contains("total"));
    }

    #[test]
    fn test_apply() {
        let service = BankerService::new(ServiceConfig::default()).unwrap();
        let outcome = Scenario::from_toml(TEXTBOOK_TOML)
            .unwrap()
            .apply(&service)
            .unwrap();
        assert_eq!(outcome.initialize.available, vec![3, 3, 2]);
        assert_eq!(outcome.granted(), 1);
        assert_eq!(outcome.denied(), 1);
        assert_eq!(outcome.responses[1].1.status_code(), 403);
        assert_eq!(service.available().unwrap(), vec![2, 3, 0]);
    }

    #[test]
    fn test_apply_stops_on_malformed() {
        let mut scenario = Scenario::from_toml(TEXTBOOK_TOML).unwrap();
        scenario.requests.insert(
            0,
            AllocationRequest {
                process: 9,
                request: vec![1, 0, 0],
            },
        );
        let service = BankerService::new(ServiceConfig::default()).unwrap();
        let err = scenario.apply(&service).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_missing_file() {
        let err = Scenario::from_file(Path::new("/nonexistent/scenario.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read scenario"));
    }
}
