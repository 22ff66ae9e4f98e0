// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The thread-safe facade over the allocation controller.
//!
//! # Thread Safety
//! `BankerService` is `Send + Sync` and can be shared via `Arc`. The
//! controller sits behind a single `Mutex`, held for the whole of each
//! operation: a request's validate → tentative grant → safety check →
//! commit/rollback runs as one critical section, and initialize cannot swap
//! the snapshot out from under an in-flight safety check.

use crate::wire::{
    AllocationRequest, AllocationResponse, GraphResponse, InitializeRequest, InitializeResponse,
};
use crate::{ServiceConfig, ServiceError};
use allocation_graph::{GraphBuilder, ResourceGraph};
use allocator::{AllocationController, NeedPolicy, RequestStats};
use resource_model::{ResourceState, Units};
use safety_checker::{SafetyCheck, SafetyReport};
use std::sync::{Mutex, MutexGuard};

/// Exposes initialize, request and graph-snapshot over a shared controller.
///
/// # Example
/// ```
/// use service::{AllocationRequest, BankerService, InitializeRequest, ServiceConfig};
///
/// let service = BankerService::new(ServiceConfig::default()).unwrap();
/// let init = service
///     .initialize(InitializeRequest {
///         total_resources: vec![10, 5, 7],
///         allocation: vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 2], vec![2, 1, 1], vec![0, 0, 2]],
///         max_need: vec![vec![7, 5, 3], vec![3, 2, 2], vec![9, 0, 2], vec![2, 2, 2], vec![4, 3, 3]],
///     })
///     .unwrap();
/// assert_eq!(init.available, vec![3, 3, 2]);
/// assert!(init.safe);
///
/// let resp = service
///     .request_allocation(AllocationRequest { process: 1, request: vec![1, 0, 2] })
///     .unwrap();
/// assert!(resp.granted);
/// assert_eq!(resp.available, Some(vec![2, 3, 0]));
/// ```
pub struct BankerService {
    config: ServiceConfig,
    controller: Mutex<AllocationController>,
}

impl BankerService {
    /// Creates a service over the empty snapshot.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let policy = config.parse_policy()?;
        Ok(Self::from_controller(config, AllocationController::new(policy)))
    }

    /// Creates a service with a custom safety oracle.
    pub fn with_checker(
        config: ServiceConfig,
        checker: Box<dyn SafetyCheck>,
    ) -> Result<Self, ServiceError> {
        let policy = config.parse_policy()?;
        Ok(Self::from_controller(
            config,
            AllocationController::with_checker(policy, checker),
        ))
    }

    fn from_controller(config: ServiceConfig, controller: AllocationController) -> Self {
        tracing::info!(
            "allocator service created: need policy '{}', checker '{}'",
            controller.policy(),
            controller.checker_name(),
        );
        Self {
            config,
            controller: Mutex::new(controller),
        }
    }

    /// Replaces the snapshot and reports the initial safety verdict.
    pub fn initialize(&self, req: InitializeRequest) -> Result<InitializeResponse, ServiceError> {
        let mut controller = self.lock()?;
        let report = controller.initialize(req.total_resources, req.allocation, req.max_need)?;
        let available = controller.state().available().to_vec();
        Ok(InitializeResponse::new(
            available,
            report,
            self.config.report_safe_sequence,
        ))
    }

    /// Evaluates one allocation request.
    pub fn request_allocation(
        &self,
        req: AllocationRequest,
    ) -> Result<AllocationResponse, ServiceError> {
        self.request(req.process, &req.request)
    }

    /// Evaluates one allocation request given as a process index and vector.
    pub fn request(&self, pid: usize, request: &[Units]) -> Result<AllocationResponse, ServiceError> {
        let mut controller = self.lock()?;
        let decision = controller.request(pid, request)?;
        Ok(AllocationResponse::from(decision))
    }

    /// Returns the node and edge lists of the current allocation graph.
    pub fn graph_snapshot(&self) -> Result<GraphResponse, ServiceError> {
        let graph = self.graph()?;
        Ok(GraphResponse::from(&graph))
    }

    /// Returns the full allocation graph, including node and edge kinds.
    pub fn graph(&self) -> Result<ResourceGraph, ServiceError> {
        let controller = self.lock()?;
        Ok(GraphBuilder::build(controller.state()))
    }

    /// Returns the current available vector.
    pub fn available(&self) -> Result<Vec<Units>, ServiceError> {
        Ok(self.lock()?.state().available().to_vec())
    }

    /// Returns a copy of the current snapshot.
    pub fn state(&self) -> Result<ResourceState, ServiceError> {
        Ok(self.lock()?.state().clone())
    }

    /// Runs the safety check on the current snapshot without changing it.
    pub fn safety_report(&self) -> Result<SafetyReport, ServiceError> {
        Ok(self.lock()?.safety_report())
    }

    /// Returns a copy of the cumulative request statistics.
    pub fn stats(&self) -> Result<RequestStats, ServiceError> {
        Ok(self.lock()?.stats().clone())
    }

    /// Returns the need policy in force.
    pub fn policy(&self) -> Result<NeedPolicy, ServiceError> {
        Ok(self.lock()?.policy())
    }

    /// Returns the configuration the service was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn lock(&self) -> Result<MutexGuard<'_, AllocationController>, ServiceError> {
        self.controller
            .lock()
            .map_err(|_| ServiceError::StatePoisoned)
    }
}

impl std::fmt::Debug for BankerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("BankerService");
        s.field("config", &self.config);
        if let Ok(controller) = self.controller.lock() {
            s.field("controller", &*controller);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn textbook_request() -> InitializeRequest {
        InitializeRequest {
            total_resources: vec![10, 5, 7],
            allocation: vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            max_need: vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
        }
    }

    fn service() -> BankerService {
        BankerService::new(ServiceConfig::default()).unwrap()
    }

    #[test]
    fn test_initialize() {
        let s = service();
        let resp = s.initialize(textbook_request()).unwrap();
        assert_eq!(resp.available, vec![3, 3, 2]);
        assert!(resp.safe);
        assert_eq!(resp.safe_sequence, Some(vec![1, 3, 4, 0, 2]));
    }

    #[test]
    fn test_initialize_malformed() {
        let s = service();
        let mut req = textbook_request();
        req.max_need[0] = vec![0, 0, 0];
        let err = s.initialize(req).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(s.state().unwrap().is_empty());
    }

    #[test]
    fn test_request_before_initialize() {
        let s = service();
        let err = s.request(0, &[1]).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_graph_before_initialize_is_empty() {
        let s = service();
        let g = s.graph_snapshot().unwrap();
        assert!(g.nodes.is_empty());
        assert!(g.edges.is_empty());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let config = ServiceConfig {
            need_policy: "whatever".into(),
            ..Default::default()
        };
        assert!(matches!(
            BankerService::new(config),
            Err(ServiceError::Config(_))
        ));
    }

    #[test]
    fn test_lenient_config() {
        let config = ServiceConfig {
            need_policy: "lenient".into(),
            ..Default::default()
        };
        let s = BankerService::new(config).unwrap();
        s.initialize(textbook_request()).unwrap();
        assert_eq!(s.policy().unwrap(), NeedPolicy::Lenient);
        assert!(s.request(1, &[2, 0, 0]).unwrap().granted);
    }

    #[test]
    fn test_concurrent_requests_conserve_units() {
        let s = Arc::new(service());
        s.initialize(textbook_request()).unwrap();

        let handles: Vec<_> = (0..5)
            .map(|pid| {
                let s = Arc::clone(&s);
                std::thread::spawn(move || {
                    for _ in 0..20 {
                        let _ = s.request(pid, &[1, 0, 0]).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let state = s.state().unwrap();
        assert!(state.is_conserved());
        assert!(s.safety_report().unwrap().safe);
        assert_eq!(s.stats().unwrap().total_requests, 100);
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", service());
        assert!(debug.contains("BankerService"));
        assert!(debug.contains("need_policy"));
    }
}
