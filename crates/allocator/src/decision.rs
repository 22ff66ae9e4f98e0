// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Outcomes of an allocation request.

use resource_model::Units;

/// Why a well-formed request was refused.
///
/// Every denial is recoverable: the snapshot is exactly as it was before
/// the request, and the caller may retry later or with a smaller request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Denial {
    /// The request exceeds the units currently free for some resource.
    #[error("insufficient resources")]
    InsufficientResources {
        resource: usize,
        requested: Units,
        available: Units,
    },

    /// The request exceeds what the process declared it could still need.
    #[error("exceeds declared maximum need")]
    ExceedsMaxNeed {
        resource: usize,
        requested: Units,
        need: Units,
    },

    /// Granting the request would leave no safe completion ordering.
    #[error("would lead to unsafe state")]
    UnsafeState,
}

impl Denial {
    /// The short reason string reported to callers.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Returns the offending resource index, if the denial names one.
    pub fn resource(&self) -> Option<usize> {
        match self {
            Self::InsufficientResources { resource, .. } | Self::ExceedsMaxNeed { resource, .. } => {
                Some(*resource)
            }
            Self::UnsafeState => None,
        }
    }

    /// A longer explanation including the offending numbers.
    pub fn detail(&self) -> String {
        match self {
            Self::InsufficientResources {
                resource,
                requested,
                available,
            } => format!("requested {requested} of R{resource}, only {available} available"),
            Self::ExceedsMaxNeed {
                resource,
                requested,
                need,
            } => format!("requested {requested} of R{resource}, remaining need is {need}"),
            Self::UnsafeState => "no safe completion sequence exists after the grant".to_string(),
        }
    }
}

/// The controller's answer to a well-formed request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    /// The request was committed; `available` is the new free vector.
    Granted { available: Vec<Units> },
    /// The request was refused and the snapshot left untouched.
    Denied(Denial),
}

impl Decision {
    /// Returns `true` if the request was committed.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// Returns the denial, if any.
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Granted { .. } => None,
            Self::Denied(denial) => Some(denial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons() {
        let insufficient = Denial::InsufficientResources {
            resource: 1,
            requested: 2,
            available: 1,
        };
        assert_eq!(insufficient.reason(), "insufficient resources");
        assert_eq!(insufficient.resource(), Some(1));
        assert_eq!(insufficient.detail(), "requested 2 of R1, only 1 available");

        assert_eq!(Denial::UnsafeState.reason(), "would lead to unsafe state");
        assert_eq!(Denial::UnsafeState.resource(), None);

        let over = Denial::ExceedsMaxNeed {
            resource: 0,
            requested: 3,
            need: 1,
        };
        assert_eq!(over.reason(), "exceeds declared maximum need");
    }

    #[test]
    fn test_decision_accessors() {
        let granted = Decision::Granted {
            available: vec![2, 3, 0],
        };
        assert!(granted.is_granted());
        assert!(granted.denial().is_none());

        let denied = Decision::Denied(Denial::UnsafeState);
        assert!(!denied.is_granted());
        assert_eq!(denied.denial(), Some(&Denial::UnsafeState));
    }

    #[test]
    fn test_serialize_tags() {
        let json = serde_json::to_value(Decision::Denied(Denial::UnsafeState)).unwrap();
        assert_eq!(json["outcome"], "denied");
        assert_eq!(json["kind"], "unsafe_state");

        let json = serde_json::to_value(Decision::Granted {
            available: vec![1],
        })
        .unwrap();
        assert_eq!(json["outcome"], "granted");
        assert_eq!(json["available"], serde_json::json!([1]));
    }
}
