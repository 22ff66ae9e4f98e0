// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Node and edge identifiers.

use crate::GraphError;
use std::fmt;
use std::str::FromStr;

/// Identifies a graph node: `P{i}` for process `i`, `R{j}` for resource `j`.
///
/// Serialised as its string label so the wire form stays `"P0"`, `"R2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum NodeId {
    /// A process node.
    Process(usize),
    /// A resource-type node.
    Resource(usize),
}

impl NodeId {
    /// Returns the kind of node this identifier names.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Process(_) => NodeKind::Process,
            Self::Resource(_) => NodeKind::Resource,
        }
    }

    /// Returns the process or resource index.
    pub fn index(&self) -> usize {
        match self {
            Self::Process(i) | Self::Resource(i) => *i,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(i) => write!(f, "P{i}"),
            Self::Resource(j) => write!(f, "R{j}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GraphError::InvalidNodeId(s.to_string());
        let mut chars = s.chars();
        let prefix = chars.next().ok_or_else(invalid)?;
        let index: usize = chars.as_str().parse().map_err(|_| invalid())?;
        match prefix {
            'P' => Ok(Self::Process(index)),
            'R' => Ok(Self::Resource(index)),
            _ => Err(invalid()),
        }
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = GraphError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// What a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Process,
    Resource,
}

impl NodeKind {
    /// Returns the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::Resource => "resource",
        }
    }
}

/// A node together with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl From<NodeId> for Node {
    fn from(id: NodeId) -> Self {
        Self {
            id,
            kind: id.kind(),
        }
    }
}

/// What an edge means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// `R_j -> P_i`: process `i` holds units of resource `j`.
    Allocation,
    /// `P_i -> R_j`: process `i` may still request resource `j`.
    Request,
}

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl Edge {
    /// Returns the `(source, target)` pair.
    pub fn pair(&self) -> (NodeId, NodeId) {
        (self.source, self.target)
    }
}
