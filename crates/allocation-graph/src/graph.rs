// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Resource-allocation graph construction and rendering.
//!
//! ```text
//!   R0 ──alloc──► P1          P1 holds units of R0
//!   P1 ──req────► R0          P1 may still ask for R0
//! ```
//!
//! Ordering is deterministic: nodes are `P0..P{P-1}` then `R0..R{R-1}`, and
//! edges are grouped by source node in that same order with targets
//! ascending. Request edges therefore always precede allocation edges.

use crate::{Edge, EdgeKind, Node, NodeId};
use resource_model::ResourceState;
use std::fmt::Write as _;

/// Derives a [`ResourceGraph`] from a snapshot.
///
/// # Example
/// ```
/// use allocation_graph::{GraphBuilder, NodeId};
/// use resource_model::ResourceState;
///
/// let state = ResourceState::new(vec![3], vec![vec![2]], vec![vec![3]]).unwrap();
/// let graph = GraphBuilder::build(&state);
/// assert!(graph.contains_edge(NodeId::Resource(0), NodeId::Process(0)));
/// assert!(graph.contains_edge(NodeId::Process(0), NodeId::Resource(0)));
/// ```
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the graph for `state`. Read-only; the snapshot is not touched.
    pub fn build(state: &ResourceState) -> ResourceGraph {
        let processes = state.num_processes();
        let resources = state.num_resources();

        let nodes = (0..processes)
            .map(NodeId::Process)
            .chain((0..resources).map(NodeId::Resource))
            .map(Node::from)
            .collect();

        let mut edges = Vec::new();

        for pid in 0..processes {
            for rid in 0..resources {
                if state.need_of(pid, rid) > 0 {
                    edges.push(Edge {
                        source: NodeId::Process(pid),
                        target: NodeId::Resource(rid),
                        kind: EdgeKind::Request,
                    });
                }
            }
        }

        for rid in 0..resources {
            for pid in 0..processes {
                if state.allocation(pid)[rid] > 0 {
                    edges.push(Edge {
                        source: NodeId::Resource(rid),
                        target: NodeId::Process(pid),
                        kind: EdgeKind::Allocation,
                    });
                }
            }
        }

        ResourceGraph { nodes, edges }
    }
}

/// A directed bipartite graph of processes and resource types.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ResourceGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl ResourceGraph {
    /// Node identifiers in order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// Edges as `(source, target)` pairs in order.
    pub fn edge_pairs(&self) -> Vec<(NodeId, NodeId)> {
        self.edges.iter().map(Edge::pair).collect()
    }

    /// Returns `true` if the edge `source -> target` exists.
    pub fn contains_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    /// Outgoing edges of `node`.
    pub fn edges_from(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.source == node)
    }

    /// Resource-to-process (holding) edges.
    pub fn allocation_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Allocation)
    }

    /// Process-to-resource (pending need) edges.
    pub fn request_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Request)
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "RAG: {} nodes, {} edges ({} allocation, {} request)",
            self.nodes.len(),
            self.edges.len(),
            self.allocation_edges().count(),
            self.request_edges().count(),
        )
    }

    /// Renders the graph in Graphviz DOT format.
    ///
    /// Processes are ellipses, resources are boxes, request edges are dashed.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph rag {\n    rankdir=LR;\n");
        for node in &self.nodes {
            let shape = match node.kind {
                crate::NodeKind::Process => "ellipse",
                crate::NodeKind::Resource => "box",
            };
            let _ = writeln!(out, "    {} [shape={shape}];", node.id);
        }
        for edge in &self.edges {
            let style = match edge.kind {
                EdgeKind::Allocation => "solid",
                EdgeKind::Request => "dashed",
            };
            let _ = writeln!(out, "    {} -> {} [style={style}];", edge.source, edge.target);
        }
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> ResourceState {
        ResourceState::new(
            vec![10, 5, 7],
            vec![
                vec![0, 1, 0],
                vec![2, 0, 0],
                vec![3, 0, 2],
                vec![2, 1, 1],
                vec![0, 0, 2],
            ],
            vec![
                vec![7, 5, 3],
                vec![3, 2, 2],
                vec![9, 0, 2],
                vec![2, 2, 2],
                vec![4, 3, 3],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_textbook_edges() {
        let g = GraphBuilder::build(&textbook());
        assert!(g.contains_edge(NodeId::Resource(0), NodeId::Process(1)));
        assert!(g.contains_edge(NodeId::Process(1), NodeId::Resource(0)));
        // P2's need for R1 and R2 is zero, and it holds no R1.
        assert!(!g.contains_edge(NodeId::Process(2), NodeId::Resource(1)));
        assert!(!g.contains_edge(NodeId::Process(2), NodeId::Resource(2)));
        assert!(!g.contains_edge(NodeId::Resource(1), NodeId::Process(2)));
    }

    #[test]
    fn test_node_order() {
        let g = GraphBuilder::build(&textbook());
        let labels: Vec<String> = g.node_ids().iter().map(|n| n.to_string()).collect();
        assert_eq!(labels, ["P0", "P1", "P2", "P3", "P4", "R0", "R1", "R2"]);
    }

    #[test]
    fn test_edge_order_grouped_by_source() {
        let g = GraphBuilder::build(&textbook());
        let pairs: Vec<(String, String)> = g
            .edge_pairs()
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect();
        #[rustfmt::skip]
        let expected = [
            ("P0", "R0"), ("P0", "R1"), ("P0", "R2"),
            ("P1", "R0"), ("P1", "R1"), ("P1", "R2"),
            ("P2", "R0"),
            ("P3", "R1"), ("P3", "R2"),
            ("P4", "R0"), ("P4", "R1"), ("P4", "R2"),
            ("R0", "P1"), ("R0", "P2"), ("R0", "P3"),
            ("R1", "P0"), ("R1", "P3"),
            ("R2", "P2"), ("R2", "P3"), ("R2", "P4"),
        ];
        let expected: Vec<(String, String)> = expected
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_edge_kinds() {
        let g = GraphBuilder::build(&textbook());
        assert_eq!(g.allocation_edges().count(), 8);
        assert_eq!(g.request_edges().count(), 12);
        assert!(g
            .edges_from(NodeId::Resource(0))
            .all(|e| e.kind == EdgeKind::Allocation));
        assert_eq!(g.edges_from(NodeId::Process(2)).count(), 1);
    }

    #[test]
    fn test_empty_state() {
        let g = GraphBuilder::build(&ResourceState::empty());
        assert!(g.is_empty());
        assert!(g.edges.is_empty());
    }

    #[test]
    fn test_summary() {
        let g = GraphBuilder::build(&textbook());
        assert_eq!(g.summary(), "RAG: 8 nodes, 20 edges (8 allocation, 12 request)");
    }

    #[test]
    fn test_to_dot() {
        let state = ResourceState::new(vec![3], vec![vec![2]], vec![vec![3]]).unwrap();
        let dot = GraphBuilder::build(&state).to_dot();
        assert!(dot.starts_with("digraph rag {"));
        assert!(dot.contains("P0 [shape=ellipse];"));
        assert!(dot.contains("R0 [shape=box];"));
        assert!(dot.contains("P0 -> R0 [style=dashed];"));
        assert!(dot.contains("R0 -> P0 [style=solid];"));
    }

    #[test]
    fn test_serialize_nodes_with_type() {
        let state = ResourceState::new(vec![1], vec![vec![1]], vec![vec![1]]).unwrap();
        let json = serde_json::to_value(GraphBuilder::build(&state)).unwrap();
        assert_eq!(json["nodes"][0]["id"], "P0");
        assert_eq!(json["nodes"][0]["type"], "process");
        assert_eq!(json["edges"][0]["source"], "R0");
        assert_eq!(json["edges"][0]["kind"], "allocation");
    }
}
