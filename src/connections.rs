//! Canvas connection graph.
//!
//! The designer keeps element wiring on the canvas rather than in the
//! AppGraph. The validator only needs one question answered about it: how many
//! connections end at a given port.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// A single wire between two element ports, e.g. `query1-out` → `stream2-in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

/// Read access to the canvas wiring.
pub trait ConnectionGraph {
    /// Connections whose target is `target_port_id`, in the order they were drawn.
    fn incoming_connections(&self, target_port_id: &str) -> Vec<Connection>;
}

/// petgraph-backed connection graph with one node per port id.
#[derive(Debug, Default)]
pub struct CanvasConnections {
    pub graph: DiGraph<String, ()>,
    pub port_indices: HashMap<String, NodeIndex>,
}

impl CanvasConnections {
    pub fn build(connections: &[Connection]) -> Self {
        let mut canvas = CanvasConnections::default();
        for connection in connections {
            canvas.connect(&connection.source, &connection.target);
        }
        canvas
    }

    pub fn connect(&mut self, source: &str, target: &str) -> EdgeIndex {
        let s = self.port(source);
        let t = self.port(target);
        self.graph.add_edge(s, t, ())
    }

    fn port(&mut self, port_id: &str) -> NodeIndex {
        if let Some(&idx) = self.port_indices.get(port_id) {
            return idx;
        }
        let idx = self.graph.add_node(port_id.to_string());
        self.port_indices.insert(port_id.to_string(), idx);
        idx
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl ConnectionGraph for CanvasConnections {
    fn incoming_connections(&self, target_port_id: &str) -> Vec<Connection> {
        let Some(&idx) = self.port_indices.get(target_port_id) else {
            return vec![];
        };
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Incoming)
            .map(|e| (e.id(), e.source()))
            .collect();
        // petgraph walks adjacency lists newest-first
        edges.sort_by_key(|(edge, _)| *edge);
        edges
            .into_iter()
            .map(|(_, source)| Connection {
                source: self.graph[source].clone(),
                target: target_port_id.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(source: &str, target: &str) -> Connection {
        Connection {
            source: source.into(),
            target: target.into(),
        }
    }

    #[test]
    fn unknown_port_has_no_incoming() {
        let canvas = CanvasConnections::build(&[]);
        assert!(canvas.incoming_connections("s1-in").is_empty());
    }

    #[test]
    fn incoming_connections_keep_drawing_order() {
        let canvas = CanvasConnections::build(&[
            wire("q1-out", "s1-in"),
            wire("q2-out", "s1-in"),
            wire("s1-out", "q3-in"),
        ]);
        let incoming = canvas.incoming_connections("s1-in");
        assert_eq!(incoming, vec![wire("q1-out", "s1-in"), wire("q2-out", "s1-in")]);
        assert_eq!(canvas.connection_count(), 3);
    }

    #[test]
    fn outgoing_only_port_has_no_incoming() {
        let canvas = CanvasConnections::build(&[wire("s1-out", "q1-in")]);
        assert!(canvas.incoming_connections("s1-out").is_empty());
    }
}
