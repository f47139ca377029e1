//! Parse phase: JSON → Rust types.

pub mod types;

pub use types::*;

use crate::connections::{CanvasConnections, Connection};
use crate::error::DesignError;

/// Deserialize an application design JSON string into an `AppGraph`.
pub fn parse(json: &str) -> Result<AppGraph, Vec<DesignError>> {
    serde_json::from_str::<AppGraph>(json).map_err(|e| {
        vec![DesignError::parse(
            "P001",
            format!("Failed to parse application design JSON: {}", e),
        )]
    })
}

/// Deserialize the canvas connection list (`[{"source": .., "target": ..}]`).
pub fn parse_connections(json: &str) -> Result<Vec<Connection>, Vec<DesignError>> {
    serde_json::from_str::<Vec<Connection>>(json).map_err(|e| {
        vec![DesignError::parse(
            "P002",
            format!("Failed to parse connection list JSON: {}", e),
        )]
    })
}

/// Parse both payloads and build the connection graph in one step.
pub fn parse_and_build(
    app_json: &str,
    connections_json: &str,
) -> Result<(AppGraph, CanvasConnections), Vec<DesignError>> {
    let graph = parse(app_json);
    let connections = parse_connections(connections_json);
    match (graph, connections) {
        (Ok(graph), Ok(connections)) => Ok((graph, CanvasConnections::build(&connections))),
        (graph, connections) => {
            let mut errors = Vec::new();
            if let Err(e) = graph {
                errors.extend(e);
            }
            if let Err(e) = connections {
                errors.extend(e);
            }
            Err(errors)
        }
    }
}
