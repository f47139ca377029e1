use design_validator::config::ValidatorOptions;
use design_validator::connections::{CanvasConnections, Connection};
use design_validator::parse::types::*;

// =============================================================================
// Section builders
// =============================================================================

pub fn select_all() -> Option<SelectSection> {
    Some(SelectSection::All)
}

pub fn select_user_defined(expressions: &[&str]) -> Option<SelectSection> {
    Some(SelectSection::UserDefined {
        value: expressions
            .iter()
            .map(|e| SelectedAttribute {
                expression: Some(e.to_string()),
                alias: None,
            })
            .collect(),
    })
}

pub fn insert_into(target: &str) -> Option<OutputSection> {
    Some(OutputSection {
        target: Some(target.into()),
        output_type: Some(OutputType::Insert),
        output: Some(serde_json::json!({ "eventType": "ALL_EVENTS" })),
    })
}

// =============================================================================
// Element builders (all complete)
// =============================================================================

pub fn source(id: &str, stream: &str) -> SourceOrSinkAnnotation {
    SourceOrSinkAnnotation {
        id: id.into(),
        annotations: Some(vec!["@source(type='http')".into()]),
        connected_element_name: Some(stream.into()),
    }
}

pub fn sink(id: &str, stream: &str) -> SourceOrSinkAnnotation {
    SourceOrSinkAnnotation {
        id: id.into(),
        annotations: Some(vec!["@sink(type='log')".into()]),
        connected_element_name: Some(stream.into()),
    }
}

pub fn aggregation(id: &str) -> Aggregation {
    Aggregation {
        id: id.into(),
        annotations: None,
        from: Some("TradeStream".into()),
        name: Some("TradeAggregation".into()),
        select: select_user_defined(&["symbol", "avg(price)"]),
    }
}

pub fn window_query(id: &str) -> WindowFilterProjectionQuery {
    WindowFilterProjectionQuery {
        id: id.into(),
        annotations: None,
        query_input: Some(WindowFilterProjectionInput {
            from: Some("StreamA".into()),
            stream_handler_list: vec![],
        }),
        query_output: insert_into("StreamB"),
        select: select_all(),
    }
}

pub fn join_query(id: &str) -> JoinQuery {
    let element = |name: &str| ConnectedElement {
        name: name.into(),
        element_type: Some("STREAM".into()),
    };
    let side = |from: &str| JoinSource {
        source_type: Some("STREAM".into()),
        from: Some(from.into()),
        ..Default::default()
    };
    JoinQuery {
        id: id.into(),
        annotations: None,
        query_input: Some(JoinInput {
            first_connected_element: Some(element("StreamA")),
            second_connected_element: Some(element("StreamC")),
            left: Some(side("StreamA")),
            right: Some(side("StreamC")),
            join_with: Some("STREAM".into()),
            join_type: Some("JOIN".into()),
        }),
        query_output: insert_into("JoinedStream"),
        select: select_all(),
    }
}

pub fn pattern_query(id: &str) -> PatternOrSequenceQuery {
    PatternOrSequenceQuery {
        id: id.into(),
        annotations: None,
        query_input: Some(PatternOrSequenceInput {
            connected_element_name_list: Some(vec!["StreamA".into()]),
            logic: Some("e1 -> e2".into()),
            condition_list: Some(vec![
                PatternCondition {
                    condition_id: "e1".into(),
                    stream_name: Some("StreamA".into()),
                    stream_handler_list: vec![],
                },
                PatternCondition {
                    condition_id: "e2".into(),
                    stream_name: Some("StreamA".into()),
                    stream_handler_list: vec![],
                },
            ]),
        }),
        query_output: insert_into("AlertStream"),
        select: select_all(),
    }
}

/// Partition `id` with one inner stream `<id>-inner` and one nested window query.
pub fn partition(id: &str) -> Partition {
    Partition {
        id: id.into(),
        annotations: None,
        partition_with: vec![PartitionWith {
            expression: Some("symbol".into()),
            stream_name: Some("TradeStream".into()),
        }],
        stream_list: vec![InnerStream {
            id: format!("{}-inner", id),
            name: Some("#InnerStream".into()),
        }],
        query_lists: QueryLists {
            window_filter_projection: vec![window_query(&format!("{}-q", id))],
            ..Default::default()
        },
    }
}

/// A design touching every element kind, fully wired.
pub fn complete_graph() -> AppGraph {
    AppGraph {
        app_name: Some("TradeMonitor".into()),
        source_list: vec![source("source-1", "StreamA")],
        sink_list: vec![sink("sink-1", "StreamB")],
        aggregation_list: vec![aggregation("agg-1")],
        query_lists: QueryLists {
            window_filter_projection: vec![window_query("wfp-1")],
            join: vec![join_query("join-1")],
            pattern: vec![pattern_query("pattern-1")],
            sequence: vec![pattern_query("sequence-1")],
        },
        partition_list: vec![partition("partition-1")],
    }
}

// =============================================================================
// Canvas wiring
// =============================================================================

/// Connections feeding every inner stream of `graph`.
pub fn wired(graph: &AppGraph) -> CanvasConnections {
    let connections: Vec<Connection> = graph
        .partition_list
        .iter()
        .flat_map(|p| p.stream_list.iter())
        .map(|s| Connection {
            source: "inner-query-out".into(),
            target: s.input_port_id(),
        })
        .collect();
    CanvasConnections::build(&connections)
}

pub fn unwired() -> CanvasConnections {
    CanvasConnections::build(&[])
}

pub fn loud() -> ValidatorOptions {
    ValidatorOptions::default()
}

pub fn quiet() -> ValidatorOptions {
    ValidatorOptions::default().silent()
}
