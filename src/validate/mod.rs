//! Design validation phase.
//!
//! Decides whether an `AppGraph` is complete enough to be converted into
//! application text. The full walk stops at the first incomplete element in a
//! fixed order: sources, sinks, aggregations, queries (window/filter/projection,
//! join, pattern, sequence), then partitions. Every per-element validator can
//! also be called on its own, e.g. when a properties form is saved.

pub mod audit;
pub mod context;
pub mod rules;

pub use audit::audit;
pub use context::Context;

use log::{debug, trace};

use crate::connections::ConnectionGraph;
use crate::messages::{self, ElementKind};
use crate::parse::types::*;

/// Validate the whole design. Nested validators run silenced; if the walk fails
/// a single "design contains errors" alert is raised (when alerts are enabled).
pub fn validate(graph: &AppGraph, connections: &dyn ConnectionGraph, ctx: &mut Context<'_>) -> bool {
    debug!(
        "validating design '{}': {} sources, {} sinks, {} aggregations, {} queries, {} partitions",
        graph.app_name.as_deref().unwrap_or(""),
        graph.source_list.len(),
        graph.sink_list.len(),
        graph.aggregation_list.len(),
        graph.query_lists.len(),
        graph.partition_list.len()
    );

    let valid = walk(graph, connections, &mut ctx.silenced());
    if !valid {
        ctx.alert(messages::design_contains_errors(ctx.locale));
    }

    debug!("design validation finished: valid = {}", valid);
    valid
}

fn walk(graph: &AppGraph, connections: &dyn ConnectionGraph, ctx: &mut Context<'_>) -> bool {
    for source in &graph.source_list {
        if !validate_source_or_sink(source, ElementKind::Source, ctx) {
            return false;
        }
    }
    for sink in &graph.sink_list {
        if !validate_source_or_sink(sink, ElementKind::Sink, ctx) {
            return false;
        }
    }
    for aggregation in &graph.aggregation_list {
        if !validate_aggregation(aggregation, ctx) {
            return false;
        }
    }
    for query in graph.query_lists.iter() {
        if !validate_query(query, ctx) {
            return false;
        }
    }
    for partition in &graph.partition_list {
        if !validate_partition(partition, connections, ctx) {
            return false;
        }
    }
    true
}

// =============================================================================
// Element validators
// =============================================================================

/// `kind` is `Source` or `Sink`.
pub fn validate_source_or_sink(
    annotation: &SourceOrSinkAnnotation,
    kind: ElementKind,
    ctx: &mut Context<'_>,
) -> bool {
    trace!("checking {:?} '{}'", kind, annotation.id);
    ctx.clear_tooltip(&annotation.id);
    ctx.settle(&annotation.id, rules::check_source_or_sink(annotation, kind))
}

pub fn validate_aggregation(aggregation: &Aggregation, ctx: &mut Context<'_>) -> bool {
    trace!("checking aggregation '{}'", aggregation.id);
    ctx.clear_tooltip(&aggregation.id);
    ctx.settle(&aggregation.id, rules::check_aggregation(aggregation))
}

pub fn validate_window_filter_projection_query(
    query: &WindowFilterProjectionQuery,
    ctx: &mut Context<'_>,
) -> bool {
    validate_query(QueryRef::WindowFilterProjection(query), ctx)
}

pub fn validate_join_query(query: &JoinQuery, ctx: &mut Context<'_>) -> bool {
    validate_query(QueryRef::Join(query), ctx)
}

pub fn validate_pattern_query(query: &PatternOrSequenceQuery, ctx: &mut Context<'_>) -> bool {
    validate_query(QueryRef::Pattern(query), ctx)
}

pub fn validate_sequence_query(query: &PatternOrSequenceQuery, ctx: &mut Context<'_>) -> bool {
    validate_query(QueryRef::Sequence(query), ctx)
}

pub fn validate_query(query: QueryRef<'_>, ctx: &mut Context<'_>) -> bool {
    trace!("checking {:?} query '{}'", query.kind(), query.id());
    ctx.clear_tooltip(query.id());
    ctx.settle(query.id(), rules::check_query(query))
}

/// Validate a select section owned by `element_id`. Failure highlights the
/// owner; success leaves its highlight alone.
pub fn validate_select_section(
    select: Option<&SelectSection>,
    kind: ElementKind,
    element_id: &str,
    ctx: &mut Context<'_>,
) -> bool {
    match rules::check_select_section(select, kind) {
        Ok(()) => true,
        Err(reason) => {
            ctx.flag(element_id, reason);
            false
        }
    }
}

/// Validate an output section owned by `element_id`. Same highlight rules as
/// `validate_select_section`.
pub fn validate_output_section(
    output: Option<&OutputSection>,
    kind: ElementKind,
    element_id: &str,
    ctx: &mut Context<'_>,
) -> bool {
    match rules::check_output_section(output, kind) {
        Ok(()) => true,
        Err(reason) => {
            ctx.flag(element_id, reason);
            false
        }
    }
}

/// Validate a partition's own fields, then its inner streams, then its nested
/// queries. Nothing inside is checked while the partition fields are incomplete.
pub fn validate_partition(
    partition: &Partition,
    connections: &dyn ConnectionGraph,
    ctx: &mut Context<'_>,
) -> bool {
    trace!("checking partition '{}'", partition.id);
    ctx.clear_tooltip(&partition.id);
    if !ctx.settle(&partition.id, rules::check_partition_fields(partition)) {
        return false;
    }

    for stream in &partition.stream_list {
        if !validate_inner_stream(stream, connections, ctx) {
            return false;
        }
    }
    for query in partition.query_lists.iter() {
        if !validate_query(query, ctx) {
            return false;
        }
    }
    true
}

pub fn validate_inner_stream(
    stream: &InnerStream,
    connections: &dyn ConnectionGraph,
    ctx: &mut Context<'_>,
) -> bool {
    trace!("checking inner stream '{}'", stream.id);
    ctx.clear_tooltip(&stream.id);
    ctx.settle(&stream.id, rules::check_inner_stream(stream, connections))
}
