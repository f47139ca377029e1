//! Per-element completeness rules.
//!
//! Each check returns the first missing piece as a `Reason`, in the order the
//! designer's forms ask for them. No side effects here.
//! SYNC NOTE: Keep check order aligned with `parse/types.rs` when required
//! fields are added.

use crate::connections::ConnectionGraph;
use crate::messages::{ElementKind, Reason};
use crate::parse::types::*;

pub fn check_source_or_sink(
    annotation: &SourceOrSinkAnnotation,
    kind: ElementKind,
) -> Result<(), Reason> {
    if !is_set(&annotation.connected_element_name) {
        return Err(Reason::NotConnectedToStream(kind));
    }
    Ok(())
}

pub fn check_aggregation(aggregation: &Aggregation) -> Result<(), Reason> {
    if !is_set(&aggregation.from) {
        return Err(Reason::AggregationHasNoInput);
    }
    if !is_set(&aggregation.name) {
        return Err(Reason::AggregationNameEmpty);
    }
    check_select_section(aggregation.select.as_ref(), ElementKind::Aggregation)
}

pub fn check_window_filter_projection_query(
    query: &WindowFilterProjectionQuery,
) -> Result<(), Reason> {
    let kind = ElementKind::Query;
    match &query.query_input {
        Some(input) if is_set(&input.from) => {}
        _ => return Err(Reason::QueryHasNoInput),
    }
    check_output_section(query.query_output.as_ref(), kind)?;
    check_select_section(query.select.as_ref(), kind)
}

pub fn check_join_query(query: &JoinQuery) -> Result<(), Reason> {
    let kind = ElementKind::JoinQuery;
    let Some(input) = &query.query_input else {
        return Err(Reason::JoinNeedsTwoInputs);
    };
    match (
        &input.first_connected_element,
        &input.second_connected_element,
    ) {
        (None, None) => return Err(Reason::JoinNeedsTwoInputs),
        (Some(_), None) | (None, Some(_)) => return Err(Reason::JoinHasOneInput),
        (Some(_), Some(_)) => {}
    }

    check_output_section(query.query_output.as_ref(), kind)?;

    if input.left.is_none() {
        return Err(Reason::JoinLeftUndefined);
    }
    if input.right.is_none() {
        return Err(Reason::JoinRightUndefined);
    }
    if !is_set(&input.join_with) || !is_set(&input.join_type) {
        return Err(Reason::JoinIncomplete);
    }

    check_select_section(query.select.as_ref(), kind)
}

pub fn check_pattern_query(query: &PatternOrSequenceQuery) -> Result<(), Reason> {
    check_pattern_or_sequence(query, ElementKind::PatternQuery)
}

pub fn check_sequence_query(query: &PatternOrSequenceQuery) -> Result<(), Reason> {
    check_pattern_or_sequence(query, ElementKind::SequenceQuery)
}

/// Pattern and sequence queries share one form; `kind` only changes the message label.
fn check_pattern_or_sequence(
    query: &PatternOrSequenceQuery,
    kind: ElementKind,
) -> Result<(), Reason> {
    let Some(input) = &query.query_input else {
        return Err(Reason::QueryInputMissing(kind));
    };
    if input
        .connected_element_name_list
        .as_ref()
        .is_some_and(|names| names.is_empty())
    {
        return Err(Reason::QueryInputMissing(kind));
    }

    check_output_section(query.query_output.as_ref(), kind)?;

    if !is_set(&input.logic) {
        return Err(Reason::LogicEmpty(kind));
    }
    if input
        .condition_list
        .as_ref()
        .is_none_or(|conditions| conditions.is_empty())
    {
        return Err(Reason::ConditionListEmpty(kind));
    }

    check_select_section(query.select.as_ref(), kind)
}

pub fn check_query(query: QueryRef<'_>) -> Result<(), Reason> {
    match query {
        QueryRef::WindowFilterProjection(q) => check_window_filter_projection_query(q),
        QueryRef::Join(q) => check_join_query(q),
        QueryRef::Pattern(q) => check_pattern_query(q),
        QueryRef::Sequence(q) => check_sequence_query(q),
    }
}

pub fn check_select_section(
    select: Option<&SelectSection>,
    kind: ElementKind,
) -> Result<(), Reason> {
    match select {
        None => Err(Reason::SelectEmpty(kind)),
        Some(SelectSection::All) => Ok(()),
        Some(SelectSection::UserDefined { value }) if value.is_empty() => {
            Err(Reason::SelectEmpty(kind))
        }
        Some(SelectSection::UserDefined { value }) => {
            if value.iter().any(|attribute| !is_set(&attribute.expression)) {
                return Err(Reason::SelectPartiallyEmpty(kind));
            }
            Ok(())
        }
    }
}

pub fn check_output_section(
    output: Option<&OutputSection>,
    kind: ElementKind,
) -> Result<(), Reason> {
    let Some(output) = output else {
        return Err(Reason::OutputNotConnected(kind));
    };
    if !is_set(&output.target) {
        return Err(Reason::OutputNotConnected(kind));
    }
    if output.output_type.is_none() || !is_value_set(&output.output) {
        return Err(Reason::OutputUnspecified(kind));
    }
    Ok(())
}

/// Partition's own fields only; inner streams and nested queries are checked separately.
pub fn check_partition_fields(partition: &Partition) -> Result<(), Reason> {
    if partition.partition_with.is_empty() {
        return Err(Reason::PartitionNotConnected);
    }
    if partition
        .partition_with
        .iter()
        .any(|entry| !is_set(&entry.expression) || !is_set(&entry.stream_name))
    {
        return Err(Reason::PartitionWithUnspecified);
    }
    Ok(())
}

pub fn check_inner_stream(
    stream: &InnerStream,
    connections: &dyn ConnectionGraph,
) -> Result<(), Reason> {
    if connections
        .incoming_connections(&stream.input_port_id())
        .is_empty()
    {
        return Err(Reason::InnerStreamNotConnected);
    }
    Ok(())
}
