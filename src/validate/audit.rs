//! Collect-all validation without UI side effects.

use crate::connections::ConnectionGraph;
use crate::error::DesignError;
use crate::messages::{ElementKind, Locale, Reason};
use crate::parse::types::AppGraph;

use super::rules;

/// Check every element in walk order and return one error per incomplete
/// element. Returns an empty list exactly when `validate` would return true.
pub fn audit(graph: &AppGraph, connections: &dyn ConnectionGraph, locale: Locale) -> Vec<DesignError> {
    let mut errors = Vec::new();

    for source in &graph.source_list {
        record(
            &source.id,
            rules::check_source_or_sink(source, ElementKind::Source),
            locale,
            &mut errors,
        );
    }
    for sink in &graph.sink_list {
        record(
            &sink.id,
            rules::check_source_or_sink(sink, ElementKind::Sink),
            locale,
            &mut errors,
        );
    }
    for aggregation in &graph.aggregation_list {
        record(
            &aggregation.id,
            rules::check_aggregation(aggregation),
            locale,
            &mut errors,
        );
    }
    for query in graph.query_lists.iter() {
        record(query.id(), rules::check_query(query), locale, &mut errors);
    }

    for partition in &graph.partition_list {
        if let Err(reason) = rules::check_partition_fields(partition) {
            record(&partition.id, Err(reason), locale, &mut errors);
            continue;
        }
        for stream in &partition.stream_list {
            record(
                &stream.id,
                rules::check_inner_stream(stream, connections),
                locale,
                &mut errors,
            );
        }
        for query in partition.query_lists.iter() {
            record(query.id(), rules::check_query(query), locale, &mut errors);
        }
    }

    errors
}

fn record(
    element_id: &str,
    result: Result<(), Reason>,
    locale: Locale,
    errors: &mut Vec<DesignError>,
) {
    if let Err(reason) = result {
        errors.push(DesignError::validate(
            reason.code(),
            reason.message(locale),
            Some(element_id.to_string()),
        ));
    }
}
