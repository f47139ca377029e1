//! Rust types mirroring the design view's application JSON.
//!
//! These types are the serde target for the AppGraph the designer hands over
//! before converting a design into application text. Only the fields the
//! validator reads are modelled; everything else in the payload is ignored.
//! SYNC NOTE: Field names here must track the designer's element models. When
//! a required field changes, also review `validate/rules.rs`.

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL APP GRAPH
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGraph {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_list: Vec<SourceOrSinkAnnotation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sink_list: Vec<SourceOrSinkAnnotation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aggregation_list: Vec<Aggregation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_lists: QueryLists,
    #[serde(default, deserialize_with = "null_as_default")]
    pub partition_list: Vec<Partition>,
}

// =============================================================================
// SOURCES, SINKS, AGGREGATIONS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceOrSinkAnnotation {
    pub id: String,
    #[serde(default)]
    pub annotations: Option<Vec<String>>,
    #[serde(default)]
    pub connected_element_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    pub id: String,
    #[serde(default)]
    pub annotations: Option<Vec<String>>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub select: Option<SelectSection>,
}

// =============================================================================
// SELECT / OUTPUT SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SelectSection {
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "USER_DEFINED")]
    UserDefined {
        #[serde(default, deserialize_with = "null_as_default")]
        value: Vec<SelectedAttribute>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedAttribute {
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default, rename = "as")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_output_type")]
    pub output_type: Option<OutputType>,
    /// Type-specific settings (event type, `for`, `on`, `set`); only presence is checked.
    #[serde(default)]
    pub output: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputType {
    Insert,
    Delete,
    Update,
    UpdateOrInsertInto,
}

// =============================================================================
// QUERIES — one struct per query shape
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFilterProjectionQuery {
    pub id: String,
    #[serde(default)]
    pub annotations: Option<Vec<String>>,
    #[serde(default)]
    pub query_input: Option<WindowFilterProjectionInput>,
    #[serde(default)]
    pub query_output: Option<OutputSection>,
    #[serde(default)]
    pub select: Option<SelectSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFilterProjectionInput {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stream_handler_list: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinQuery {
    pub id: String,
    #[serde(default)]
    pub annotations: Option<Vec<String>>,
    #[serde(default)]
    pub query_input: Option<JoinInput>,
    #[serde(default)]
    pub query_output: Option<OutputSection>,
    #[serde(default)]
    pub select: Option<SelectSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinInput {
    #[serde(default)]
    pub first_connected_element: Option<ConnectedElement>,
    #[serde(default)]
    pub second_connected_element: Option<ConnectedElement>,
    #[serde(default)]
    pub left: Option<JoinSource>,
    #[serde(default)]
    pub right: Option<JoinSource>,
    #[serde(default)]
    pub join_with: Option<String>,
    #[serde(default)]
    pub join_type: Option<String>,
}

/// An element wired into one side of a join on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedElement {
    pub name: String,
    #[serde(default, rename = "type")]
    pub element_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinSource {
    #[serde(default, rename = "type")]
    pub source_type: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub window: Option<serde_json::Value>,
    #[serde(default, rename = "as")]
    pub alias: Option<String>,
    #[serde(default)]
    pub is_unidirectional: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternOrSequenceQuery {
    pub id: String,
    #[serde(default)]
    pub annotations: Option<Vec<String>>,
    #[serde(default)]
    pub query_input: Option<PatternOrSequenceInput>,
    #[serde(default)]
    pub query_output: Option<OutputSection>,
    #[serde(default)]
    pub select: Option<SelectSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternOrSequenceInput {
    /// `None` when the designer never tracked inputs; `Some(vec![])` once every input was removed.
    #[serde(default)]
    pub connected_element_name_list: Option<Vec<String>>,
    #[serde(default)]
    pub logic: Option<String>,
    #[serde(default)]
    pub condition_list: Option<Vec<PatternCondition>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCondition {
    pub condition_id: String,
    #[serde(default)]
    pub stream_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stream_handler_list: Vec<serde_json::Value>,
}

// =============================================================================
// QUERY LISTS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryLists {
    #[serde(default, rename = "WINDOW_FILTER_PROJECTION", deserialize_with = "null_as_default")]
    pub window_filter_projection: Vec<WindowFilterProjectionQuery>,
    #[serde(default, rename = "JOIN", deserialize_with = "null_as_default")]
    pub join: Vec<JoinQuery>,
    #[serde(default, rename = "PATTERN", deserialize_with = "null_as_default")]
    pub pattern: Vec<PatternOrSequenceQuery>,
    #[serde(default, rename = "SEQUENCE", deserialize_with = "null_as_default")]
    pub sequence: Vec<PatternOrSequenceQuery>,
}

/// Which list a query lives in. Patterns and sequences share a shape but not a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    WindowFilterProjection,
    Join,
    Pattern,
    Sequence,
}

/// Borrowed view over any query, tagged by the list it came from.
#[derive(Debug, Clone, Copy)]
pub enum QueryRef<'a> {
    WindowFilterProjection(&'a WindowFilterProjectionQuery),
    Join(&'a JoinQuery),
    Pattern(&'a PatternOrSequenceQuery),
    Sequence(&'a PatternOrSequenceQuery),
}

impl<'a> QueryRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            QueryRef::WindowFilterProjection(q) => &q.id,
            QueryRef::Join(q) => &q.id,
            QueryRef::Pattern(q) | QueryRef::Sequence(q) => &q.id,
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            QueryRef::WindowFilterProjection(_) => QueryKind::WindowFilterProjection,
            QueryRef::Join(_) => QueryKind::Join,
            QueryRef::Pattern(_) => QueryKind::Pattern,
            QueryRef::Sequence(_) => QueryKind::Sequence,
        }
    }
}

impl QueryLists {
    /// All queries in validation order: window/filter/projection, join, pattern, sequence.
    pub fn iter(&self) -> impl Iterator<Item = QueryRef<'_>> {
        self.window_filter_projection
            .iter()
            .map(QueryRef::WindowFilterProjection)
            .chain(self.join.iter().map(QueryRef::Join))
            .chain(self.pattern.iter().map(QueryRef::Pattern))
            .chain(self.sequence.iter().map(QueryRef::Sequence))
    }

    pub fn len(&self) -> usize {
        self.window_filter_projection.len() + self.join.len() + self.pattern.len() + self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// PARTITIONS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub id: String,
    #[serde(default)]
    pub annotations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub partition_with: Vec<PartitionWith>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stream_list: Vec<InnerStream>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_lists: QueryLists,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionWith {
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub stream_name: Option<String>,
}

/// A stream defined inside a partition. Its validity depends on the canvas wiring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerStream {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl InnerStream {
    /// Port id the canvas uses for connections into this stream.
    pub fn input_port_id(&self) -> String {
        format!("{}-in", self.id)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Designer truthiness: missing, `null`, and `""` all count as unset.
pub fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// JSON `null` is already `None`; other JSON values count as set.
pub fn is_value_set(value: &Option<serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

impl OutputType {
    /// Output types the designer writes; anything else is treated as unset.
    pub fn from_designer(value: &str) -> Option<Self> {
        match value {
            "INSERT" => Some(OutputType::Insert),
            "DELETE" => Some(OutputType::Delete),
            "UPDATE" => Some(OutputType::Update),
            "UPDATE_OR_INSERT_INTO" => Some(OutputType::UpdateOrInsertInto),
            _ => None,
        }
    }
}

/// `null` deserializes to the field's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Empty, unknown, or non-string output types count as unset.
fn lenient_output_type<'de, D>(deserializer: D) -> Result<Option<OutputType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(OutputType::from_designer))
}
