//! Localized validation messages.
//!
//! Every failure the validator can report is a `Reason`. The rendered text is
//! what the user sees in the alert and in the element's tooltip.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN", alias = "zh")]
    ZhCn,
}

/// Element label used inside messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Source,
    Sink,
    Aggregation,
    Query,
    JoinQuery,
    PatternQuery,
    SequenceQuery,
    Partition,
    InnerStream,
}

impl ElementKind {
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                ElementKind::Source => "Source",
                ElementKind::Sink => "Sink",
                ElementKind::Aggregation => "Aggregation",
                ElementKind::Query => "Query",
                ElementKind::JoinQuery => "Join query",
                ElementKind::PatternQuery => "Pattern query",
                ElementKind::SequenceQuery => "Sequence query",
                ElementKind::Partition => "Partition",
                ElementKind::InnerStream => "Inner stream",
            },
            Locale::ZhCn => match self {
                ElementKind::Source => "源",
                ElementKind::Sink => "汇",
                ElementKind::Aggregation => "聚合",
                ElementKind::Query => "查询",
                ElementKind::JoinQuery => "联合查询",
                ElementKind::PatternQuery => "模式查询",
                ElementKind::SequenceQuery => "序列查询",
                ElementKind::Partition => "分区",
                ElementKind::InnerStream => "内部流",
            },
        }
    }

    /// English label for use mid-sentence.
    fn noun(self) -> &'static str {
        match self {
            ElementKind::Source => "source",
            ElementKind::Sink => "sink",
            ElementKind::Aggregation => "aggregation",
            ElementKind::Query => "query",
            ElementKind::JoinQuery => "join query",
            ElementKind::PatternQuery => "pattern query",
            ElementKind::SequenceQuery => "sequence query",
            ElementKind::Partition => "partition",
            ElementKind::InnerStream => "inner stream",
        }
    }
}

/// Why an element is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    NotConnectedToStream(ElementKind),
    AggregationHasNoInput,
    AggregationNameEmpty,
    QueryHasNoInput,
    JoinNeedsTwoInputs,
    JoinHasOneInput,
    JoinLeftUndefined,
    JoinRightUndefined,
    JoinIncomplete,
    QueryInputMissing(ElementKind),
    LogicEmpty(ElementKind),
    ConditionListEmpty(ElementKind),
    SelectEmpty(ElementKind),
    SelectPartiallyEmpty(ElementKind),
    OutputNotConnected(ElementKind),
    OutputUnspecified(ElementKind),
    PartitionNotConnected,
    PartitionWithUnspecified,
    InnerStreamNotConnected,
}

impl Reason {
    pub fn code(self) -> &'static str {
        match self {
            Reason::NotConnectedToStream(_) => "D001",
            Reason::AggregationHasNoInput => "D002",
            Reason::AggregationNameEmpty => "D003",
            Reason::QueryHasNoInput => "D004",
            Reason::JoinNeedsTwoInputs => "D005",
            Reason::JoinHasOneInput => "D006",
            Reason::JoinLeftUndefined => "D007",
            Reason::JoinRightUndefined => "D008",
            Reason::JoinIncomplete => "D009",
            Reason::QueryInputMissing(_) => "D010",
            Reason::LogicEmpty(_) => "D011",
            Reason::ConditionListEmpty(_) => "D012",
            Reason::SelectEmpty(_) => "D013",
            Reason::SelectPartiallyEmpty(_) => "D014",
            Reason::OutputNotConnected(_) => "D015",
            Reason::OutputUnspecified(_) => "D016",
            Reason::PartitionNotConnected => "D017",
            Reason::PartitionWithUnspecified => "D018",
            Reason::InnerStreamNotConnected => "D019",
        }
    }

    pub fn message(self, locale: Locale) -> String {
        match locale {
            Locale::En => self.message_en(),
            Locale::ZhCn => self.message_zh(),
        }
    }

    fn message_en(self) -> String {
        let en = Locale::En;
        match self {
            Reason::NotConnectedToStream(kind) => {
                format!("{} annotation does not contain a connected stream", kind.label(en))
            }
            Reason::AggregationHasNoInput => {
                "Aggregation element does not contain a connected input".into()
            }
            Reason::AggregationNameEmpty => {
                "Name field of the aggregation element cannot be empty".into()
            }
            Reason::QueryHasNoInput => "Query does not contain a connected input".into(),
            Reason::JoinNeedsTwoInputs => "Join query does not contain two connected inputs".into(),
            Reason::JoinHasOneInput => "Only one element is connected to the join query".into(),
            Reason::JoinLeftUndefined => "Left source of the join query is not defined".into(),
            Reason::JoinRightUndefined => "Right source of the join query is not defined".into(),
            Reason::JoinIncomplete => "Join query does not satisfy the requirements".into(),
            Reason::QueryInputMissing(kind) => {
                format!("{} does not contain an input", kind.label(en))
            }
            Reason::LogicEmpty(kind) => {
                format!("Logic section of the {} input cannot be empty", kind.noun())
            }
            Reason::ConditionListEmpty(kind) => {
                format!("Condition list of the {} input cannot be empty", kind.noun())
            }
            Reason::SelectEmpty(kind) => {
                format!("Select section of the {} cannot be empty", kind.noun())
            }
            Reason::SelectPartiallyEmpty(kind) => {
                format!("Select section of the {} is partially empty", kind.noun())
            }
            Reason::OutputNotConnected(kind) => format!(
                "{} does not contain a connection to an output element",
                kind.label(en)
            ),
            Reason::OutputUnspecified(kind) => {
                format!("Output section of the {} is not specified", kind.noun())
            }
            Reason::PartitionNotConnected => {
                "Partition does not contain a connection to an outer stream".into()
            }
            Reason::PartitionWithUnspecified => {
                "Partition-by section of the partition is not specified".into()
            }
            Reason::InnerStreamNotConnected => {
                "Inner stream does not contain a connection in from an inner query".into()
            }
        }
    }

    fn message_zh(self) -> String {
        let zh = Locale::ZhCn;
        match self {
            Reason::NotConnectedToStream(kind) => format!("{}注解不包含一个连接流", kind.label(zh)),
            Reason::AggregationHasNoInput => "聚合元素不包含一个连接输入".into(),
            Reason::AggregationNameEmpty => "聚合元素的名称字段不能为空".into(),
            Reason::QueryHasNoInput => "查询不包含一个连接输入".into(),
            Reason::JoinNeedsTwoInputs => "联合查询不包含两个连接输入".into(),
            Reason::JoinHasOneInput => "只有一个元素连接到联合查询".into(),
            Reason::JoinLeftUndefined => "联合查询的左输入未定义".into(),
            Reason::JoinRightUndefined => "联合查询的右输入未定义".into(),
            Reason::JoinIncomplete => "联合查询不满足要求".into(),
            Reason::QueryInputMissing(kind) => format!("{}不包含输入", kind.label(zh)),
            Reason::LogicEmpty(kind) => format!("查询输入{}的逻辑部分不能为空", kind.label(zh)),
            Reason::ConditionListEmpty(kind) => {
                format!("查询输入{}的条件列表不能为空", kind.label(zh))
            }
            Reason::SelectEmpty(kind) => format!("{}的选择部分不能为空", kind.label(zh)),
            Reason::SelectPartiallyEmpty(kind) => format!("{}的选择部分部分为空", kind.label(zh)),
            Reason::OutputNotConnected(kind) => {
                format!("{}不包含到输出元素的连接", kind.label(zh))
            }
            Reason::OutputUnspecified(kind) => format!("{}的输出部分未指定", kind.label(zh)),
            Reason::PartitionNotConnected => "分区不包含到外部流的连接".into(),
            Reason::PartitionWithUnspecified => "分区的选择部分未指定".into(),
            Reason::InnerStreamNotConnected => "内部流不包含一个来自内部查询的连接输入".into(),
        }
    }
}

/// Alert raised once when a full design walk fails.
pub fn design_contains_errors(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Application design contains errors",
        Locale::ZhCn => "流应用设计包含错误",
    }
}
