//! Unified error type shared by the parse and validate phases.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{phase}:{code}] {message}{suffix}", suffix = element_suffix(.element_id))]
pub struct DesignError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub element_id: Option<String>,
}

fn element_suffix(element_id: &Option<String>) -> String {
    match element_id {
        Some(id) => format!(" (element '{}')", id),
        None => String::new(),
    }
}

impl DesignError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        DesignError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            element_id: None,
        }
    }

    pub fn validate(code: &str, message: impl Into<String>, element_id: Option<String>) -> Self {
        DesignError {
            code: code.into(),
            phase: Phase::Validate,
            message: message.into(),
            element_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_element_when_present() {
        let err = DesignError::validate("D003", "Aggregation has no input", Some("agg1".into()));
        assert_eq!(
            err.to_string(),
            "[Validate:D003] Aggregation has no input (element 'agg1')"
        );
    }

    #[test]
    fn display_without_element() {
        let err = DesignError::parse("P001", "bad json");
        assert_eq!(err.to_string(), "[Parse:P001] bad json");
    }
}
