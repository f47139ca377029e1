//! UI side channel the validator reports through.
//!
//! The designer renders error state on canvas elements (a CSS class plus a
//! tooltip) and shows alerts. The validator never touches the DOM; it calls a
//! `DesignViewFeedback` implementation keyed by element id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub trait DesignViewFeedback {
    fn error_alert(&mut self, message: &str);
    fn highlight_error_element(&mut self, element_id: &str, message: &str);
    fn remove_error_highlighter(&mut self, element_id: &str);
    fn remove_tooltip_error_message(&mut self, element_id: &str);
}

// =============================================================================
// Recording implementation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeedbackEvent {
    #[serde(rename_all = "camelCase")]
    Alert { message: String },
    #[serde(rename_all = "camelCase")]
    Highlight { element_id: String, message: String },
    #[serde(rename_all = "camelCase")]
    RemoveHighlight { element_id: String },
    #[serde(rename_all = "camelCase")]
    ClearTooltip { element_id: String },
}

/// Records every side-channel call in order.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    pub events: Vec<FeedbackEvent>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FeedbackEvent::Alert { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn highlights(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FeedbackEvent::Highlight {
                    element_id,
                    message,
                } => Some((element_id.as_str(), message.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn removed_highlights(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FeedbackEvent::RemoveHighlight { element_id } => Some(element_id.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DesignViewFeedback for FeedbackLog {
    fn error_alert(&mut self, message: &str) {
        self.events.push(FeedbackEvent::Alert {
            message: message.to_string(),
        });
    }

    fn highlight_error_element(&mut self, element_id: &str, message: &str) {
        self.events.push(FeedbackEvent::Highlight {
            element_id: element_id.to_string(),
            message: message.to_string(),
        });
    }

    fn remove_error_highlighter(&mut self, element_id: &str) {
        self.events.push(FeedbackEvent::RemoveHighlight {
            element_id: element_id.to_string(),
        });
    }

    fn remove_tooltip_error_message(&mut self, element_id: &str) {
        self.events.push(FeedbackEvent::ClearTooltip {
            element_id: element_id.to_string(),
        });
    }
}

// =============================================================================
// Rendered-state implementation
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementErrorState {
    pub error_element: bool,
    pub tooltip: String,
}

/// What the canvas would show after the calls: error class and tooltip per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    pub elements: BTreeMap<String, ElementErrorState>,
    pub alerts: Vec<String>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self, element_id: &str) -> bool {
        self.elements
            .get(element_id)
            .is_some_and(|state| state.error_element)
    }

    pub fn tooltip(&self, element_id: &str) -> Option<&str> {
        self.elements
            .get(element_id)
            .map(|state| state.tooltip.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Highlighted element ids with their tooltip, in id order.
    pub fn highlighted(&self) -> Vec<(&str, &str)> {
        self.elements
            .iter()
            .filter(|(_, state)| state.error_element)
            .map(|(id, state)| (id.as_str(), state.tooltip.as_str()))
            .collect()
    }
}

impl DesignViewFeedback for HighlightState {
    fn error_alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn highlight_error_element(&mut self, element_id: &str, message: &str) {
        let state = self.elements.entry(element_id.to_string()).or_default();
        state.error_element = true;
        state.tooltip = message.to_string();
    }

    fn remove_error_highlighter(&mut self, element_id: &str) {
        if let Some(state) = self.elements.get_mut(element_id) {
            state.error_element = false;
        }
    }

    fn remove_tooltip_error_message(&mut self, element_id: &str) {
        if let Some(state) = self.elements.get_mut(element_id) {
            state.tooltip.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_idempotent() {
        let mut state = HighlightState::new();
        state.highlight_error_element("q1", "broken");
        let once = state.clone();
        state.highlight_error_element("q1", "broken");
        assert_eq!(state, once);
        assert!(state.is_highlighted("q1"));
        assert_eq!(state.tooltip("q1"), Some("broken"));
    }

    #[test]
    fn removing_unknown_highlight_is_noop() {
        let mut state = HighlightState::new();
        state.remove_error_highlighter("missing");
        state.remove_tooltip_error_message("missing");
        assert!(state.elements.is_empty());
    }

    #[test]
    fn clear_tooltip_keeps_error_class() {
        let mut state = HighlightState::new();
        state.highlight_error_element("p1", "no partition key");
        state.remove_tooltip_error_message("p1");
        assert!(state.is_highlighted("p1"));
        assert_eq!(state.tooltip("p1"), None);
        state.remove_error_highlighter("p1");
        assert!(state.highlighted().is_empty());
    }

    #[test]
    fn log_filters_by_event_kind() {
        let mut log = FeedbackLog::new();
        log.remove_tooltip_error_message("a");
        log.highlight_error_element("a", "bad");
        log.error_alert("bad");
        log.remove_error_highlighter("b");
        assert_eq!(log.alerts(), vec!["bad"]);
        assert_eq!(log.highlights(), vec![("a", "bad")]);
        assert_eq!(log.removed_highlights(), vec!["b"]);
    }
}
