//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::config::ValidatorOptions;
use crate::error::DesignError;
use crate::feedback::{DesignViewFeedback, FeedbackEvent, FeedbackLog, HighlightState};
use crate::validate::Context;

/// Validate a design: parse + short-circuit validation.
/// Returns a JSON object with the verdict and the highlight/alert effects to apply.
#[wasm_bindgen]
pub fn validate_design(app_json: &str, connections_json: &str, options_json: &str) -> JsValue {
    let result = validate_design_inner(app_json, connections_json, options_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_design_inner(app_json: &str, connections_json: &str, options_json: &str) -> ValidateResult {
    let options = match ValidatorOptions::from_json(options_json) {
        Ok(o) => o,
        Err(errors) => {
            return ValidateResult::Errors {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
            };
        }
    };

    let (graph, connections) = match crate::parse::parse_and_build(app_json, connections_json) {
        Ok(parsed) => parsed,
        Err(errors) => {
            return ValidateResult::Errors {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
            };
        }
    };

    let mut effects = Effects::default();
    let valid = {
        let mut ctx = Context::new(&mut effects, &options);
        crate::validate::validate(&graph, &connections, &mut ctx)
    };

    let report = ReportDto {
        alerts: effects.state.alerts.clone(),
        highlighted: effects
            .state
            .highlighted()
            .into_iter()
            .map(|(id, message)| HighlightDto {
                element_id: id.to_string(),
                message: message.to_string(),
            })
            .collect(),
        events: effects.log.events,
    };

    if valid {
        ValidateResult::Valid(report)
    } else {
        ValidateResult::Invalid(report)
    }
}

/// Collect every incomplete element without short-circuiting.
/// Returns a JSON array of error objects.
#[wasm_bindgen]
pub fn audit_design(app_json: &str, connections_json: &str, options_json: &str) -> JsValue {
    let result = audit_design_inner(app_json, connections_json, options_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn audit_design_inner(app_json: &str, connections_json: &str, options_json: &str) -> Vec<ErrorDto> {
    let options = match ValidatorOptions::from_json(options_json) {
        Ok(o) => o,
        Err(errors) => return errors.into_iter().map(ErrorDto::from).collect(),
    };

    let (graph, connections) = match crate::parse::parse_and_build(app_json, connections_json) {
        Ok(parsed) => parsed,
        Err(errors) => return errors.into_iter().map(ErrorDto::from).collect(),
    };

    crate::validate::audit(&graph, &connections, options.locale)
        .into_iter()
        .map(ErrorDto::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Feedback sink that keeps both the call log and the resulting state
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Effects {
    log: FeedbackLog,
    state: HighlightState,
}

impl DesignViewFeedback for Effects {
    fn error_alert(&mut self, message: &str) {
        self.log.error_alert(message);
        self.state.error_alert(message);
    }

    fn highlight_error_element(&mut self, element_id: &str, message: &str) {
        self.log.highlight_error_element(element_id, message);
        self.state.highlight_error_element(element_id, message);
    }

    fn remove_error_highlighter(&mut self, element_id: &str) {
        self.log.remove_error_highlighter(element_id);
        self.state.remove_error_highlighter(element_id);
    }

    fn remove_tooltip_error_message(&mut self, element_id: &str) {
        self.log.remove_tooltip_error_message(element_id);
        self.state.remove_tooltip_error_message(element_id);
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    element_id: Option<String>,
}

impl From<DesignError> for ErrorDto {
    fn from(e: DesignError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            element_id: e.element_id,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct HighlightDto {
    element_id: String,
    message: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ReportDto {
    alerts: Vec<String>,
    highlighted: Vec<HighlightDto>,
    events: Vec<FeedbackEvent>,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ValidateResult {
    #[serde(rename = "valid")]
    Valid(ReportDto),
    #[serde(rename = "invalid")]
    Invalid(ReportDto),
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
