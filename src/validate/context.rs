//! Per-call validation context: where to report, in which language, and
//! whether failures raise alerts.

use log::debug;

use crate::config::ValidatorOptions;
use crate::feedback::DesignViewFeedback;
use crate::messages::{Locale, Reason};

pub struct Context<'a> {
    feedback: &'a mut dyn DesignViewFeedback,
    pub locale: Locale,
    pub alerts: bool,
}

impl<'a> Context<'a> {
    pub fn new(feedback: &'a mut dyn DesignViewFeedback, options: &ValidatorOptions) -> Self {
        Context {
            feedback,
            locale: options.locale,
            alerts: options.alerts,
        }
    }

    /// Reborrow with alerts suppressed; highlighting still happens.
    pub fn silenced(&mut self) -> Context<'_> {
        Context {
            feedback: &mut *self.feedback,
            locale: self.locale,
            alerts: false,
        }
    }

    pub fn alert(&mut self, message: &str) {
        if self.alerts {
            self.feedback.error_alert(message);
        }
    }

    pub(crate) fn clear_tooltip(&mut self, element_id: &str) {
        self.feedback.remove_tooltip_error_message(element_id);
    }

    pub(crate) fn clear_highlight(&mut self, element_id: &str) {
        self.feedback.remove_error_highlighter(element_id);
    }

    /// Highlight the element with the reason's message and alert it if enabled.
    pub(crate) fn flag(&mut self, element_id: &str, reason: Reason) {
        let message = reason.message(self.locale);
        debug!(
            "element '{}' is incomplete: [{}] {}",
            element_id,
            reason.code(),
            message
        );
        self.feedback.highlight_error_element(element_id, &message);
        self.alert(&message);
    }

    /// Apply an element-level check result: flag on failure, clear the highlight on success.
    pub(crate) fn settle(&mut self, element_id: &str, result: Result<(), Reason>) -> bool {
        match result {
            Ok(()) => {
                self.clear_highlight(element_id);
                true
            }
            Err(reason) => {
                self.flag(element_id, reason);
                false
            }
        }
    }
}
