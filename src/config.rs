//! Validator options supplied by the host page.

use serde::{Deserialize, Serialize};

use crate::error::DesignError;
use crate::messages::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorOptions {
    pub locale: Locale,
    /// When false, failures only highlight elements; no alert is raised.
    pub alerts: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        ValidatorOptions {
            locale: Locale::En,
            alerts: true,
        }
    }
}

impl ValidatorOptions {
    /// Empty or whitespace-only input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, Vec<DesignError>> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str::<ValidatorOptions>(json).map_err(|e| {
            vec![DesignError::parse(
                "P003",
                format!("Failed to parse validator options JSON: {}", e),
            )]
        })
    }

    pub fn silent(self) -> Self {
        ValidatorOptions {
            alerts: false,
            ..self
        }
    }
}
