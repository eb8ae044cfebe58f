use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{field::field_model::FieldDescriptor, resolve::category::Category};

/// One line of the fill trace: how a single field was resolved and written.
#[derive(Debug, Serialize)]
pub struct FillTraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub field_id: usize,
    pub key: String,
    pub input_type: String,
    pub tag: String,

    pub route: Option<String>,
    pub category: Option<String>,

    /// SHA-1 of the written value, present even when the value itself is withheld.
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    pub outcome: Option<String>,
}

impl FillTraceEvent {
    pub fn now(step: u64, field: &FieldDescriptor) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            field_id: field.control.index(),
            key: field.key.clone(),
            input_type: field.input_type.clone(),
            tag: field.tag.as_str().to_string(),
            route: None,
            category: None,
            fingerprint: None,
            value: None,
            outcome: None,
        }
    }

    pub fn with_route(mut self, route: impl ToString) -> Self {
        self.route = Some(route.to_string());
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category.map(|c| c.to_string());
        self
    }

    /// Record the value's fingerprint, and the value itself unless it is sensitive.
    pub fn with_value(mut self, value: &str, sensitive: bool) -> Self {
        self.fingerprint = Some(fingerprint(value));
        if !sensitive {
            self.value = Some(value.to_string());
        }
        self
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = Some(outcome.to_string());
        self
    }
}

/// Lowercase hex SHA-1 of `value`.
pub fn fingerprint(value: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
