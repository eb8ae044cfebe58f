use std::fmt;

use serde::Serialize;

use crate::{
    field::field_model::{ControlTag, FieldDescriptor},
    resolve::{category::Category, resolver::Route},
};

// ============================================================================
// Fill report: one entry per processed field
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRoute {
    Override,
    Structural,
    Rule,
    Fallback,
    Radio,
}

impl From<Route> for FillRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Override => FillRoute::Override,
            Route::Structural => FillRoute::Structural,
            Route::Rule => FillRoute::Rule,
            Route::Fallback => FillRoute::Fallback,
        }
    }
}

impl fmt::Display for FillRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FillRoute::Override => "override",
            FillRoute::Structural => "structural",
            FillRoute::Rule => "rule",
            FillRoute::Fallback => "fallback",
            FillRoute::Radio => "radio",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum FillOutcome {
    Filled,
    Skipped(String),
    Failed(String),
}

impl fmt::Display for FillOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillOutcome::Filled => f.write_str("filled"),
            FillOutcome::Skipped(reason) => write!(f, "skipped: {}", reason),
            FillOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillEntry {
    /// Position of the control on the page.
    pub field_id: usize,
    pub key: String,
    pub input_type: String,
    pub tag: ControlTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<FillRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// What actually landed in the control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub outcome: FillOutcome,
}

impl FillEntry {
    pub fn for_field(field: &FieldDescriptor, outcome: FillOutcome) -> Self {
        Self {
            field_id: field.control.index(),
            key: field.key.clone(),
            input_type: field.input_type.clone(),
            tag: field.tag,
            route: None,
            category: None,
            value: None,
            outcome,
        }
    }

    pub fn with_route(mut self, route: FillRoute, category: Option<Category>) -> Self {
        self.route = Some(route);
        self.category = category;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Aggregated result of one fill pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FillReport {
    pub total: usize,
    pub filled: usize,
    pub skipped: usize,
    pub failed: usize,
    pub entries: Vec<FillEntry>,
}

impl FillReport {
    pub fn from_entries(entries: Vec<FillEntry>) -> Self {
        let count = |pred: fn(&FillOutcome) -> bool| entries.iter().filter(|e| pred(&e.outcome)).count();
        Self {
            total: entries.len(),
            filled: count(|o| matches!(o, FillOutcome::Filled)),
            skipped: count(|o| matches!(o, FillOutcome::Skipped(_))),
            failed: count(|o| matches!(o, FillOutcome::Failed(_))),
            entries,
        }
    }

    pub fn entry(&self, key: &str) -> Option<&FillEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn no_failures(&self) -> bool {
        self.failed == 0
    }
}
