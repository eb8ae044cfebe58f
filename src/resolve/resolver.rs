use crate::{
    config::overrides::OverrideMap,
    field::field_model::FieldDescriptor,
    resolve::{category::Category, faker::Faker, rules::find_rule},
};
use rand::{Rng, rngs::StdRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

pub const DEFAULT_RANGE_MIN: f64 = 0.0;
pub const DEFAULT_RANGE_MAX: f64 = 100.0;

/// Which tier of the resolver produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Override,
    Structural,
    Rule,
    Fallback,
}

/// Outcome of classifying a field. Pure: identical input always classifies the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A profile entry whose key is a substring of the field key.
    Override { key: String, value: String },
    /// The control type alone decides the value.
    Structural(Category),
    /// First matching row of the rule table.
    Rule(Category),
    Fallback(Category),
}

impl Classification {
    pub fn route(&self) -> Route {
        match self {
            Classification::Override { .. } => Route::Override,
            Classification::Structural(_) => Route::Structural,
            Classification::Rule(_) => Route::Rule,
            Classification::Fallback(_) => Route::Fallback,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Classification::Override { .. } => None,
            Classification::Structural(c) | Classification::Rule(c) | Classification::Fallback(c) => Some(*c),
        }
    }
}

/// A resolved value together with how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    pub category: Option<Category>,
    pub value: String,
}

/// Control types whose value does not depend on the key.
pub fn structural_category(input_type: &str) -> Option<Category> {
    let category = match input_type {
        "checkbox" => Category::Checked,
        "range" => Category::RangeMidpoint,
        "color" => Category::HexColor,
        "datetime-local" => Category::LocalDateTime,
        "week" => Category::IsoWeek,
        "search" => Category::SearchPhrase,
        "date" => Category::CalendarDate,
        "month" => Category::YearMonth,
        "time" => Category::TimeOfDay,
        _ => return None,
    };
    Some(category)
}

/// Last tier: numbers get an integer, longer keys a short phrase, the rest one word.
pub fn fallback_category(key: &str, input_type: &str) -> Category {
    if input_type == "number" {
        Category::FallbackNumber
    } else if key.chars().count() > 2 {
        Category::FallbackPhrase
    } else {
        Category::FallbackWord
    }
}

/// `floor((min + max) / 2)` with the usual 0/100 defaults.
pub fn range_midpoint(min: Option<f64>, max: Option<f64>) -> String {
    let min = min.unwrap_or(DEFAULT_RANGE_MIN);
    let max = max.unwrap_or(DEFAULT_RANGE_MAX);
    format!("{}", ((min + max) / 2.0).floor() as i64)
}

/// Classifies fields and synthesizes values for them.
pub struct ValueResolver<R> {
    faker: Faker<R>,
}

impl ValueResolver<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(Faker::from_entropy())
    }
}

impl ValueResolver<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Faker::seeded(seed))
    }
}

impl<R: Rng> ValueResolver<R> {
    pub fn new(faker: Faker<R>) -> Self {
        Self { faker }
    }

    pub fn faker(&mut self) -> &mut Faker<R> {
        &mut self.faker
    }

    /// Decide the tier and category for a field without generating anything.
    pub fn classify(
        &self,
        key: &str,
        input_type: &str,
        tag: &str,
        overrides: Option<&OverrideMap>,
    ) -> Classification {
        let key = key.to_lowercase();

        if let Some((matched, value)) = overrides.and_then(|o| o.lookup(&key)) {
            return Classification::Override {
                key: matched.to_string(),
                value: value.to_string(),
            };
        }

        if let Some(category) = structural_category(input_type) {
            return Classification::Structural(category);
        }

        if let Some(rule) = find_rule(&key, input_type, tag) {
            return Classification::Rule(rule.category);
        }

        Classification::Fallback(fallback_category(&key, input_type))
    }

    /// Produce a value for a field. Never fails.
    pub fn resolve(
        &mut self,
        key: &str,
        input_type: &str,
        tag: &str,
        overrides: Option<&OverrideMap>,
    ) -> String {
        self.resolve_with_bounds(key, input_type, tag, overrides, None, None)
            .value
    }

    /// Like [`ValueResolver::resolve`], honoring the descriptor's range bounds and
    /// reporting the route taken.
    pub fn resolve_field(
        &mut self,
        field: &FieldDescriptor,
        overrides: Option<&OverrideMap>,
    ) -> Resolution {
        self.resolve_with_bounds(
            &field.key,
            &field.input_type,
            field.tag.as_str(),
            overrides,
            field.min,
            field.max,
        )
    }

    fn resolve_with_bounds(
        &mut self,
        key: &str,
        input_type: &str,
        tag: &str,
        overrides: Option<&OverrideMap>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Resolution {
        let classification = self.classify(key, input_type, tag, overrides);
        let route = classification.route();
        let category = classification.category();

        let value = match classification {
            Classification::Override { value, .. } => value,
            Classification::Structural(Category::RangeMidpoint) => range_midpoint(min, max),
            Classification::Structural(c) | Classification::Rule(c) | Classification::Fallback(c) => {
                c.generate(&key.to_lowercase(), &mut self.faker)
            }
        };

        tracing::trace!(key, input_type, ?route, ?category, "resolved");

        Resolution {
            route,
            category,
            value,
        }
    }
}
