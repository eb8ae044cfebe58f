use std::collections::HashSet;

use rand::{Rng, rngs::StdRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::{overrides::OverrideMap, profile::FlashFillConfig},
    field::{collector::collect, field_model::FieldDescriptor},
    fill::report::{FillEntry, FillOutcome, FillReport, FillRoute},
    page::adapter::PageAdapter,
    resolve::{resolver::ValueResolver, rules::find_rule},
    trace::{logger::TraceLogger, trace::FillTraceEvent},
    writer::{
        radio::fill_radio_group,
        writer::{ValueWriter, WriteOutcome},
    },
};

/// Input types the filler never writes to, even if an adapter reports them.
pub const SKIP_TYPES: &[&str] = &["submit", "reset", "button", "image", "file"];

/// Runs one fill pass over a page: collect, resolve, write, report.
pub struct FormFiller<R> {
    resolver: ValueResolver<R>,
    tracer: TraceLogger,
    step: u64,
}

impl FormFiller<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(ValueResolver::from_entropy())
    }
}

impl FormFiller<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ValueResolver::seeded(seed))
    }
}

impl<R: Rng> FormFiller<R> {
    pub fn new(resolver: ValueResolver<R>) -> Self {
        Self {
            resolver,
            tracer: TraceLogger::disabled(),
            step: 0,
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn resolver(&mut self) -> &mut ValueResolver<R> {
        &mut self.resolver
    }

    /// Fill every eligible control. Write failures are recorded, never propagated.
    pub fn fill(&mut self, page: &mut dyn PageAdapter, overrides: Option<&OverrideMap>) -> FillReport {
        let fields = collect(&*page);
        let mut radio_groups: HashSet<String> = HashSet::new();
        let mut entries = Vec::with_capacity(fields.len());

        for field in &fields {
            let entry = if SKIP_TYPES.contains(&field.input_type.as_str()) {
                FillEntry::for_field(field, FillOutcome::Skipped("excluded type".into()))
            } else if field.is_radio() {
                if radio_groups.insert(field.group_name().to_string()) {
                    self.fill_radio(page, field)
                } else {
                    FillEntry::for_field(field, FillOutcome::Skipped("radio group already filled".into()))
                        .with_route(FillRoute::Radio, None)
                }
            } else {
                self.fill_field(page, field, overrides)
            };

            tracing::debug!(key = %entry.key, outcome = %entry.outcome, "field processed");
            entries.push(entry);
        }

        let report = FillReport::from_entries(entries);
        tracing::info!(
            total = report.total,
            filled = report.filled,
            skipped = report.skipped,
            failed = report.failed,
            "fill complete"
        );
        report
    }

    /// Fill with the active profile's overrides; `None` when the config is disabled.
    pub fn fill_with_config(&mut self, page: &mut dyn PageAdapter, config: &FlashFillConfig) -> Option<FillReport> {
        if !config.enabled {
            tracing::info!("flash fill is disabled, skipping");
            return None;
        }
        let overrides = config.overrides();
        Some(self.fill(page, Some(&overrides)))
    }

    fn fill_field(
        &mut self,
        page: &mut dyn PageAdapter,
        field: &FieldDescriptor,
        overrides: Option<&OverrideMap>,
    ) -> FillEntry {
        let resolution = self.resolver.resolve_field(field, overrides);
        let route = FillRoute::from(resolution.route);
        let sensitive = match route {
            FillRoute::Override => is_sensitive_field(field),
            _ => field.input_type == "password" || resolution.category.is_some_and(|c| c.is_sensitive()),
        };

        let written = ValueWriter::apply(page, field, &resolution.value, self.resolver.faker().rng());

        let entry = FillEntry::for_field(field, FillOutcome::Filled).with_route(route, resolution.category);
        let entry = match written {
            Ok(WriteOutcome::Written(value)) => entry.with_value(value),
            Ok(WriteOutcome::Untouched) => FillEntry {
                outcome: FillOutcome::Skipped("no usable option".into()),
                ..entry
            },
            Err(e) => {
                tracing::warn!(key = %field.key, error = %e, "could not write field");
                FillEntry {
                    outcome: FillOutcome::Failed(e.to_string()),
                    ..entry
                }
            }
        };

        let event = FillTraceEvent::now(self.next_step(), field)
            .with_route(route)
            .with_category(resolution.category)
            .with_value(entry.value.as_deref().unwrap_or(&resolution.value), sensitive)
            .with_outcome(&entry.outcome);
        self.tracer.log(&event);

        entry
    }

    fn fill_radio(&mut self, page: &mut dyn PageAdapter, field: &FieldDescriptor) -> FillEntry {
        let entry = FillEntry::for_field(field, FillOutcome::Filled).with_route(FillRoute::Radio, None);

        let entry = match fill_radio_group(page, field.group_name(), self.resolver.faker().rng()) {
            Ok(Some(checked)) => entry.with_value(format!("checked #{}", checked.index())),
            Ok(None) => FillEntry {
                outcome: FillOutcome::Skipped("empty radio group".into()),
                ..entry
            },
            Err(e) => {
                tracing::warn!(group = field.group_name(), error = %e, "could not check radio");
                FillEntry {
                    outcome: FillOutcome::Failed(e.to_string()),
                    ..entry
                }
            }
        };

        let mut event = FillTraceEvent::now(self.next_step(), field)
            .with_route(FillRoute::Radio)
            .with_outcome(&entry.outcome);
        if let Some(value) = &entry.value {
            event = event.with_value(value, false);
        }
        self.tracer.log(&event);

        entry
    }

    fn next_step(&mut self) -> u64 {
        let step = self.step;
        self.step += 1;
        step
    }
}

/// Whether a field holds a secret regardless of where its value came from.
///
/// Override values carry no category, so the rule the field would otherwise match decides.
fn is_sensitive_field(field: &FieldDescriptor) -> bool {
    field.input_type == "password"
        || find_rule(&field.key, &field.input_type, field.tag.as_str()).is_some_and(|rule| rule.category.is_sensitive())
}
