use serde_json::Value;
use tempfile::TempDir;

use flash_fill::{
    config::{overrides::OverrideMap, profile::FlashFillConfig},
    field::field_model::ControlTag,
    fill::{
        console::format_console_report,
        filler::FormFiller,
        report::{FillEntry, FillOutcome, FillReport, FillRoute},
    },
    page::{
        adapter::PageAdapter,
        error::PageError,
        page_model::{ControlEvent, ControlRef, PageControl, SelectOption},
        snapshot::SnapshotPage,
    },
    resolve::category::Category,
    trace::{logger::TraceLogger, trace::fingerprint},
};

use crate::common::utils::{field, fixture, resolver};

mod common;

fn filler(seed: u64) -> FormFiller<rand_chacha::ChaCha8Rng> {
    FormFiller::new(resolver(seed))
}

fn signup_page() -> SnapshotPage {
    SnapshotPage::load(fixture("signup_form.json")).unwrap()
}

// =========================================================================
// Full fill over the fixture page
// =========================================================================

#[test]
fn fixture_fill_fills_everything_but_duplicate_radios() {
    let mut page = signup_page();
    let report = filler(1).fill(&mut page, None);

    assert_eq!(report.total, 14);
    assert_eq!(report.filled, 12);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.failed, 0);
    assert!(report.no_failures());

    let skipped: Vec<usize> = report
        .entries
        .iter()
        .filter(|e| matches!(e.outcome, FillOutcome::Skipped(_)))
        .map(|e| e.field_id)
        .collect();
    assert_eq!(skipped, vec![8, 9]);
}

#[test]
fn fixture_fill_writes_expected_shapes() {
    let mut page = signup_page();
    let report = filler(2).fill(&mut page, None);

    let first = report.entry("first_name").unwrap();
    assert_eq!(first.route, Some(FillRoute::Rule));
    assert_eq!(first.category, Some(Category::FirstName));

    assert_eq!(page.value_of(ControlRef(2)), Some("TestPass@123"));
    assert!(page.is_checked(ControlRef(12)), "checkbox is checked");
    assert_eq!(page.value_of(ControlRef(13)), Some("15"), "range midpoint of 10..20");

    let country = page.value_of(ControlRef(10)).unwrap();
    assert!(country == "us" || country == "in", "country select got {:?}", country);

    let email = page.value_of(ControlRef(17)).unwrap();
    assert!(email.contains('@'), "email got {:?}", email);

    let n1: i64 = page.value_of(ControlRef(15)).unwrap().parse().unwrap();
    assert!((1..=100).contains(&n1));

    let checked: Vec<usize> = (7..10).filter(|&i| page.is_checked(ControlRef(i))).collect();
    assert_eq!(checked.len(), 1);
    let gender = report.entry("gender").unwrap();
    assert_eq!(gender.route, Some(FillRoute::Radio));
    assert_eq!(gender.value, Some(format!("checked #{}", checked[0])));
}

#[test]
fn excluded_controls_are_left_alone() {
    let mut page = signup_page();
    filler(3).fill(&mut page, None);

    for index in [3, 4, 5, 6] {
        assert!(page.events(ControlRef(index)).is_empty(), "control {} was touched", index);
    }
    assert_eq!(page.value_of(ControlRef(4)), Some("abc123"));
}

#[test]
fn text_inputs_get_input_then_change() {
    let mut page = signup_page();
    filler(4).fill(&mut page, None);
    assert_eq!(page.events(ControlRef(0)), vec![ControlEvent::Input, ControlEvent::Change]);
    assert_eq!(page.events(ControlRef(10)), vec![ControlEvent::Change]);
}

#[test]
fn overrides_take_the_override_route() {
    let mut page = signup_page();
    let overrides = OverrideMap::new().with("first", "Ada").with("email", "ada@example.test");
    let report = filler(5).fill(&mut page, Some(&overrides));

    let first = report.entry("first_name").unwrap();
    assert_eq!(first.route, Some(FillRoute::Override));
    assert_eq!(first.category, None);
    assert_eq!(page.value_of(ControlRef(0)), Some("Ada"));
    assert_eq!(page.value_of(ControlRef(1)), Some("ada@example.test"));
    assert_eq!(page.value_of(ControlRef(17)), Some("ada@example.test"));
}

#[test]
fn gender_select_lands_on_one_of_its_options() {
    for seed in 0..10 {
        let mut page = SnapshotPage::from_controls(vec![
            PageControl::new("select")
                .with_name("gender")
                .with_options(&[("Male", "Male"), ("Female", "Female")]),
        ]);
        let report = filler(seed).fill(&mut page, None);

        let gender = report.entry("gender").unwrap();
        assert_eq!(gender.outcome, FillOutcome::Filled);
        assert_eq!(gender.route, Some(FillRoute::Rule));
        assert_eq!(gender.category, Some(Category::Gender));

        let value = page.value_of(ControlRef(0)).unwrap();
        assert!(value == "Male" || value == "Female", "seed {} wrote {:?}", seed, value);
        assert_eq!(page.events(ControlRef(0)), vec![ControlEvent::Change]);
    }
}

#[test]
fn same_seed_fills_identically() {
    let mut a = signup_page();
    let mut b = signup_page();
    filler(9).fill(&mut a, None);
    filler(9).fill(&mut b, None);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn filled_snapshot_survives_json_round_trip() {
    let mut page = signup_page();
    filler(6).fill(&mut page, None);

    let reloaded = SnapshotPage::from_json(&page.to_json().unwrap()).unwrap();
    assert_eq!(reloaded.snapshot(), page.snapshot());
    assert!(reloaded.journal().is_empty());
}

#[test]
fn malformed_snapshot_is_a_json_error() {
    let err = SnapshotPage::load(fixture("malformed.json")).unwrap_err();
    assert!(matches!(err, PageError::Json { .. }));

    let err = SnapshotPage::load(fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, PageError::Io { .. }));
}

// =========================================================================
// Config gating
// =========================================================================

#[test]
fn disabled_config_fills_nothing() {
    let mut page = signup_page();
    let config = FlashFillConfig {
        enabled: false,
        ..FlashFillConfig::default()
    };

    assert!(filler(7).fill_with_config(&mut page, &config).is_none());
    assert!(page.journal().is_empty());
}

#[test]
fn enabled_config_applies_active_profile() {
    let mut page = signup_page();
    let mut config = FlashFillConfig::default();
    config
        .set_profile_value("Default", "bio", Value::String("Tester".into()))
        .unwrap();

    let report = filler(8).fill_with_config(&mut page, &config).unwrap();
    assert_eq!(report.entry("bio").unwrap().route, Some(FillRoute::Override));
    assert_eq!(page.value_of(ControlRef(11)), Some("Tester"));
}

// =========================================================================
// Failure handling
// =========================================================================

/// A page whose native setter always fails.
struct BrokenSetter(SnapshotPage);

impl PageAdapter for BrokenSetter {
    fn controls(&self) -> Vec<(ControlRef, PageControl)> {
        self.0.controls()
    }

    fn radio_group(&self, name: &str) -> Vec<ControlRef> {
        self.0.radio_group(name)
    }

    fn options(&self, control: ControlRef) -> Result<Vec<SelectOption>, PageError> {
        self.0.options(control)
    }

    fn set_value(&mut self, control: ControlRef, value: &str) -> Result<(), PageError> {
        self.0.set_value(control, value)
    }

    fn set_native_value(&mut self, control: ControlRef, _value: &str) -> Result<(), PageError> {
        Err(PageError::UnknownControl(control.index()))
    }

    fn set_checked(&mut self, control: ControlRef, checked: bool) -> Result<(), PageError> {
        self.0.set_checked(control, checked)
    }

    fn dispatch(&mut self, control: ControlRef, event: ControlEvent) -> Result<(), PageError> {
        self.0.dispatch(control, event)
    }
}

#[test]
fn write_failures_are_recorded_and_the_fill_continues() {
    let mut page = BrokenSetter(SnapshotPage::from_controls(vec![
        PageControl::input("text").with_name("city"),
        PageControl::new("textarea").with_name("notes"),
    ]));
    let report = filler(10).fill(&mut page, None);

    assert_eq!(report.failed, 1);
    assert_eq!(report.filled, 1);
    assert!(!report.no_failures());
    assert_eq!(
        report.entry("city").unwrap().outcome,
        FillOutcome::Failed("control #0 not found on page".into())
    );
}

// =========================================================================
// Trace file
// =========================================================================

#[test]
fn trace_withholds_sensitive_values_but_keeps_fingerprints() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fill.jsonl");

    let mut page = signup_page();
    let mut f = filler(11).with_tracer(TraceLogger::new(&path));
    f.fill(&mut page, None);

    let content = std::fs::read_to_string(&path).unwrap();
    let events: Vec<Value> = content.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(events.len(), 12, "one event per written field or radio group");

    let password = events.iter().find(|e| e["key"] == "password").unwrap();
    assert!(password.get("value").is_none());
    assert_eq!(password["fingerprint"], fingerprint("TestPass@123"));
    assert_eq!(password["category"], "password");

    let terms = events.iter().find(|e| e["key"] == "terms").unwrap();
    assert_eq!(terms["value"], "true");
    assert_eq!(terms["route"], "structural");
    assert_eq!(terms["outcome"], "filled");

    let steps: Vec<u64> = events.iter().map(|e| e["step"].as_u64().unwrap()).collect();
    assert_eq!(steps, (0..12).collect::<Vec<u64>>());
}

#[test]
fn trace_withholds_overridden_password() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("override.jsonl");

    let mut page = SnapshotPage::from_controls(vec![
        PageControl::input("password").with_name("password"),
        PageControl::input("text").with_name("card_cvv"),
        PageControl::input("text").with_name("city"),
    ]);
    let overrides = OverrideMap::new()
        .with("password", "hunter2-secret")
        .with("cvv", "987")
        .with("city", "Paris");
    let mut f = filler(12).with_tracer(TraceLogger::new(&path));
    f.fill(&mut page, Some(&overrides));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("hunter2-secret"));
    let events: Vec<Value> = content.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(events.len(), 3);

    let password = events.iter().find(|e| e["key"] == "password").unwrap();
    assert_eq!(password["route"], "override");
    assert!(password.get("value").is_none());
    assert_eq!(password["fingerprint"], fingerprint("hunter2-secret"));

    let cvv = events.iter().find(|e| e["key"] == "card_cvv").unwrap();
    assert!(cvv.get("value").is_none(), "a text control matching a secret rule is withheld too");
    assert_eq!(cvv["fingerprint"], fingerprint("987"));

    let city = events.iter().find(|e| e["key"] == "city").unwrap();
    assert_eq!(city["value"], "Paris");
}

#[test]
fn fingerprint_is_sha1_hex() {
    assert_eq!(fingerprint("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn unwritable_trace_path_disables_tracing() {
    let tmp = TempDir::new().unwrap();
    let logger = TraceLogger::new(tmp.path().join("missing").join("trace.jsonl"));
    assert!(!logger.is_enabled());
    assert!(!TraceLogger::disabled().is_enabled());
}

// =========================================================================
// Console report
// =========================================================================

#[test]
fn console_report_lists_entries_and_totals() {
    let email = field("email", "email", ControlTag::Input);
    let gender = field("gender", "radio", ControlTag::Input);
    let notes = field("notes", "textarea", ControlTag::Textarea);

    let report = FillReport::from_entries(vec![
        FillEntry::for_field(&email, FillOutcome::Filled)
            .with_route(FillRoute::Rule, Some(Category::Email))
            .with_value("jane@example.test"),
        FillEntry::for_field(&gender, FillOutcome::Skipped("radio group already filled".into()))
            .with_route(FillRoute::Radio, None),
        FillEntry::for_field(&notes, FillOutcome::Filled)
            .with_route(FillRoute::Rule, Some(Category::LongText))
            .with_value("x".repeat(80) + "\nmore"),
    ]);
    let text = format_console_report(&report);

    assert!(text.starts_with("=== Flash Fill: 3 fields ===\n"));
    assert!(text.contains("rule/email"));
    assert!(text.contains("jane@example.test"));
    assert!(text.contains("- gender"));
    assert!(text.contains("radio group already filled"));
    assert!(text.contains(&format!("{}...", "x".repeat(45))));
    assert!(!text.contains("more"));
    assert!(text.ends_with("=== Results: 2 filled, 1 skipped, 0 failed (3 total) ===\n"));
}

#[test]
fn report_serializes_outcome_with_status_tag() {
    let f = field("city", "text", ControlTag::Input);
    let entry = FillEntry::for_field(&f, FillOutcome::Skipped("excluded type".into()));
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["outcome"]["status"], "skipped");
    assert_eq!(json["outcome"]["reason"], "excluded type");
    assert!(json.get("route").is_none());
}
