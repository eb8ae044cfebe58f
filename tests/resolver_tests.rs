use chrono::{Datelike, NaiveDate};
use regex::Regex;

use flash_fill::{
    config::overrides::OverrideMap,
    field::field_model::ControlTag,
    resolve::{
        category::Category,
        faker::{aba_valid, iban_valid, luhn_valid, slugify, vin_valid},
        resolver::{Classification, Route, fallback_category, range_midpoint},
        rules::{RULES, find_rule},
    },
};

use crate::common::utils::{faker, field, pinned_now, resolver};

mod common;

fn category_of(key: &str, input_type: &str, tag: &str) -> Option<Category> {
    resolver(1).classify(key, input_type, tag, None).category()
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

// =========================================================================
// Tier ordering
// =========================================================================

#[test]
fn override_beats_every_other_tier() {
    let overrides = OverrideMap::new().with("Email", "fixed@example.com");
    let mut r = resolver(7);

    let c = r.classify("Work_Email", "email", "input", Some(&overrides));
    assert_eq!(
        c,
        Classification::Override {
            key: "Email".into(),
            value: "fixed@example.com".into()
        }
    );
    assert_eq!(r.resolve("work_email", "checkbox", "input", Some(&overrides)), "fixed@example.com");
}

#[test]
fn overrides_are_tried_in_declaration_order() {
    let overrides = OverrideMap::new().with("name", "A").with("first", "B");
    let mut r = resolver(7);
    assert_eq!(r.resolve("first_name", "text", "input", Some(&overrides)), "A");
}

#[test]
fn empty_override_key_fills_every_field() {
    let overrides: OverrideMap = [("", "EVERYTHING")].into_iter().collect();
    let mut r = resolver(7);
    assert_eq!(r.resolve("email", "email", "input", Some(&overrides)), "EVERYTHING");
    assert_eq!(r.resolve("volume", "range", "input", Some(&overrides)), "EVERYTHING");
    assert_eq!(r.classify("unknown", "text", "input", Some(&overrides)).route(), Route::Override);
}

#[test]
fn structural_type_beats_keyword_rules() {
    let mut r = resolver(3);
    assert_eq!(
        r.classify("email", "checkbox", "input", None),
        Classification::Structural(Category::Checked)
    );
    assert_eq!(r.resolve("email", "checkbox", "input", None), "true");
    assert_eq!(r.resolve("quantity", "range", "input", None), "50");
}

#[test]
fn keyword_rules_follow_table_order() {
    // "username" contains "name", and the full-name rule sits earlier in the table.
    assert_eq!(category_of("username", "text", "input"), Some(Category::FullName));
    // "addr" belongs to the email rule, which precedes every address rule.
    assert_eq!(category_of("ip_address", "text", "input"), Some(Category::Email));
    assert_eq!(category_of("first_name", "text", "input"), Some(Category::FirstName));
    assert_eq!(category_of("card_number", "text", "input"), Some(Category::CardNumber));
    assert_eq!(category_of("gender", "text", "input"), Some(Category::Gender));
}

#[test]
fn rule_matches_on_type_or_tag_without_keywords() {
    assert_eq!(category_of("zz", "tel", "input"), Some(Category::Phone));
    assert_eq!(category_of("zz", "url", "input"), Some(Category::WebUrl));
    assert_eq!(category_of("zz", "password", "input"), Some(Category::Password));
    assert_eq!(category_of("zz", "textarea", "textarea"), Some(Category::LongText));
}

#[test]
fn fallback_depends_on_type_and_key_length() {
    let mut r = resolver(11);

    assert_eq!(r.classify("n1", "number", "input", None), Classification::Fallback(Category::FallbackNumber));
    let n: i64 = r.resolve("n1", "number", "input", None).parse().unwrap();
    assert!((1..=100).contains(&n));

    let phrase = r.resolve("xyz123", "text", "input", None);
    assert_eq!(phrase.split(' ').count(), 2, "got {:?}", phrase);

    let word = r.resolve("a", "text", "input", None);
    assert!(!word.is_empty() && !word.contains(' '), "got {:?}", word);

    assert_eq!(fallback_category("ab", "text"), Category::FallbackWord);
    assert_eq!(fallback_category("äöü", "text"), Category::FallbackPhrase);
}

#[test]
fn unknown_key_resolves_through_fallback() {
    let mut r = resolver(5);
    let c = r.classify("unknown", "text", "input", None);
    assert_eq!(c.route(), Route::Fallback);
    assert!(!r.resolve("unknown", "text", "input", None).is_empty());
}

#[test]
fn classification_is_stable_across_seeds() {
    for key in ["email", "first_name", "card_cvv", "delivery_date", "xyz123"] {
        let a = resolver(1).classify(key, "text", "input", None);
        let b = resolver(999).classify(key, "text", "input", None);
        assert_eq!(a, b, "classification of {:?} depends on randomness", key);
    }
}

#[test]
fn same_seed_and_clock_give_same_values() {
    let mut a = resolver(42);
    let mut b = resolver(42);
    for key in ["email", "full_name", "iban", "dob", "bio", "vin"] {
        assert_eq!(
            a.resolve(key, "text", "input", None),
            b.resolve(key, "text", "input", None)
        );
    }
}

#[test]
fn find_rule_returns_first_row() {
    let rule = find_rule("email_address", "text", "input").unwrap();
    assert_eq!(rule.category, Category::Email);
    assert_eq!(RULES[0].category, Category::BirthDate);
}

// =========================================================================
// Structural formats
// =========================================================================

#[test]
fn range_midpoint_uses_bounds_and_defaults() {
    assert_eq!(range_midpoint(None, None), "50");
    assert_eq!(range_midpoint(Some(10.0), Some(20.0)), "15");
    assert_eq!(range_midpoint(Some(1.0), Some(4.0)), "2");

    let mut f = field("volume", "range", ControlTag::Input);
    f.min = Some(0.0);
    f.max = Some(7.0);
    let res = resolver(1).resolve_field(&f, None);
    assert_eq!(res.value, "3");
    assert_eq!(res.route, Route::Structural);
    assert_eq!(res.category, Some(Category::RangeMidpoint));
}

#[test]
fn temporal_types_have_fixed_shapes() {
    let mut r = resolver(21);
    let cases = [
        ("datetime-local", r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}$"),
        ("date", r"^\d{4}-\d{2}-\d{2}$"),
        ("month", r"^\d{4}-(0[1-9]|1[0-2])$"),
        ("week", r"^\d{4}-W\d{2}$"),
        ("time", r"^([01]\d|2[0-3]):[0-5]\d$"),
        ("color", r"^#[0-9a-f]{6}$"),
    ];
    for (input_type, pattern) in cases {
        let re = Regex::new(pattern).unwrap();
        for _ in 0..20 {
            let value = r.resolve("field", input_type, "input", None);
            assert!(re.is_match(&value), "{} produced {:?}", input_type, value);
        }
    }
}

#[test]
fn search_type_gives_two_words() {
    let value = resolver(2).resolve("q", "search", "input", None);
    assert_eq!(value.split(' ').count(), 2);
}

#[test]
fn birth_dates_fall_between_18_and_65_years_ago() {
    let mut r = resolver(8);
    let today = pinned_now().date();
    for key in ["dob", "date_of_birth", "anything"] {
        for _ in 0..50 {
            let date = parse_date(&r.resolve(key, "date", "input", None));
            let age = today.years_since(date).unwrap();
            assert!((18..=65).contains(&age), "{} gave age {}", key, age);
        }
    }
}

#[test]
fn date_keys_naming_future_or_past_events_move_accordingly() {
    let mut r = resolver(9);
    let today = pinned_now().date();
    for _ in 0..30 {
        let delivery = parse_date(&r.resolve("delivery_date", "date", "input", None));
        assert!(delivery > today && delivery <= today + chrono::Duration::days(365));

        let start = parse_date(&r.resolve("start_date", "date", "input", None));
        assert!(start < today && start >= today - chrono::Duration::days(365));
    }
}

#[test]
fn birth_keywords_without_date_type_still_give_birth_dates() {
    let value = resolver(4).resolve("birthday", "text", "input", None);
    let age = pinned_now().date().years_since(parse_date(&value)).unwrap();
    assert!((18..=65).contains(&age));
}

// =========================================================================
// Category formats
// =========================================================================

#[test]
fn finance_values_pass_their_checksums() {
    let mut r = resolver(13);
    for _ in 0..25 {
        let card = r.resolve("card_number", "text", "input", None);
        assert!(luhn_valid(&card), "card {}", card);

        let iban = r.resolve("iban", "text", "input", None);
        assert!(iban_valid(&iban), "iban {}", iban);

        let routing = r.resolve("routing_number", "text", "input", None);
        assert_eq!(routing.len(), 9);
        assert!(aba_valid(&routing), "routing {}", routing);

        let vin = r.resolve("vin", "text", "input", None);
        assert_eq!(vin.len(), 17);
        assert!(!vin.contains(['I', 'O', 'Q']));
        assert!(vin_valid(&vin), "vin {}", vin);
    }
}

#[test]
fn card_expiry_is_mm_yy_in_the_next_five_years() {
    let mut r = resolver(17);
    let re = Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap();
    let this_year = pinned_now().year() % 100;
    for _ in 0..30 {
        let value = r.resolve("card_expiry", "text", "input", None);
        assert!(re.is_match(&value), "expiry {:?}", value);
        let yy: i32 = value[3..].parse().unwrap();
        assert!((this_year + 1..=this_year + 5).contains(&yy), "expiry {:?}", value);
    }
}

#[test]
fn cvv_length_depends_on_key() {
    let mut r = resolver(19);
    let cvv = r.resolve("cvv", "text", "input", None);
    assert!(cvv.len() == 3 && cvv.chars().all(|c| c.is_ascii_digit()));

    let cid = r.resolve("card_cid", "text", "input", None);
    assert!(cid.len() == 4 && cid.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn contact_and_location_shapes() {
    let mut r = resolver(23);
    let email = Regex::new(r"^[a-z0-9._]+@[a-z0-9.-]+\.[a-z]+$").unwrap();
    let zip = Regex::new(r"^\d{5}$").unwrap();

    for _ in 0..20 {
        let value = r.resolve("email_address", "text", "input", None);
        assert!(email.is_match(&value), "email {:?}", value);

        let value = r.resolve("zip_code", "text", "input", None);
        assert!(zip.is_match(&value), "zip {:?}", value);

        let lat: f64 = r.resolve("latitude", "text", "input", None).parse().unwrap();
        assert!((-90.0..=90.0).contains(&lat));

        let lng: f64 = r.resolve("longitude", "text", "input", None).parse().unwrap();
        assert!((-180.0..=180.0).contains(&lng));
    }
}

#[test]
fn numeric_categories_stay_in_range() {
    let mut r = resolver(29);
    for _ in 0..50 {
        let age: i64 = r.resolve("age", "text", "input", None).parse().unwrap();
        assert!((18..=75).contains(&age));

        let qty: i64 = r.resolve("quantity", "text", "input", None).parse().unwrap();
        assert!((1..=100).contains(&qty));
    }
}

#[test]
fn profile_urls_follow_platform_paths() {
    let mut r = resolver(31);
    let cases = [
        ("github_url", "https://github.com/"),
        ("linkedin", "https://linkedin.com/in/"),
        ("twitter_url", "https://x.com/"),
        ("youtube_channel_url", "https://youtube.com/@"),
        ("stackoverflow_url", "https://stackoverflow.com/users/"),
    ];
    for (key, prefix) in cases {
        let value = r.resolve(key, "url", "input", None);
        assert!(value.starts_with(prefix), "{} gave {:?}", key, value);
        assert!(value.len() > prefix.len());
    }

    let generic = r.resolve("website", "url", "input", None);
    assert!(generic.starts_with("https://"), "got {:?}", generic);
}

#[test]
fn long_text_is_refined_by_key() {
    let mut r = resolver(37);

    let letter = r.resolve("cover_letter", "textarea", "textarea", None);
    assert!(letter.starts_with("Dear Hiring Manager,\n\n"));
    assert!(letter.contains("\n\nSincerely,\n"));

    let note = r.resolve("notes", "textarea", "textarea", None);
    assert!(!note.is_empty());

    let about = r.resolve("about_me", "textarea", "textarea", None);
    assert!(!about.is_empty());
}

#[test]
fn every_rule_category_generates_a_value() {
    let mut f = faker(41);
    for rule in RULES {
        let key = rule.keywords.first().copied().unwrap_or("field");
        let value = rule.category.generate(key, &mut f);
        assert!(!value.is_empty(), "{} produced an empty value", rule.category);
    }
}

#[test]
fn category_display_is_snake_case() {
    assert_eq!(Category::CardCvv.to_string(), "card_cvv");
    assert_eq!(Category::FirstName.to_string(), "first_name");
    assert_eq!(Category::Ipv4.to_string(), "ipv4");
    assert!(Category::Password.is_sensitive());
    assert!(!Category::City.is_sensitive());
}

#[test]
fn category_name_matches_serialized_form() {
    for category in [Category::CardCvv, Category::Ipv4, Category::RangeMidpoint, Category::Ipv6] {
        assert_eq!(serde_json::to_value(category).unwrap(), category.as_str());
        assert_eq!(category.to_string(), category.as_str());
    }
}

#[test]
fn range_midpoint_category_uses_default_bounds() {
    let mut f = faker(3);
    assert_eq!(Category::RangeMidpoint.generate("volume", &mut f), range_midpoint(None, None));
    assert_eq!(Category::RangeMidpoint.generate("volume", &mut f), "50");
}

// =========================================================================
// Checksum helpers
// =========================================================================

#[test]
fn luhn_accepts_known_test_number() {
    assert!(luhn_valid("4111111111111111"));
    assert!(!luhn_valid("4111111111111112"));
}

#[test]
fn iban_accepts_reference_examples() {
    assert!(iban_valid("GB82WEST12345698765432"));
    assert!(iban_valid("DE89370400440532013000"));
    assert!(!iban_valid("GB82WEST12345698765433"));
}

#[test]
fn aba_accepts_known_routing_number() {
    assert!(aba_valid("011000015"));
    assert!(!aba_valid("011000016"));
}

#[test]
fn vin_accepts_reference_example() {
    assert!(vin_valid("1M8GDM9AXKP042788"));
    assert!(!vin_valid("1M8GDM9A1KP042788"));
}

#[test]
fn slugify_drops_punctuation() {
    assert_eq!(slugify("Hello  World, again!"), "hello-world-again");
}
