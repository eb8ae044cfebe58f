use serde_json::{Value, json};
use tempfile::TempDir;

use flash_fill::config::{
    error::ConfigError,
    overrides::{OverrideMap, coerce_value},
    profile::{DEFAULT_PROFILE_NAME, FlashFillConfig, Profile, STORAGE_KEY},
    storage::{ConfigStore, FileStore, MemoryStore, load_config, save_config},
};

fn stored(blob: &str) -> MemoryStore {
    MemoryStore::new().with_entry(STORAGE_KEY, blob)
}

fn config_with(names: &[&str]) -> FlashFillConfig {
    FlashFillConfig {
        profiles: names.iter().map(|n| Profile::new(n)).collect(),
        active_profile_index: 0,
        enabled: true,
    }
}

// =========================================================================
// Override map
// =========================================================================

#[test]
fn coerce_value_stringifies_every_json_kind() {
    assert_eq!(coerce_value(&json!("Ada")), "Ada");
    assert_eq!(coerce_value(&json!(42)), "42");
    assert_eq!(coerce_value(&json!(1.5)), "1.5");
    assert_eq!(coerce_value(&json!(true)), "true");
    assert_eq!(coerce_value(&Value::Null), "null");
    assert_eq!(coerce_value(&json!([1, "a", [2, 3], null])), "1,a,2,3,");
    assert_eq!(coerce_value(&json!({"a": 1})), r#"{"a":1}"#);
}

#[test]
fn lookup_returns_first_declared_substring_match() {
    let data = json!({"Phone": "555-0100", "name": "Ada", "first_name": "Grace"});
    let map = OverrideMap::from_json_object(data.as_object().unwrap());

    assert_eq!(map.len(), 3);
    assert_eq!(map.lookup("first_name"), Some(("name", "Ada")));
    assert_eq!(map.lookup("mobile_phone"), Some(("Phone", "555-0100")));
    assert_eq!(map.lookup("email"), None);
}

#[test]
fn empty_override_key_matches_every_field() {
    let map: OverrideMap = [("", "everything"), ("city", "Paris")].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.lookup("zip"), Some(("", "everything")));
    assert_eq!(map.lookup("city"), Some(("", "everything")), "declared first, so it wins");
    assert_eq!(map.lookup("unknown"), Some(("", "everything")));

    let later: OverrideMap = [("city", "Paris"), ("", "everything")].into_iter().collect();
    assert_eq!(later.lookup("home_city"), Some(("city", "Paris")));
    assert_eq!(later.lookup("email"), Some(("", "everything")));
}

// =========================================================================
// Loading and saving
// =========================================================================

#[test]
fn missing_config_yields_default() {
    let config = load_config(&MemoryStore::new());
    assert_eq!(config, FlashFillConfig::default());
    assert_eq!(config.profiles.len(), 1);
    assert_eq!(config.profiles[0].name, DEFAULT_PROFILE_NAME);
    assert!(config.enabled);
    assert!(config.overrides().is_empty());
}

#[test]
fn corrupt_config_yields_default() {
    assert_eq!(load_config(&stored("{not json")), FlashFillConfig::default());
    assert_eq!(
        load_config(&stored(r#"{"profiles": [], "activeProfileIndex": 0}"#)),
        FlashFillConfig::default()
    );
    assert_eq!(
        load_config(&stored(r#"{"profiles": [{"name": "A"}], "active_profile_index": -1}"#)),
        FlashFillConfig::default()
    );
}

#[test]
fn out_of_range_index_falls_back_to_first_profile() {
    let blob = r#"{
        "profiles": [
            {"name": "Work", "data": {"email": "me@work.test"}},
            {"name": "Home", "data": {}}
        ],
        "active_profile_index": 9,
        "enabled": false
    }"#;
    let config = load_config(&stored(blob));

    assert!(!config.enabled);
    assert_eq!(config.active_profile().unwrap().name, "Work");
    assert_eq!(config.overrides().lookup("email"), Some(("email", "me@work.test")));
}

#[test]
fn missing_enabled_flag_defaults_to_true() {
    let config = load_config(&stored(r#"{"profiles": [{"name": "Solo", "data": {"a": 1}}]}"#));
    assert!(config.enabled);
    assert_eq!(config.active_profile_index, 0);
    assert_eq!(config.overrides().lookup("a"), Some(("a", "1")));
}

#[test]
fn file_store_round_trips_through_a_directory() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::new(tmp.path().join("nested").join("store"));

    assert_eq!(store.read(STORAGE_KEY).unwrap(), None);

    let mut config = config_with(&["Default", "QA"]);
    config.select_profile("QA").unwrap();
    config.set_profile_value("QA", "email", json!("qa@example.com")).unwrap();
    save_config(&mut store, &config).unwrap();

    assert!(store.path_for(STORAGE_KEY).exists());
    assert_eq!(load_config(&store), config);
}

#[test]
fn file_store_read_error_is_reported() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(tmp.path());
    std::fs::create_dir(store.path_for(STORAGE_KEY)).unwrap();

    let err = store.read(STORAGE_KEY).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(load_config(&store), FlashFillConfig::default());
}

// =========================================================================
// Profile management
// =========================================================================

#[test]
fn add_profile_rejects_duplicates() {
    let mut config = FlashFillConfig::default();
    assert_eq!(config.add_profile("QA").unwrap(), 1);
    assert!(matches!(config.add_profile("QA"), Err(ConfigError::DuplicateProfile(n)) if n == "QA"));
}

#[test]
fn select_unknown_profile_fails() {
    let mut config = FlashFillConfig::default();
    let err = config.select_profile("Nope").unwrap_err();
    assert_eq!(err.to_string(), "no profile named 'Nope'");
    assert_eq!(config.active_profile_index, 0);
}

#[test]
fn last_profile_cannot_be_removed() {
    let mut config = FlashFillConfig::default();
    assert!(matches!(config.remove_profile(DEFAULT_PROFILE_NAME), Err(ConfigError::LastProfile)));
}

#[test]
fn removing_profiles_keeps_the_selection_stable() {
    let mut config = config_with(&["A", "B", "C"]);
    config.select_profile("C").unwrap();

    config.remove_profile("A").unwrap();
    assert_eq!(config.active_profile().unwrap().name, "C");

    config.remove_profile("C").unwrap();
    assert_eq!(config.active_profile_index, 0);
    assert_eq!(config.active_profile().unwrap().name, "B");
}

#[test]
fn set_profile_value_replaces_in_place() {
    let mut config = FlashFillConfig::default();
    config.set_profile_value("Default", "city", json!("Paris")).unwrap();
    config.set_profile_value("Default", "zip", json!("75001")).unwrap();
    config.set_profile_value("Default", "city", json!("Lyon")).unwrap();

    let overrides = config.overrides();
    let keys: Vec<&str> = overrides.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["city", "zip"]);
    assert_eq!(config.overrides().lookup("home_city"), Some(("city", "Lyon")));

    assert!(matches!(
        config.set_profile_value("Ghost", "city", json!("x")),
        Err(ConfigError::UnknownProfile(_))
    ));
}
