use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use rand_chacha::ChaCha8Rng;

use flash_fill::{
    field::field_model::{ControlRef, ControlTag, FieldDescriptor},
    resolve::{faker::Faker, resolver::ValueResolver},
};

pub fn fixture(name: &str) -> PathBuf {
    let base = std::env::current_dir().unwrap();
    base.join("tests").join("fixtures").join(name)
}

pub fn fixture_json(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}

/// Fixed clock used by every date assertion: 2025-06-15 12:00.
pub fn pinned_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn faker(seed: u64) -> Faker<ChaCha8Rng> {
    Faker::seeded(seed).with_now(pinned_now())
}

pub fn resolver(seed: u64) -> ValueResolver<ChaCha8Rng> {
    ValueResolver::new(faker(seed))
}

pub fn field(key: &str, input_type: &str, tag: ControlTag) -> FieldDescriptor {
    FieldDescriptor {
        key: key.to_string(),
        input_type: input_type.to_string(),
        tag,
        control: ControlRef(0),
        group: None,
        min: None,
        max: None,
    }
}
