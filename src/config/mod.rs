pub mod error;
pub mod overrides;
pub mod profile;
pub mod storage;
