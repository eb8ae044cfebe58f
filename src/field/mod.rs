pub mod collector;
pub mod field_model;
