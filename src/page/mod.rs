pub mod adapter;
pub mod error;
pub mod page_model;
pub mod snapshot;
