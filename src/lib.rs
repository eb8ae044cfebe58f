//! Form-field semantics classifier and value resolver.
//!
//! A page is reached through [`page::adapter::PageAdapter`]; the collector turns its
//! controls into [`field::field_model::FieldDescriptor`]s, the resolver picks a semantic
//! category and synthesizes a value for each, and the writer puts the value back while
//! raising the notifications the host page listens for.

pub mod cli;
pub mod config;
pub mod field;
pub mod fill;
pub mod page;
pub mod resolve;
pub mod trace;
pub mod writer;
