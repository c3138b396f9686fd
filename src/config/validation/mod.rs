//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `validators`: implementations for the configuration models
//! - `tests`: test suite for all validators

mod trait_def;
mod validators;

pub use trait_def::Validate;
pub use validators::validate_base_url;
