//! Error handling
//!
//! Library-wide error type plus the helpers used to classify failures into the
//! configuration family (fatal before a batch starts) and everything else.

mod helpers;
mod types;


pub use types::{Result, ValidatorError};
