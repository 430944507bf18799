//! Data model for relationship records

pub mod record;

pub use record::{Record, ValidationError};
