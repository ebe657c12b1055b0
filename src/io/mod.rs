//! Output writers.

pub mod writers;

pub use writers::{write_report, write_validation_summary};
