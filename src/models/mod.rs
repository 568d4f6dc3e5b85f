//! Data models for form endpoint verification
//!
//! This module contains all data structures used throughout the application.

mod test_result;

pub use test_result::{FormTest, RunSummary, TestResult, TestStatus};
