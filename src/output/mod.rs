//! Output formatting for verification results

mod checklist;
mod formatter;

pub use checklist::print_manual_verification_steps;
pub use formatter::{OutputFormat, ResultFormatter};
