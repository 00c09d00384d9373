//! CLI command implementations

pub mod check_widths;
pub mod generate;
pub mod report;
