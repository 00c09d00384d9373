//! Check-widths command implementation
//!
//! Validates a width table against a layout profile without reading any text.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_profile, load_widths};

/// Run the check-widths command
///
/// # Arguments
/// * `widths_path` - Path to the JSON width table
/// * `profile_name` - Optional built-in layout profile (default, wide)
/// * `profile_file` - Optional JSON layout profile, overrides `profile_name`
///
/// # Returns
/// Exit code: 0 if the table is usable, 1 if not
pub fn run(
    widths_path: &str,
    profile_name: Option<&str>,
    profile_file: Option<&str>,
) -> Result<ExitCode> {
    println!("{} {}", "Checking:".cyan().bold(), widths_path);

    let profile = load_profile(profile_name, profile_file.map(Path::new))?;
    let table = load_widths(Path::new(widths_path))?;

    println!(
        "{} {} ({}px lines)",
        "Profile:".dimmed(),
        profile.name,
        profile.line_max_pixels
    );
    println!("  {} {}", "entries:".dimmed(), table.len());
    println!("  {} {}px", "space:".dimmed(), table.space_width());
    println!("  {} {}px", "hyphen:".dimmed(), table.hyphen_width());
    let (code, width) = table.widest();
    println!("  {} {:?} ({}px)", "widest:".dimmed(), code as char, width);

    match table.validate_for_profile(&profile) {
        Ok(()) => {
            println!("{} Width table is usable", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("  {} [{}]: {}", "x".red(), e.code(), e);
            println!("{} Width table is unusable", "FAILED".red().bold());
            Ok(ExitCode::from(1))
        }
    }
}
