//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for headings, bright_black for hints
//! - **Standardized spacing**: Blank line around every card and message
//! - **Writer-based**: The session loop writes to any `io::Write`, so every
//!   formatter has a `write_*` form next to its stdout shortcut

use colored::*;
use std::io::{self, Write};

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Writes a usage block
///
/// # Format
/// ```text
///
/// <message>
/// Usage:
///   <pattern>  <description>
///   ...
///
/// ```
///
/// # Colors
/// - Message in white
/// - "Usage:" in blue
/// - Patterns in white, descriptions in bright_black (muted)
pub fn write_usage(out: &mut dyn Write, message: &str, usage: &[(&str, &str)]) -> io::Result<()> {
    writeln!(out, "\n{}", message.white())?;
    writeln!(out, "{}", "Usage:".blue())?;

    let width = usage.iter().map(|(pattern, _)| pattern.len()).max().unwrap_or(0);
    for (pattern, description) in usage {
        writeln!(
            out,
            "  {}  {}",
            format!("{pattern:<width$}").white(),
            description.bright_black()
        )?;
    }

    writeln!(out)
}

/// Writes a rendered screen surrounded by blank lines
pub fn write_screen(out: &mut dyn Write, screen: &str) -> io::Result<()> {
    writeln!(out, "\n{screen}\n")
}

/// Prints a rendered screen to stdout
pub fn print_screen(screen: &str) {
    println!("\n{screen}\n");
}
