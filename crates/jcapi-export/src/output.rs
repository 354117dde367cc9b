//! Output formatting helpers.

use colored::Colorize;

/// Print a success message to stderr.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}
