/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Placeholder shown for empty cells
pub const EMPTY_CELL: &str = "--";

/// Grey placeholder for empty values, the value itself otherwise.
///
/// Example:
/// `colorize_optional("")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{EMPTY_CELL}{RESET}")
    } else {
        value.to_string()
    }
}

/// Counter color: green when something happened today, grey otherwise
pub fn color_for_count(value: usize) -> &'static str {
    if value > 0 { GREEN } else { GREY }
}
