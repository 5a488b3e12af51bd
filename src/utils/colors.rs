/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Wrap `value` in `color` … `RESET`.
pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out empty or placeholder values ("", "--", "n/a").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "n/a" {
        paint(GREY, value)
    } else {
        value.to_string()
    }
}
