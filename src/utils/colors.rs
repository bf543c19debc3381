/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey for empty placeholders ("", "--", "--:--"), plain text otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Worked-time color: open sessions are flagged in yellow.
pub fn color_for_outcome(open_sessions: usize, anomalies: usize) -> &'static str {
    if anomalies > 0 {
        RED
    } else if open_sessions > 0 {
        YELLOW
    } else {
        GREEN
    }
}
