/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Empty-looking cells (`00:00`, `N/A`, blank) are greyed out.
fn is_blank(value: &str) -> bool {
    matches!(value.trim(), "" | "00:00" | "N/A" | "--:--")
}

pub fn colorize_optional(value: &str) -> String {
    if is_blank(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Non-zero lateness or undertime in red, overtime in green.
pub fn colorize_minutes(value: &str, minutes: i64, good: bool) -> String {
    if minutes <= 0 || is_blank(value) {
        return colorize_optional(value);
    }
    let color = if good { GREEN } else { RED };
    format!("{color}{value}{RESET}")
}

/// Open days (no clock-out) are highlighted in yellow.
pub fn colorize_clock_out(value: &str, open: bool) -> String {
    if open {
        format!("{YELLOW}{value}{RESET}")
    } else {
        value.to_string()
    }
}
