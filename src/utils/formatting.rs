//! Formatting utilities used for CLI and export outputs.

use crate::models::event_kind::EventKind;
use crate::utils::colors::{CYAN, GREEN, MAGENTA, RED, RESET, YELLOW};

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 09h 00m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Seconds → "09h 00m", plus the leftover seconds when not a whole minute.
pub fn secs2readable(secs: i64) -> String {
    let base = mins2readable(secs / 60, false, false);
    let rest = secs.abs() % 60;
    if rest == 0 {
        base
    } else {
        format!("{base} {rest:02}s")
    }
}

/// Colored status label for a punch kind.
pub fn describe_kind(kind: EventKind) -> String {
    let color = match kind {
        EventKind::Entry => GREEN,
        EventKind::Meal | EventKind::Dinner => YELLOW,
        EventKind::SmokeBreak => MAGENTA,
        EventKind::ShiftEnd => RED,
    };
    format!("{color}{}{RESET}", kind.label())
}

pub fn describe_active(active: bool) -> String {
    if active {
        format!("{GREEN}active{RESET}")
    } else {
        format!("{CYAN}inactive{RESET}")
    }
}
