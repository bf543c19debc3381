use clap::ValueEnum;
use serde::Serialize;

/// Kind of a punch event, as written by the clock-in client.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Entry,
    Meal,
    #[value(alias = "smoke_break")]
    SmokeBreak,
    Dinner,
    #[value(alias = "shift_end")]
    ShiftEnd,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Entry,
        EventKind::Meal,
        EventKind::SmokeBreak,
        EventKind::Dinner,
        EventKind::ShiftEnd,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Entry => "entry",
            EventKind::Meal => "meal",
            EventKind::SmokeBreak => "smoke_break",
            EventKind::Dinner => "dinner",
            EventKind::ShiftEnd => "shift_end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(EventKind::Entry),
            "meal" => Some(EventKind::Meal),
            "smoke_break" => Some(EventKind::SmokeBreak),
            "dinner" => Some(EventKind::Dinner),
            "shift_end" => Some(EventKind::ShiftEnd),
            _ => None,
        }
    }

    /// Human label used on the status board.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Entry => "On shift",
            EventKind::Meal => "At meal",
            EventKind::SmokeBreak => "On break",
            EventKind::Dinner => "At dinner",
            EventKind::ShiftEnd => "Shift ended",
        }
    }

    /// Meal, smoke break and dinner only annotate a session.
    pub fn is_annotation(&self) -> bool {
        matches!(
            self,
            EventKind::Meal | EventKind::SmokeBreak | EventKind::Dinner
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_db_str())
    }
}
