use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// Inclusive calendar range `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        if from > to {
            return Err(AppError::InvalidQuery(format!(
                "inverted date range: {from} is after {to}"
            )));
        }
        Ok(Self { from, to })
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    pub fn start_str(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{} → {}", self.from, self.to)
        }
    }
}
