use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::Serialize;

pub const PIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Worker,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Worker => "worker",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "worker" => Some(Role::Worker),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub document: String,
    pub name: String,
    pub surname: String,
    #[serde(skip_serializing)]
    pub pin: String,
    pub role: Role,
    pub active: bool,
    pub department_id: i64,
    pub department: String,
    pub phone: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }
}

/// Fields collected by `employee add`.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub document: String,
    pub name: String,
    pub surname: String,
    pub pin: String,
    pub role: Role,
    pub department_id: i64,
    pub phone: String,
}

/// A PIN is exactly four ASCII digits.
pub fn validate_pin(pin: &str) -> AppResult<()> {
    if pin.len() == PIN_LENGTH && pin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::InvalidPin(format!(
            "PIN must be exactly {PIN_LENGTH} digits"
        )))
    }
}

pub fn validate_document(document: &str) -> AppResult<()> {
    let doc = document.trim();
    if doc.is_empty() || doc.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidQuery(format!(
            "Invalid document id '{document}'"
        )));
    }
    Ok(())
}
