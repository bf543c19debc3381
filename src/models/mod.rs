pub mod date_range;
pub mod department;
pub mod employee;
pub mod event;
pub mod event_kind;
pub mod location;
