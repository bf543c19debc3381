pub mod attendance;
pub mod calculator;
pub mod employee;
pub mod log;
pub mod punch;
