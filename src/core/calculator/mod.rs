pub mod sessions;
pub mod status;
