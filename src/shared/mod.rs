pub mod constants;
pub mod listing;
pub mod repo;
pub mod types;
pub mod validation;
