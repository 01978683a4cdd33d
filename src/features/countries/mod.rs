pub mod dto;
pub mod handler;
pub mod model;
pub mod routes;
pub mod service;

pub use service::CountryService;
