pub mod articles;
pub mod auth;
pub mod careers;
pub mod countries;
pub mod design_categories;
pub mod discounts;
pub mod newsletters;
pub mod podcasts;
pub mod roles;
pub mod tutorials;
pub mod users;
