pub mod model;
pub mod token;

pub use model::AuthenticatedUser;
pub use token::TokenService;
