// Prospect pipeline persistence
pub mod models;

pub use models::*;
