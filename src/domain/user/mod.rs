//! User domain: entity, validation, and the repository orchestrating both

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::is_email_valid;
