//! User store and the business rules layered on top of it.

pub mod repository;
pub mod service;

pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
