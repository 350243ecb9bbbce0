//! Service layer for the users resource.
//! - Keeps the in-memory store behind the `UserRepository` trait.
//! - Applies id resolution and presence checks before writing.

pub mod errors;
pub mod user;
