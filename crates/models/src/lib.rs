//! Domain records shared by the service and server crates.

pub mod errors;
pub mod user;

pub use user::{User, UserInput};
