//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Plain input structs for inserts (request DTOs live in the API crate)
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity;
pub mod application;
pub mod collaboration;
pub mod project;
pub mod session;
pub mod user;
pub mod wallet;
