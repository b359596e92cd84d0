//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` entity/representation structs matching query output
//! - `Deserialize` input DTOs for inserts and updates

pub mod session;
pub mod todo;
pub mod user;
