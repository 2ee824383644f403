//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod exercise;
pub mod meal;
pub mod personal_record;
pub mod session;
pub mod set;
pub mod template;
pub mod user;
pub mod workout;
