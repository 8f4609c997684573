//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO holding the raw client payload
//! - A `Deserialize` update DTO of [`Patch`](trainerhub_core::patch::Patch) fields
//! - The validated insert/change structs the repositories accept

pub mod subject;
pub mod trainer;
