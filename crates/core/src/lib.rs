//! Domain logic for the trainer hub: validation rules, trainer-code
//! allocation, partial-update inputs and pagination arithmetic.
//!
//! Nothing in this crate touches the database or HTTP.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod subject_ref;
pub mod trainer_code;
pub mod types;
pub mod validation;
