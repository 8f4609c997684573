//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod subject_repo;
pub mod trainer_repo;

pub use subject_repo::SubjectRepo;
pub use trainer_repo::TrainerRepo;
