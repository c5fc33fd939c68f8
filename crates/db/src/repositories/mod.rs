//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&MySqlPool` as the first argument. All queries are fixed;
//! nothing here writes to the database.

pub mod job_repo;
pub mod project_repo;
pub mod status_repo;
pub mod tag_repo;

pub use job_repo::JobRepo;
pub use project_repo::ProjectRepo;
pub use status_repo::StatusRepo;
pub use tag_repo::TagRepo;
