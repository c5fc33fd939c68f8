//! Read projections returned by the repositories.
//!
//! Each submodule pairs a `FromRow` struct matching the selected columns with
//! the camelCase `Serialize` struct sent to clients.

pub mod job;
pub mod project;
pub mod status;
pub mod tag;
