//! Domain primitives shared by the data access layer and the HTTP layer.

pub mod error;
pub mod types;
