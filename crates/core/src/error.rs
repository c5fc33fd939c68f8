use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist. Distinct from a backend failure.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}
