//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TamagotchiError`] via `#[from]`.

/// Top-level error shared by the application and its adapters.
#[derive(Debug, thiserror::Error)]
pub enum TamagotchiError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("write conflict")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The request itself is malformed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The identifier in the request target and the one in the body disagree.
    #[error("{entity} id in path ({path}) does not match id in body ({})", .body.as_deref().unwrap_or("none"))]
    IdMismatch {
        entity: &'static str,
        path: String,
        body: Option<String>,
    },

    /// The identifier could not be parsed.
    #[error("invalid {entity} id: {value}")]
    InvalidId { entity: &'static str, value: String },

    /// The request body is not a JSON document of the expected shape.
    #[error("malformed request body: {reason}")]
    MalformedBody { reason: String },
}

/// No record with the requested identifier exists.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A concurrent writer changed the record between read and write.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} was modified concurrently")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}
