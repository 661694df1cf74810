use dineflow_core::paging::UnknownCursor;

/// Failure of a store operation.
///
/// A missing record is never an error; operations that address a single id
/// report absence through `Option` / `bool` return values instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A PostgreSQL backend error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be converted to or from its record type.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A list cursor that does not name a stored record.
    #[error(transparent)]
    InvalidCursor(#[from] UnknownCursor),

    /// A patch that is not an object or would produce an invalid record.
    #[error("Invalid patch: {0}")]
    InvalidPatch(String),
}
