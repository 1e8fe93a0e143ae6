//! Error types for the MockStack core.

/// Core error type for MockStack infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum MockStackError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for MockStack operations.
pub type MockStackResult<T> = Result<T, MockStackError>;

/// Errors raised by [`ResourceTable`](crate::ResourceTable).
///
/// Services translate these into their own wire errors; the store only knows
/// the resource kind and the key that was involved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id or name.
    #[error("{kind} {key} not found")]
    NotFound {
        /// Resource kind (e.g. `group`).
        kind: &'static str,
        /// The id or name that was looked up.
        key: String,
    },

    /// A record with the same unique key already exists (creation path).
    #[error("{kind} {key} already exists")]
    AlreadyExists {
        /// Resource kind.
        kind: &'static str,
        /// The colliding unique key.
        key: String,
    },

    /// An update would make the unique key collide with another record.
    #[error("{kind} {key} conflicts with an existing {kind}")]
    Conflict {
        /// Resource kind.
        kind: &'static str,
        /// The colliding unique key.
        key: String,
    },
}
