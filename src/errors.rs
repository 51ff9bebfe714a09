use thiserror::Error;

/// Failure kinds callers can distinguish. Everything travels inside
/// `anyhow::Error`; downcast when the kind matters.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The player name contained nothing but markup or whitespace.
    /// Registration is rejected before any write.
    #[error("player name {name:?} is empty after sanitization")]
    EmptyName { name: String },

    /// A write violated referential integrity, e.g. a match referencing a
    /// player id that does not exist, or a player paired against themselves.
    #[error("constraint violation: {source}")]
    Constraint {
        #[source]
        source: rusqlite::Error,
    },

    /// The store could not hand out a connection.
    #[error("database is unreachable: {source}")]
    Connection {
        #[from]
        source: r2d2::Error,
    },

    /// A multi-statement operation failed to commit. None of its statements
    /// are visible in the store.
    #[error("transaction failed: {source}")]
    Transaction {
        #[source]
        source: rusqlite::Error,
    },
}

/// Wraps a raw store error, surfacing constraint violations as their own
/// kind so callers can tell bad input apart from an unreachable store.
pub fn classify_store_error(err: rusqlite::Error) -> anyhow::Error {
    if let rusqlite::Error::SqliteFailure(ffi_err, _) = &err {
        if ffi_err.code == rusqlite::ErrorCode::ConstraintViolation {
            return TournamentError::Constraint { source: err }.into();
        }
    }
    err.into()
}
