use crate::game::Phase;

/// Everything the game core can fail with.
///
/// Decode failures (`Unknown*`) mean a persisted row holds a code the
/// registries do not know; they are invariant violations, not user errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("game phase mismatch: expected {expected}, found {found}")]
    PhaseMismatch { expected: Phase, found: Phase },
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} already exists")]
    Duplicate(String),
    #[error("unknown card code: {0:?}")]
    UnknownCard(String),
    #[error("unknown tarot code: {0:?}")]
    UnknownTarot(String),
    #[error("unknown game phase: {0}")]
    UnknownPhase(i16),
    #[cfg(feature = "database")]
    #[error("database: {0}")]
    Database(#[from] tokio_postgres::Error),
    #[cfg(feature = "database")]
    #[error("connection pool: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
