//! Typed errors for the ACO engine.
//!
//! The engine either completes an iteration cleanly or aborts the whole
//! solve: there is no partial-iteration commit, so every fallible entry
//! point returns one of the variants below rather than a bare `String`.

use thiserror::Error;

/// Everything that can make the engine refuse to build a colony or abort a solve.
///
/// `Cancelled` is deliberately not a variant here: a cooperative cancel is not
/// an error, it is a flag on the successful [`crate::colony::SolveOutcome`].
#[derive(Debug, Error)]
pub enum SolverError {
    /// The distance matrix or a configuration parameter does not satisfy its
    /// documented domain (surfaced at construction time).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal protocol invariant was violated, e.g. an ant was told to
    /// visit an already-visited city, or a mode string did not match a known
    /// pheromone-update or local-search variant.
    #[error("protocol error: {0}")]
    ProtocolError(String),

    /// An ant construction got stuck with no feasible next city before every
    /// city was visited. On a validated distance matrix this is unreachable,
    /// but the failure mode is surfaced rather than panicking.
    #[error("incomplete tour: {0}")]
    IncompleteTour(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
