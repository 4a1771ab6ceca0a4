//! Error types for the strict-validation entry points.
//!
//! The engine itself is permissive by default: `award_point` accepts any
//! input the type system admits and snapshot import performs no range or
//! consistency checks. These errors only surface through the explicitly
//! strict APIs (`MatchSnapshot::validate`, `TennisMatch::from_snapshot_strict`,
//! and the boundary parsers on `Side` / `PointKind`).

use thiserror::Error;

/// A well-formed input rejected by strict validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("side index must be 0 or 1, got {0}")]
    SideIndex(usize),

    #[error("unrecognized point type: {0:?}")]
    UnknownPointType(String),

    #[error("best_of must be an odd number >= 1, got {0}")]
    BestOf(u32),

    #[error("sets_won[{side}] = {sets_won} exceeds the maximum of {max} for best-of-{best_of}")]
    SetsWonOutOfRange {
        side: usize,
        sets_won: u32,
        max: u32,
        best_of: u32,
    },

    #[error("games[{side}] = {games} exceeds the maximum of 7 games in a set")]
    GamesOutOfRange { side: usize, games: u32 },
}

/// Failure while importing a snapshot.
///
/// Missing or mis-typed fields are `Malformed`; a structurally sound
/// snapshot rejected by strict checks is `Invalid`.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(#[from] ValidationError),
}
