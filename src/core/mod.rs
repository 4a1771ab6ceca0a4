//! Core module - pure match-scoring logic with no I/O
//!
//! This module contains the tennis rules, the match state machine, and the
//! snapshot format. It performs no I/O; reading and writing snapshot files
//! is the caller's job.

pub mod match_state;
pub mod rules;
pub mod snapshot;
pub mod stats;

// Re-export commonly used types
pub use match_state::TennisMatch;
pub use snapshot::MatchSnapshot;
pub use stats::SideStats;
