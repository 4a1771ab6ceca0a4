//! Tennis match scoring engine.
//!
//! A deterministic state machine that applies tennis scoring rules
//! (points, games, sets, deuce/advantage, tiebreaks, server rotation)
//! one awarded point at a time, plus a JSON snapshot format for exact
//! save and restore. Presentation is the caller's job: the crate exposes
//! the state machine, read-only projections of it, and nothing else.

pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{MatchSnapshot, SideStats, TennisMatch};
pub use crate::error::{SnapshotError, ValidationError};
pub use crate::types::{PerSide, PointKind, Side};
