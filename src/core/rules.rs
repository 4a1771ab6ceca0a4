//! Scoring rules - pure decision functions for games, sets, and tiebreaks
//!
//! Every function here is a pure projection of a score pair; the state
//! machine in [`match_state`](crate::core::match_state) drives them in
//! order. Point totals are kept as raw counts and only mapped to the
//! traditional 0/15/30/40 names for display.

use crate::types::{
    PerSide, Side, DEUCE_POINTS, GAME_POINT_TARGET, POINT_NAMES, SET_GAME_TARGET,
    TIEBREAK_POINT_TARGET,
};

/// Winner of a regular game, if the point totals decide one.
///
/// A game is decided once a side has at least 4 points and leads by 2.
pub fn game_winner(points: PerSide<u32>) -> Option<Side> {
    if points.max() < GAME_POINT_TARGET {
        return None;
    }
    let leader = points.leader()?;
    if points[leader] - points[leader.other()] >= 2 {
        Some(leader)
    } else {
        None
    }
}

/// Whether the point totals must collapse back to the deuce sentinel.
///
/// Fires on any tie at 4 points or more; both counts are then reset to
/// [`DEUCE_POINTS`] so a fresh advantage can be played out.
pub fn returns_to_deuce(points: PerSide<u32>) -> bool {
    points.leader().is_none() && points.max() >= GAME_POINT_TARGET
}

/// Side holding advantage, if any (one-point lead at or past 4 points).
pub fn advantage(points: PerSide<u32>) -> Option<Side> {
    let leader = points.leader()?;
    if points.max() >= GAME_POINT_TARGET && points[leader] - points[leader.other()] == 1 {
        Some(leader)
    } else {
        None
    }
}

/// Map a side's point count to its display name, given the opponent's count.
///
/// Counts past the 0/15/30/40 table render as "AD" for the leader and
/// "40" otherwise.
pub fn point_name(own: u32, opponent: u32) -> &'static str {
    match POINT_NAMES.get(own as usize) {
        Some(name) => name,
        None => {
            if own > opponent {
                "AD"
            } else {
                "40"
            }
        }
    }
}

/// Display names for both sides' point counts, with the deuce special case.
pub fn game_display(points: PerSide<u32>) -> PerSide<&'static str> {
    if points == PerSide::splat(DEUCE_POINTS) {
        return PerSide::splat("Deuce");
    }
    let a = point_name(points[Side::A], points[Side::B]);
    let b = point_name(points[Side::B], points[Side::A]);
    PerSide::new(a, b)
}

/// Winner of a tiebreak, if the tiebreak point totals decide one
/// (first to 7, win by 2).
pub fn tiebreak_winner(points: PerSide<u32>) -> Option<Side> {
    let leader = points.leader()?;
    if points[leader] >= TIEBREAK_POINT_TARGET && points[leader] - points[leader.other()] >= 2 {
        Some(leader)
    } else {
        None
    }
}

/// Whether the server flips on this tiebreak point.
///
/// `count` is the running number of points played in the tiebreak,
/// including the one just awarded. The server holds for the first point,
/// then switches every two points (counts 3, 5, 7, ...).
pub fn tiebreak_server_flips(count: u32) -> bool {
    count % 2 == 1 && count > 1
}

/// Winner of the current set, if the game totals decide one.
///
/// A set ends at 6 games with a margin of 2, or at 7-6 (which is only
/// reachable through a completed tiebreak).
pub fn set_winner(games: PerSide<u32>) -> Option<Side> {
    let leader = games.leader()?;
    let (hi, lo) = (games[leader], games[leader.other()]);
    if (hi >= SET_GAME_TARGET && hi - lo >= 2) || (hi == 7 && lo == 6) {
        Some(leader)
    } else {
        None
    }
}

/// Whether the game totals send the set into a tiebreak (exactly 6-6).
pub fn starts_tiebreak(games: PerSide<u32>) -> bool {
    games == PerSide::splat(SET_GAME_TARGET)
}

/// Sets required to take a best-of-`best_of` match.
pub fn sets_to_win(best_of: u32) -> u32 {
    best_of / 2 + 1
}

/// Whether either side has already taken the match.
pub fn match_decided(sets_won: PerSide<u32>, best_of: u32) -> bool {
    sets_won.max() > best_of / 2
}

/// The side that has taken the match, if any.
pub fn match_winner(sets_won: PerSide<u32>, best_of: u32) -> Option<Side> {
    if match_decided(sets_won, best_of) {
        sets_won.leader()
    } else {
        None
    }
}
