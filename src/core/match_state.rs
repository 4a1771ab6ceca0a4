//! Match state module - the tennis scoring state machine
//!
//! Ties the pure rule functions together into a single state machine that
//! accepts one point at a time and propagates it through point, game, set,
//! tiebreak, and server-rotation state. One `TennisMatch` value is owned
//! and mutated by exactly one caller; there is no interior locking and no
//! undo.

use crate::core::rules;
use crate::core::snapshot::MatchSnapshot;
use crate::core::stats::{self, SideStats};
use crate::error::ValidationError;
use crate::types::{PerSide, PointKind, Side, DEFAULT_BEST_OF, DEUCE_POINTS};

/// Complete state of one singles match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TennisMatch {
    players: PerSide<String>,
    /// Odd set count; first to `best_of / 2 + 1` sets takes the match.
    best_of: u32,
    sets_won: PerSide<u32>,
    /// 1-based number of the set in progress. Increments on every set
    /// completion, including the match-deciding one.
    current_set: u32,
    games: PerSide<u32>,
    /// Raw point counts in the current game; meaningless during a tiebreak.
    points: PerSide<u32>,
    tiebreak: bool,
    tiebreak_points: PerSide<u32>,
    /// Points played in the active tiebreak, used only to time server
    /// rotation.
    tiebreak_server_switch: u32,
    server: Side,
    stats: PerSide<SideStats>,
}

impl TennisMatch {
    /// Create a fresh match between two named players.
    pub fn new(player_a: impl Into<String>, player_b: impl Into<String>, best_of: u32) -> Self {
        Self {
            players: PerSide::new(player_a.into(), player_b.into()),
            best_of,
            sets_won: PerSide::default(),
            current_set: 1,
            games: PerSide::default(),
            points: PerSide::default(),
            tiebreak: false,
            tiebreak_points: PerSide::default(),
            tiebreak_server_switch: 0,
            server: Side::A,
            stats: PerSide::default(),
        }
    }

    pub fn players(&self) -> &PerSide<String> {
        &self.players
    }

    pub fn player(&self, side: Side) -> &str {
        &self.players[side]
    }

    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    pub fn sets_won(&self) -> PerSide<u32> {
        self.sets_won
    }

    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn games(&self) -> PerSide<u32> {
        self.games
    }

    pub fn points(&self) -> PerSide<u32> {
        self.points
    }

    pub fn tiebreak(&self) -> bool {
        self.tiebreak
    }

    pub fn tiebreak_points(&self) -> PerSide<u32> {
        self.tiebreak_points
    }

    pub fn tiebreak_server_switch(&self) -> u32 {
        self.tiebreak_server_switch
    }

    pub fn server(&self) -> Side {
        self.server
    }

    pub fn stats(&self) -> &PerSide<SideStats> {
        &self.stats
    }

    /// Whether either side has already won enough sets to take the match.
    ///
    /// The engine never refuses a point on its own; the caller is expected
    /// to stop awarding once this returns true.
    pub fn match_decided(&self) -> bool {
        rules::match_decided(self.sets_won, self.best_of)
    }

    /// The side that has taken the match, if any.
    pub fn match_winner(&self) -> Option<Side> {
        rules::match_winner(self.sets_won, self.best_of)
    }

    /// Award one point to `winner` and propagate every resulting
    /// transition (game, set, tiebreak entry and exit, server rotation).
    ///
    /// Returns whether the match is decided after this point. No
    /// validation is performed: points awarded past match point are
    /// applied exactly like any other.
    pub fn award_point(&mut self, winner: Side, kind: PointKind) -> bool {
        stats::record_point(&mut self.stats, winner, kind);

        if self.tiebreak {
            self.tiebreak_points[winner] += 1;
            self.tiebreak_server_switch += 1;
            if rules::tiebreak_server_flips(self.tiebreak_server_switch) {
                self.server = self.server.other();
            }
            if rules::tiebreak_winner(self.tiebreak_points) == Some(winner) {
                self.award_game(winner);
                self.tiebreak = false;
            }
        } else {
            self.points[winner] += 1;
            if let Some(side) = rules::game_winner(self.points) {
                self.award_game(side);
            } else if rules::returns_to_deuce(self.points) {
                self.points = PerSide::splat(DEUCE_POINTS);
            }
        }

        self.match_decided()
    }

    /// Strict variant of [`award_point`](Self::award_point) taking the raw
    /// side index and point-type string a host would receive from its UI.
    pub fn award_point_strict(
        &mut self,
        side_index: usize,
        point_type: &str,
    ) -> Result<bool, ValidationError> {
        let side =
            Side::from_index(side_index).ok_or(ValidationError::SideIndex(side_index))?;
        let kind = PointKind::from_str(point_type)
            .ok_or_else(|| ValidationError::UnknownPointType(point_type.to_string()))?;
        Ok(self.award_point(side, kind))
    }

    /// Complete a game for `winner`: bump the game count, clear per-game
    /// point state, hand the serve to the other side, then check for set
    /// completion or tiebreak entry.
    fn award_game(&mut self, winner: Side) {
        self.games[winner] += 1;
        self.points = PerSide::default();
        self.tiebreak_points = PerSide::default();
        self.server = self.server.other();

        if let Some(side) = rules::set_winner(self.games) {
            self.award_set(side);
        } else if rules::starts_tiebreak(self.games) {
            self.tiebreak = true;
            self.tiebreak_server_switch = 0;
        }
    }

    /// Complete a set for `winner`: bump the set count, reset all per-set
    /// state, and alternate the first server of the next set.
    fn award_set(&mut self, winner: Side) {
        self.sets_won[winner] += 1;
        self.current_set += 1;
        self.reset_set();
        self.server = self.server.other();
    }

    fn reset_set(&mut self) {
        self.games = PerSide::default();
        self.points = PerSide::default();
        self.tiebreak = false;
        self.tiebreak_points = PerSide::default();
        self.tiebreak_server_switch = 0;
    }

    /// Multi-line summary of the live score: points (or tiebreak points),
    /// games, sets, and the current server (marked with `*` during a
    /// tiebreak).
    pub fn score_display(&self) -> String {
        let score = if self.tiebreak {
            format!(
                "Tiebreak: {}–{}",
                self.tiebreak_points[Side::A],
                self.tiebreak_points[Side::B]
            )
        } else {
            let names = rules::game_display(self.points);
            format!("Points: {} – {}", names[Side::A], names[Side::B])
        };
        let games = format!("Games: {}–{}", self.games[Side::A], self.games[Side::B]);
        let sets = format!(
            "Sets: {}–{} (Set {})",
            self.sets_won[Side::A],
            self.sets_won[Side::B],
            self.current_set
        );
        let marker = if self.tiebreak { " *" } else { "" };
        let server = format!("Server: {}{}", self.players[self.server], marker);
        format!("{score}\n{games}\n{sets}\n{server}")
    }

    /// Multi-line dump of the four stat counters per player.
    pub fn stats_display(&self) -> String {
        let mut lines = Vec::new();
        for side in Side::BOTH {
            let side_stats = &self.stats[side];
            lines.push(format!("{} Stats", self.players[side]));
            lines.push(format!("Aces: {}", side_stats.aces));
            lines.push(format!("Double Faults: {}", side_stats.double_faults));
            lines.push(format!("Winners: {}", side_stats.winners));
            lines.push(format!("Unforced Errors: {}", side_stats.unforced_errors));
            lines.push(String::new());
        }
        lines.join("\n")
    }

    /// Export every field verbatim for persistence.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            players: self.players.clone(),
            best_of: self.best_of,
            sets_won: self.sets_won,
            current_set: self.current_set,
            games: self.games,
            points: self.points,
            tiebreak: self.tiebreak,
            tiebreak_points: self.tiebreak_points,
            server: self.server,
            tiebreak_server_switch: self.tiebreak_server_switch,
            stats: self.stats,
        }
    }

    /// Reconstruct a match from a snapshot, field for field.
    ///
    /// No range or consistency checks are applied; whatever the snapshot
    /// says is taken as-is. Use
    /// [`from_snapshot_strict`](Self::from_snapshot_strict) to reject
    /// impossible states.
    pub fn from_snapshot(snapshot: MatchSnapshot) -> Self {
        Self {
            players: snapshot.players,
            best_of: snapshot.best_of,
            sets_won: snapshot.sets_won,
            current_set: snapshot.current_set,
            games: snapshot.games,
            points: snapshot.points,
            tiebreak: snapshot.tiebreak,
            tiebreak_points: snapshot.tiebreak_points,
            server: snapshot.server,
            tiebreak_server_switch: snapshot.tiebreak_server_switch,
            stats: snapshot.stats,
        }
    }

    /// Validating variant of [`from_snapshot`](Self::from_snapshot).
    pub fn from_snapshot_strict(snapshot: MatchSnapshot) -> Result<Self, ValidationError> {
        snapshot.validate()?;
        Ok(Self::from_snapshot(snapshot))
    }
}

impl Default for TennisMatch {
    fn default() -> Self {
        Self::new("Player 1", "Player 2", DEFAULT_BEST_OF)
    }
}
