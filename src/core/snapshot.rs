//! Snapshot module - the flat persistence format for a whole match
//!
//! Every field of [`TennisMatch`](crate::core::match_state::TennisMatch)
//! is carried verbatim so that import restores the exact state. JSON is
//! the concrete encoding used by the save/load tooling.

use serde::{Deserialize, Serialize};

use crate::core::rules;
use crate::core::stats::SideStats;
use crate::error::{SnapshotError, ValidationError};
use crate::types::{PerSide, Side};

/// Exact serialized image of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub players: PerSide<String>,
    pub best_of: u32,
    pub sets_won: PerSide<u32>,
    pub current_set: u32,
    pub games: PerSide<u32>,
    pub points: PerSide<u32>,
    pub tiebreak: bool,
    pub tiebreak_points: PerSide<u32>,
    pub server: Side,
    pub tiebreak_server_switch: u32,
    #[serde(with = "stats_by_side")]
    pub stats: PerSide<SideStats>,
}

/// The save format keys the stats record by side index ("0" / "1")
/// rather than as an array; both directions go through this codec.
mod stats_by_side {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::SideStats;
    use crate::types::PerSide;

    pub fn serialize<S>(stats: &PerSide<SideStats>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = BTreeMap::new();
        map.insert("0", &stats.as_array()[0]);
        map.insert("1", &stats.as_array()[1]);
        map.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<PerSide<SideStats>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<String, SideStats>::deserialize(deserializer)?;
        let a = map
            .get("0")
            .copied()
            .ok_or_else(|| D::Error::custom("missing stats for side 0"))?;
        let b = map
            .get("1")
            .copied()
            .ok_or_else(|| D::Error::custom("missing stats for side 1"))?;
        Ok(PerSide::new(a, b))
    }
}

impl MatchSnapshot {
    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON without range or consistency checks. Anything
    /// structurally shaped like a snapshot is accepted as-is, impossible
    /// score lines included.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode from JSON and reject snapshots that fail
    /// [`validate`](Self::validate).
    pub fn from_json_strict(json: &str) -> Result<Self, SnapshotError> {
        let snapshot = Self::from_json(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Range checks for strict mode: a sane match format and counters a
    /// real match could actually reach.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.best_of % 2 == 0 {
            return Err(ValidationError::BestOf(self.best_of));
        }
        let max_sets = rules::sets_to_win(self.best_of);
        for side in Side::BOTH {
            if self.sets_won[side] > max_sets {
                return Err(ValidationError::SetsWonOutOfRange {
                    side: side.index(),
                    sets_won: self.sets_won[side],
                    max: max_sets,
                    best_of: self.best_of,
                });
            }
            if self.games[side] > 7 {
                return Err(ValidationError::GamesOutOfRange {
                    side: side.index(),
                    games: self.games[side],
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchSnapshot {
        MatchSnapshot {
            players: PerSide::new("Ana".to_string(), "Bea".to_string()),
            best_of: 3,
            sets_won: PerSide::new(1, 0),
            current_set: 2,
            games: PerSide::new(3, 4),
            points: PerSide::new(2, 1),
            tiebreak: false,
            tiebreak_points: PerSide::default(),
            server: Side::B,
            tiebreak_server_switch: 0,
            stats: PerSide::default(),
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = sample().to_json().unwrap();
        for field in [
            "players",
            "best_of",
            "sets_won",
            "current_set",
            "games",
            "points",
            "tiebreak",
            "tiebreak_points",
            "server",
            "tiebreak_server_switch",
            "stats",
        ] {
            assert!(json.contains(&format!("\"{field}\"")), "missing {field}");
        }
    }

    #[test]
    fn test_stats_keyed_by_side_index() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let stats = &value["stats"];
        assert!(stats.is_object());
        assert!(stats["0"]["aces"].is_u64());
        assert!(stats["1"]["unforced_errors"].is_u64());
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("server");
        let err = MatchSnapshot::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }

    #[test]
    fn test_permissive_import_accepts_impossible_state() {
        let mut snapshot = sample();
        snapshot.best_of = 4;
        snapshot.sets_won = PerSide::new(9, 0);
        let json = snapshot.to_json().unwrap();
        let back = MatchSnapshot::from_json(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_validate_rejects_even_best_of() {
        let mut snapshot = sample();
        snapshot.best_of = 4;
        assert_eq!(snapshot.validate(), Err(ValidationError::BestOf(4)));
    }

    #[test]
    fn test_validate_rejects_impossible_counters() {
        let mut snapshot = sample();
        snapshot.sets_won = PerSide::new(0, 3);
        assert!(matches!(
            snapshot.validate(),
            Err(ValidationError::SetsWonOutOfRange { side: 1, .. })
        ));

        let mut snapshot = sample();
        snapshot.games = PerSide::new(8, 0);
        assert!(matches!(
            snapshot.validate(),
            Err(ValidationError::GamesOutOfRange { side: 0, games: 8 })
        ));
    }

    #[test]
    fn test_strict_import_distinguishes_error_kinds() {
        let err = MatchSnapshot::from_json_strict("{\"players\": 3}").unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));

        let mut snapshot = sample();
        snapshot.best_of = 2;
        let err = MatchSnapshot::from_json_strict(&snapshot.to_json().unwrap()).unwrap_err();
        assert!(matches!(err, SnapshotError::Invalid(_)));
    }
}
