//! Match statistics - the four per-side counters and their attribution

use serde::{Deserialize, Serialize};

use crate::types::{PerSide, PointKind, Side};

/// Counters kept for one side across the whole match.
///
/// These accumulate monotonically; game, set, and tiebreak resets never
/// touch them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SideStats {
    pub aces: u32,
    pub double_faults: u32,
    pub winners: u32,
    pub unforced_errors: u32,
}

/// Credit a point to the right counter.
///
/// Aces and winners belong to the side that won the point; double faults
/// and unforced errors are charged to the side that lost it. `Normal`
/// points leave the stats untouched.
pub fn record_point(stats: &mut PerSide<SideStats>, winner: Side, kind: PointKind) {
    match kind {
        PointKind::Normal => {}
        PointKind::Ace => stats[winner].aces += 1,
        PointKind::DoubleFault => stats[winner.other()].double_faults += 1,
        PointKind::Winner => stats[winner].winners += 1,
        PointKind::UnforcedError => stats[winner.other()].unforced_errors += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_side_counters() {
        let mut stats = PerSide::<SideStats>::default();
        record_point(&mut stats, Side::A, PointKind::Ace);
        record_point(&mut stats, Side::A, PointKind::Winner);
        record_point(&mut stats, Side::B, PointKind::Ace);

        assert_eq!(stats[Side::A].aces, 1);
        assert_eq!(stats[Side::A].winners, 1);
        assert_eq!(stats[Side::B].aces, 1);
        assert_eq!(stats[Side::B].winners, 0);
    }

    #[test]
    fn test_loser_side_counters() {
        let mut stats = PerSide::<SideStats>::default();
        // A wins the point off B's double fault: the fault is B's.
        record_point(&mut stats, Side::A, PointKind::DoubleFault);
        record_point(&mut stats, Side::A, PointKind::UnforcedError);

        assert_eq!(stats[Side::A].double_faults, 0);
        assert_eq!(stats[Side::A].unforced_errors, 0);
        assert_eq!(stats[Side::B].double_faults, 1);
        assert_eq!(stats[Side::B].unforced_errors, 1);
    }

    #[test]
    fn test_normal_point_changes_nothing() {
        let mut stats = PerSide::<SideStats>::default();
        record_point(&mut stats, Side::A, PointKind::Normal);
        record_point(&mut stats, Side::B, PointKind::Normal);
        assert_eq!(stats, PerSide::default());
    }
}
