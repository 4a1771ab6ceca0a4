//! Core types shared across the crate.
//! Pure data types with no dependency on the engine itself.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Default match format (best of 3 sets).
pub const DEFAULT_BEST_OF: u32 = 3;

/// Points needed before a regular game can be decided (win by 2 from here).
pub const GAME_POINT_TARGET: u32 = 4;

/// Games needed before a set can be decided (win by 2, or 7-6 via tiebreak).
pub const SET_GAME_TARGET: u32 = 6;

/// Points needed before a tiebreak can be decided (win by 2).
pub const TIEBREAK_POINT_TARGET: u32 = 7;

/// Point count both sides are reset to when a game returns to deuce.
pub const DEUCE_POINTS: u32 = 3;

/// Traditional names for the first four point counts of a game.
pub const POINT_NAMES: [&str; 4] = ["0", "15", "30", "40"];

/// One of the two competing sides, referenced by index 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The opposing side.
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Parse a raw side index. Anything outside {0, 1} is rejected.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::A),
            1 => Some(Side::B),
            _ => None,
        }
    }
}

impl Serialize for Side {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.index() as u8)
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let index = u64::deserialize(deserializer)?;
        Side::from_index(index as usize)
            .ok_or_else(|| serde::de::Error::custom("side index must be 0 or 1"))
    }
}

/// Category a point is reported as, used only for stat attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointKind {
    #[default]
    Normal,
    Ace,
    DoubleFault,
    Winner,
    UnforcedError,
}

impl PointKind {
    /// Parse a point-type string (snake_case, case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(PointKind::Normal),
            "ace" => Some(PointKind::Ace),
            "double_fault" => Some(PointKind::DoubleFault),
            "winner" => Some(PointKind::Winner),
            "unforced_error" => Some(PointKind::UnforcedError),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PointKind::Normal => "normal",
            PointKind::Ace => "ace",
            PointKind::DoubleFault => "double_fault",
            PointKind::Winner => "winner",
            PointKind::UnforcedError => "unforced_error",
        }
    }
}

/// Fixed two-element container holding one value per side.
///
/// Serializes as a plain two-element array, index 0 = side A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerSide<T>([T; 2]);

impl<T> PerSide<T> {
    pub fn new(a: T, b: T) -> Self {
        Self([a, b])
    }

    pub fn as_array(&self) -> &[T; 2] {
        &self.0
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerSide<U> {
        let [a, b] = self.0;
        PerSide([f(a), f(b)])
    }
}

impl<T: Copy + Ord> PerSide<T> {
    pub fn max(&self) -> T {
        self.0[0].max(self.0[1])
    }

    pub fn min(&self) -> T {
        self.0[0].min(self.0[1])
    }

    /// The side currently ahead, or `None` on a tie.
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;
        match self.0[0].cmp(&self.0[1]) {
            Ordering::Greater => Some(Side::A),
            Ordering::Less => Some(Side::B),
            Ordering::Equal => None,
        }
    }
}

impl<T: Clone> PerSide<T> {
    pub fn splat(value: T) -> Self {
        Self([value.clone(), value])
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.0[side.index()]
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.index()]
    }
}

impl<T> From<[T; 2]> for PerSide<T> {
    fn from(pair: [T; 2]) -> Self {
        Self(pair)
    }
}
