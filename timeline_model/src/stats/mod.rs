//! Fixed-shape value records sampled per participant and per event.

mod champion;

pub use champion::*;

use serde::{Deserialize, Serialize};

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Damage totals for one damage category.
///
/// Non-negative by convention; not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DamageStat {
    pub dealt: i32,
    pub dealt_to_champions: i32,
    pub taken: i32,
}

impl DamageStat {
    pub fn new(dealt: i32, dealt_to_champions: i32, taken: i32) -> Self {
        Self {
            dealt,
            dealt_to_champions,
            taken,
        }
    }
}

/// Damage categories tracked per participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageCategory {
    Magic,
    Physical,
    True,
    Total,
}

impl DamageCategory {
    pub const ALL: [DamageCategory; 4] = [
        DamageCategory::Magic,
        DamageCategory::Physical,
        DamageCategory::True,
        DamageCategory::Total,
    ];

    /// Prefix of the flat wire keys, e.g. `magic` in `magicDamageDone`.
    pub fn wire_prefix(&self) -> &'static str {
        match self {
            DamageCategory::Magic => "magic",
            DamageCategory::Physical => "physical",
            DamageCategory::True => "true",
            DamageCategory::Total => "total",
        }
    }
}

/// One [`DamageStat`] per damage category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DamageStats {
    pub magic: DamageStat,
    pub physical: DamageStat,
    pub true_damage: DamageStat,
    pub total: DamageStat,
}

impl DamageStats {
    pub fn category(&self, category: DamageCategory) -> &DamageStat {
        match category {
            DamageCategory::Magic => &self.magic,
            DamageCategory::Physical => &self.physical,
            DamageCategory::True => &self.true_damage,
            DamageCategory::Total => &self.total,
        }
    }

    pub fn category_mut(&mut self, category: DamageCategory) -> &mut DamageStat {
        match category {
            DamageCategory::Magic => &mut self.magic,
            DamageCategory::Physical => &mut self.physical,
            DamageCategory::True => &mut self.true_damage,
            DamageCategory::Total => &mut self.total,
        }
    }
}

/// Snapshot of one participant at a frame timestamp.
///
/// Keyed externally by participant id in [`crate::TimelineFrames`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ParticipantFrame {
    pub champion_stats: ChampionStats,
    pub damage_stats: DamageStats,
    /// Gold currently held (`currentGold` on the wire).
    pub gold: i32,
    pub total_gold: i32,
    pub xp: i32,
    pub level: i32,
    pub minions_killed: i32,
    pub jungle_minions_killed: i32,
    pub position: Position,
    pub time_enemy_spent_controlled: i32,
}

impl ParticipantFrame {
    /// Lane plus jungle creep score.
    pub fn creep_score(&self) -> i64 {
        i64::from(self.minions_killed) + i64::from(self.jungle_minions_killed)
    }
}
