//! Closed set of timeline event tags.

use serde::{Deserialize, Serialize};

/// Discriminant of a [`super::TimelineEvent`], one per known wire tag plus
/// `Unknown` for every tag the model does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineEventType {
    PauseEnd,
    PauseStart,
    LevelUp,
    WardPlaced,
    ChampionKill,
    ItemDestroyed,
    GameEnd,
    SkillLevelUp,
    ItemPurchased,
    ChampionSpecialKill,
    ItemSold,
    ItemUndo,
    TurretPlateDestroyed,
    EliteMonsterKill,
    WardKill,
    BuildingKill,
    DragonSoulGiven,
    ObjectiveBountyPrestart,
    ObjectiveBountyFinish,
    ChampionTransform,
    Unknown,
}

impl TimelineEventType {
    /// Every recognized tag. `Unknown` is not part of the set.
    pub const ALL: [TimelineEventType; 20] = [
        TimelineEventType::PauseEnd,
        TimelineEventType::PauseStart,
        TimelineEventType::LevelUp,
        TimelineEventType::WardPlaced,
        TimelineEventType::ChampionKill,
        TimelineEventType::ItemDestroyed,
        TimelineEventType::GameEnd,
        TimelineEventType::SkillLevelUp,
        TimelineEventType::ItemPurchased,
        TimelineEventType::ChampionSpecialKill,
        TimelineEventType::ItemSold,
        TimelineEventType::ItemUndo,
        TimelineEventType::TurretPlateDestroyed,
        TimelineEventType::EliteMonsterKill,
        TimelineEventType::WardKill,
        TimelineEventType::BuildingKill,
        TimelineEventType::DragonSoulGiven,
        TimelineEventType::ObjectiveBountyPrestart,
        TimelineEventType::ObjectiveBountyFinish,
        TimelineEventType::ChampionTransform,
    ];

    /// Exact, case-sensitive match against the known wire tags.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PAUSE_END" => TimelineEventType::PauseEnd,
            "PAUSE_START" => TimelineEventType::PauseStart,
            "LEVEL_UP" => TimelineEventType::LevelUp,
            "WARD_PLACED" => TimelineEventType::WardPlaced,
            "CHAMPION_KILL" => TimelineEventType::ChampionKill,
            "ITEM_DESTROYED" => TimelineEventType::ItemDestroyed,
            "GAME_END" => TimelineEventType::GameEnd,
            "SKILL_LEVEL_UP" => TimelineEventType::SkillLevelUp,
            "ITEM_PURCHASED" => TimelineEventType::ItemPurchased,
            "CHAMPION_SPECIAL_KILL" => TimelineEventType::ChampionSpecialKill,
            "ITEM_SOLD" => TimelineEventType::ItemSold,
            "ITEM_UNDO" => TimelineEventType::ItemUndo,
            "TURRET_PLATE_DESTROYED" => TimelineEventType::TurretPlateDestroyed,
            "ELITE_MONSTER_KILL" => TimelineEventType::EliteMonsterKill,
            "WARD_KILL" => TimelineEventType::WardKill,
            "BUILDING_KILL" => TimelineEventType::BuildingKill,
            "DRAGON_SOUL_GIVEN" => TimelineEventType::DragonSoulGiven,
            "OBJECTIVE_BOUNTY_PRESTART" => TimelineEventType::ObjectiveBountyPrestart,
            "OBJECTIVE_BOUNTY_FINISH" => TimelineEventType::ObjectiveBountyFinish,
            "CHAMPION_TRANSFORM" => TimelineEventType::ChampionTransform,
            _ => TimelineEventType::Unknown,
        }
    }

    /// The wire tag. `Unknown` maps to `"UNKNOWN"`, which is not itself a
    /// recognized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineEventType::PauseEnd => "PAUSE_END",
            TimelineEventType::PauseStart => "PAUSE_START",
            TimelineEventType::LevelUp => "LEVEL_UP",
            TimelineEventType::WardPlaced => "WARD_PLACED",
            TimelineEventType::ChampionKill => "CHAMPION_KILL",
            TimelineEventType::ItemDestroyed => "ITEM_DESTROYED",
            TimelineEventType::GameEnd => "GAME_END",
            TimelineEventType::SkillLevelUp => "SKILL_LEVEL_UP",
            TimelineEventType::ItemPurchased => "ITEM_PURCHASED",
            TimelineEventType::ChampionSpecialKill => "CHAMPION_SPECIAL_KILL",
            TimelineEventType::ItemSold => "ITEM_SOLD",
            TimelineEventType::ItemUndo => "ITEM_UNDO",
            TimelineEventType::TurretPlateDestroyed => "TURRET_PLATE_DESTROYED",
            TimelineEventType::EliteMonsterKill => "ELITE_MONSTER_KILL",
            TimelineEventType::WardKill => "WARD_KILL",
            TimelineEventType::BuildingKill => "BUILDING_KILL",
            TimelineEventType::DragonSoulGiven => "DRAGON_SOUL_GIVEN",
            TimelineEventType::ObjectiveBountyPrestart => "OBJECTIVE_BOUNTY_PRESTART",
            TimelineEventType::ObjectiveBountyFinish => "OBJECTIVE_BOUNTY_FINISH",
            TimelineEventType::ChampionTransform => "CHAMPION_TRANSFORM",
            TimelineEventType::Unknown => "UNKNOWN",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TimelineEventType::Unknown)
    }
}

impl std::fmt::Display for TimelineEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
