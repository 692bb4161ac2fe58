//! Timeline events - the closed sum type produced by the event decoder.
//!
//! Each known wire tag has exactly one variant with a fixed field set. Tags
//! the model does not know about land in [`TimelineEvent::Unknown`], which
//! keeps the complete raw record so nothing is lost.

mod event_type;

pub use event_type::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::stats::Position;
use crate::values::{BuildingType, LaneType, TeamSide, TowerType, WardType};

/// One damage source or target listed on a champion kill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct VictimDamage {
    pub basic: bool,
    pub magic_damage: i32,
    pub name: String,
    pub participant_id: i32,
    pub physical_damage: i32,
    pub spell_name: String,
    pub spell_slot: i32,
    pub true_damage: i32,
    /// Raw damage entry type (`type` on the wire).
    pub damage_type: String,
}

impl VictimDamage {
    pub fn total_damage(&self) -> i64 {
        i64::from(self.magic_damage)
            + i64::from(self.physical_damage)
            + i64::from(self.true_damage)
    }
}

/// A single event on the match timeline.
///
/// `timestamp` is milliseconds since game start. The event type is derived
/// from the variant via [`TimelineEvent::event_type`], so it can never
/// disagree with the discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimelineEvent {
    PauseEnd {
        timestamp: i64,
        real_timestamp: i64,
    },

    PauseStart {
        timestamp: i64,
        real_timestamp: i64,
    },

    LevelUp {
        timestamp: i64,
        level: i32,
        participant_id: i32,
    },

    WardPlaced {
        timestamp: i64,
        creator_id: i32,
        ward_type: WardType,
    },

    ChampionKill {
        timestamp: i64,
        bounty: i32,
        kill_streak_length: i32,
        killer_id: i32,
        position: Position,
        shutdown_bounty: i32,
        victim_id: i32,
        victim_damage_received: Vec<VictimDamage>,
        victim_damage_dealt: Vec<VictimDamage>,
        assisting_participant_ids: Vec<i32>,
    },

    ItemDestroyed {
        timestamp: i64,
        item_id: i32,
        participant_id: i32,
    },

    GameEnd {
        timestamp: i64,
        game_id: i64,
        real_timestamp: i64,
        winning_team: TeamSide,
    },

    SkillLevelUp {
        timestamp: i64,
        level_up_type: String,
        participant_id: i32,
        skill_slot: i32,
    },

    ItemPurchased {
        timestamp: i64,
        item_id: i32,
        participant_id: i32,
    },

    /// Multi-kills, first blood and ace announcements.
    ChampionSpecialKill {
        timestamp: i64,
        kill_type: String,
        killer_id: i32,
        position: Position,
        multi_kill_length: i32,
    },

    ItemSold {
        timestamp: i64,
        item_id: i32,
        participant_id: i32,
    },

    ItemUndo {
        timestamp: i64,
        after_id: i32,
        before_id: i32,
        gold_gain: i32,
        participant_id: i32,
    },

    TurretPlateDestroyed {
        timestamp: i64,
        killer_id: i32,
        lane_type: LaneType,
        position: Position,
        team: TeamSide,
    },

    EliteMonsterKill {
        timestamp: i64,
        bounty: i32,
        killer_id: i32,
        killer_team: TeamSide,
        monster_sub_type: String,
        monster_type: String,
        position: Position,
        assisting_participant_ids: Vec<i32>,
    },

    WardKill {
        timestamp: i64,
        killer_id: i32,
        ward_type: WardType,
    },

    BuildingKill {
        timestamp: i64,
        bounty: i32,
        building_type: BuildingType,
        killer_id: i32,
        lane_type: LaneType,
        position: Position,
        team: TeamSide,
        /// `None` when the destroyed building is not a tower.
        tower_type: Option<TowerType>,
        assisting_participant_ids: Vec<i32>,
    },

    DragonSoulGiven {
        timestamp: i64,
        name: String,
        team: TeamSide,
    },

    ObjectiveBountyPrestart {
        timestamp: i64,
        actual_start_time: i64,
        team: TeamSide,
    },

    ObjectiveBountyFinish {
        timestamp: i64,
        team: TeamSide,
    },

    ChampionTransform {
        timestamp: i64,
        participant_id: i32,
        transform_type: String,
    },

    /// An event whose tag is not recognized.
    ///
    /// `properties` is the original record verbatim, including its own `type`
    /// and `timestamp` keys.
    Unknown {
        timestamp: i64,
        properties: Map<String, Value>,
    },
}

impl TimelineEvent {
    pub fn event_type(&self) -> TimelineEventType {
        match self {
            TimelineEvent::PauseEnd { .. } => TimelineEventType::PauseEnd,
            TimelineEvent::PauseStart { .. } => TimelineEventType::PauseStart,
            TimelineEvent::LevelUp { .. } => TimelineEventType::LevelUp,
            TimelineEvent::WardPlaced { .. } => TimelineEventType::WardPlaced,
            TimelineEvent::ChampionKill { .. } => TimelineEventType::ChampionKill,
            TimelineEvent::ItemDestroyed { .. } => TimelineEventType::ItemDestroyed,
            TimelineEvent::GameEnd { .. } => TimelineEventType::GameEnd,
            TimelineEvent::SkillLevelUp { .. } => TimelineEventType::SkillLevelUp,
            TimelineEvent::ItemPurchased { .. } => TimelineEventType::ItemPurchased,
            TimelineEvent::ChampionSpecialKill { .. } => TimelineEventType::ChampionSpecialKill,
            TimelineEvent::ItemSold { .. } => TimelineEventType::ItemSold,
            TimelineEvent::ItemUndo { .. } => TimelineEventType::ItemUndo,
            TimelineEvent::TurretPlateDestroyed { .. } => TimelineEventType::TurretPlateDestroyed,
            TimelineEvent::EliteMonsterKill { .. } => TimelineEventType::EliteMonsterKill,
            TimelineEvent::WardKill { .. } => TimelineEventType::WardKill,
            TimelineEvent::BuildingKill { .. } => TimelineEventType::BuildingKill,
            TimelineEvent::DragonSoulGiven { .. } => TimelineEventType::DragonSoulGiven,
            TimelineEvent::ObjectiveBountyPrestart { .. } => {
                TimelineEventType::ObjectiveBountyPrestart
            }
            TimelineEvent::ObjectiveBountyFinish { .. } => TimelineEventType::ObjectiveBountyFinish,
            TimelineEvent::ChampionTransform { .. } => TimelineEventType::ChampionTransform,
            TimelineEvent::Unknown { .. } => TimelineEventType::Unknown,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            TimelineEvent::PauseEnd { timestamp, .. }
            | TimelineEvent::PauseStart { timestamp, .. }
            | TimelineEvent::LevelUp { timestamp, .. }
            | TimelineEvent::WardPlaced { timestamp, .. }
            | TimelineEvent::ChampionKill { timestamp, .. }
            | TimelineEvent::ItemDestroyed { timestamp, .. }
            | TimelineEvent::GameEnd { timestamp, .. }
            | TimelineEvent::SkillLevelUp { timestamp, .. }
            | TimelineEvent::ItemPurchased { timestamp, .. }
            | TimelineEvent::ChampionSpecialKill { timestamp, .. }
            | TimelineEvent::ItemSold { timestamp, .. }
            | TimelineEvent::ItemUndo { timestamp, .. }
            | TimelineEvent::TurretPlateDestroyed { timestamp, .. }
            | TimelineEvent::EliteMonsterKill { timestamp, .. }
            | TimelineEvent::WardKill { timestamp, .. }
            | TimelineEvent::BuildingKill { timestamp, .. }
            | TimelineEvent::DragonSoulGiven { timestamp, .. }
            | TimelineEvent::ObjectiveBountyPrestart { timestamp, .. }
            | TimelineEvent::ObjectiveBountyFinish { timestamp, .. }
            | TimelineEvent::ChampionTransform { timestamp, .. }
            | TimelineEvent::Unknown { timestamp, .. } => *timestamp,
        }
    }

    /// The wire tag of this event. For `Unknown`, the tag preserved in the
    /// raw record (or `"UNKNOWN"` if the record carried none).
    pub fn tag(&self) -> &str {
        match self {
            TimelineEvent::Unknown { properties, .. } => properties
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or(TimelineEventType::Unknown.as_str()),
            known => known.event_type().as_str(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TimelineEvent::Unknown { .. })
    }

    /// Map position, for the variants that carry one.
    pub fn position(&self) -> Option<Position> {
        match self {
            TimelineEvent::ChampionKill { position, .. }
            | TimelineEvent::ChampionSpecialKill { position, .. }
            | TimelineEvent::TurretPlateDestroyed { position, .. }
            | TimelineEvent::EliteMonsterKill { position, .. }
            | TimelineEvent::BuildingKill { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Participant ids this event refers to, in field order.
    ///
    /// Zero is the wire's "no participant" (e.g. a kill by a minion or tower)
    /// and is left out. Unknown events contribute nothing.
    pub fn participant_ids(&self) -> Vec<i32> {
        let mut ids = Vec::new();
        match self {
            TimelineEvent::LevelUp { participant_id, .. }
            | TimelineEvent::ItemDestroyed { participant_id, .. }
            | TimelineEvent::SkillLevelUp { participant_id, .. }
            | TimelineEvent::ItemPurchased { participant_id, .. }
            | TimelineEvent::ItemSold { participant_id, .. }
            | TimelineEvent::ItemUndo { participant_id, .. }
            | TimelineEvent::ChampionTransform { participant_id, .. } => {
                ids.push(*participant_id);
            }
            TimelineEvent::WardPlaced { creator_id, .. } => ids.push(*creator_id),
            TimelineEvent::ChampionSpecialKill { killer_id, .. }
            | TimelineEvent::TurretPlateDestroyed { killer_id, .. }
            | TimelineEvent::WardKill { killer_id, .. } => ids.push(*killer_id),
            TimelineEvent::ChampionKill {
                killer_id,
                victim_id,
                victim_damage_received,
                victim_damage_dealt,
                assisting_participant_ids,
                ..
            } => {
                ids.push(*killer_id);
                ids.push(*victim_id);
                ids.extend(assisting_participant_ids.iter().copied());
                ids.extend(
                    victim_damage_received
                        .iter()
                        .chain(victim_damage_dealt)
                        .map(|d| d.participant_id),
                );
            }
            TimelineEvent::EliteMonsterKill {
                killer_id,
                assisting_participant_ids,
                ..
            }
            | TimelineEvent::BuildingKill {
                killer_id,
                assisting_participant_ids,
                ..
            } => {
                ids.push(*killer_id);
                ids.extend(assisting_participant_ids.iter().copied());
            }
            _ => {}
        }
        ids.retain(|id| *id != 0);
        ids
    }
}
