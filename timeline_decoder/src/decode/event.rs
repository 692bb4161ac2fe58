//! Event Variant Decoder - turns one raw event record into a [`TimelineEvent`].
//!
//! Dispatch is an exact match of the wire tag against the known set. For a
//! known tag every field is read through the property bag with a zero-like
//! fallback (`0`, `""`, empty `Vec`, or an enum's `Unknown`). Any other tag
//! becomes [`TimelineEvent::Unknown`] holding the whole record.
//!
//! Decoding is total: it never fails and never panics on malformed input.

use timeline_model::{
    BuildingType, LaneType, TeamSide, TimelineEvent, TimelineEventType, TowerType, VictimDamage,
    WardType,
};

use super::aggregates::decode_flat_position;
use crate::property_bag::PropertyBag;

/// Decode one event whose tag and timestamp have already been read.
///
/// `body` is the full event record, including its own `type` and `timestamp`
/// keys; an unknown tag keeps it verbatim.
pub fn decode_event(tag: &str, timestamp: i64, body: PropertyBag<'_>) -> TimelineEvent {
    let int = |key: &str| body.get_int(key).unwrap_or(0);
    let long = |key: &str| body.get_long(key).unwrap_or(0);
    let string = |key: &str| body.get_string(key).unwrap_or_default().to_string();
    let ids = |key: &str| body.get_array::<i32>(key).unwrap_or_default();

    match TimelineEventType::from_tag(tag) {
        TimelineEventType::PauseEnd => TimelineEvent::PauseEnd {
            timestamp,
            real_timestamp: long("realTimestamp"),
        },

        TimelineEventType::PauseStart => TimelineEvent::PauseStart {
            timestamp,
            real_timestamp: long("realTimestamp"),
        },

        TimelineEventType::LevelUp => TimelineEvent::LevelUp {
            timestamp,
            level: int("level"),
            participant_id: int("participantId"),
        },

        TimelineEventType::WardPlaced => TimelineEvent::WardPlaced {
            timestamp,
            creator_id: int("creatorId"),
            ward_type: ward_type(body, "wardType"),
        },

        TimelineEventType::ChampionKill => TimelineEvent::ChampionKill {
            timestamp,
            bounty: int("bounty"),
            kill_streak_length: int("killStreakLength"),
            killer_id: int("killerId"),
            position: decode_flat_position(body),
            shutdown_bounty: int("shutdownBounty"),
            victim_id: int("victimId"),
            victim_damage_received: victim_damage(body, "victimDamageReceived"),
            victim_damage_dealt: victim_damage(body, "victimDamageDealt"),
            assisting_participant_ids: ids("assistingParticipantIds"),
        },

        TimelineEventType::ItemDestroyed => TimelineEvent::ItemDestroyed {
            timestamp,
            item_id: int("itemId"),
            participant_id: int("participantId"),
        },

        TimelineEventType::GameEnd => TimelineEvent::GameEnd {
            timestamp,
            game_id: long("gameId"),
            real_timestamp: long("realTimestamp"),
            winning_team: team_side(body, "winningTeam"),
        },

        TimelineEventType::SkillLevelUp => TimelineEvent::SkillLevelUp {
            timestamp,
            level_up_type: string("levelUpType"),
            participant_id: int("participantId"),
            skill_slot: int("skillSlot"),
        },

        TimelineEventType::ItemPurchased => TimelineEvent::ItemPurchased {
            timestamp,
            item_id: int("itemId"),
            participant_id: int("participantId"),
        },

        TimelineEventType::ChampionSpecialKill => TimelineEvent::ChampionSpecialKill {
            timestamp,
            kill_type: string("killType"),
            killer_id: int("killerId"),
            position: decode_flat_position(body),
            multi_kill_length: int("multiKillLength"),
        },

        TimelineEventType::ItemSold => TimelineEvent::ItemSold {
            timestamp,
            item_id: int("itemId"),
            participant_id: int("participantId"),
        },

        TimelineEventType::ItemUndo => TimelineEvent::ItemUndo {
            timestamp,
            after_id: int("afterId"),
            before_id: int("beforeId"),
            gold_gain: int("goldGain"),
            participant_id: int("participantId"),
        },

        TimelineEventType::TurretPlateDestroyed => TimelineEvent::TurretPlateDestroyed {
            timestamp,
            killer_id: int("killerId"),
            lane_type: lane_type(body),
            position: decode_flat_position(body),
            team: team_side(body, "teamId"),
        },

        TimelineEventType::EliteMonsterKill => TimelineEvent::EliteMonsterKill {
            timestamp,
            bounty: int("bounty"),
            killer_id: int("killerId"),
            killer_team: team_side(body, "killerTeamId"),
            monster_sub_type: string("monsterSubType"),
            monster_type: string("monsterType"),
            position: decode_flat_position(body),
            assisting_participant_ids: ids("assistingParticipantIds"),
        },

        TimelineEventType::WardKill => TimelineEvent::WardKill {
            timestamp,
            killer_id: int("killerId"),
            ward_type: ward_type(body, "wardType"),
        },

        TimelineEventType::BuildingKill => TimelineEvent::BuildingKill {
            timestamp,
            bounty: int("bounty"),
            building_type: BuildingType::from_value(
                body.get_string("buildingType").unwrap_or_default(),
            ),
            killer_id: int("killerId"),
            lane_type: lane_type(body),
            position: decode_flat_position(body),
            team: team_side(body, "teamId"),
            tower_type: body.get_string("towerType").map(TowerType::from_value),
            assisting_participant_ids: ids("assistingParticipantIds"),
        },

        TimelineEventType::DragonSoulGiven => TimelineEvent::DragonSoulGiven {
            timestamp,
            name: string("name"),
            team: team_side(body, "teamId"),
        },

        TimelineEventType::ObjectiveBountyPrestart => TimelineEvent::ObjectiveBountyPrestart {
            timestamp,
            actual_start_time: long("actualStartTime"),
            team: team_side(body, "teamId"),
        },

        TimelineEventType::ObjectiveBountyFinish => TimelineEvent::ObjectiveBountyFinish {
            timestamp,
            team: team_side(body, "teamId"),
        },

        TimelineEventType::ChampionTransform => TimelineEvent::ChampionTransform {
            timestamp,
            participant_id: int("participantId"),
            transform_type: string("transformType"),
        },

        TimelineEventType::Unknown => {
            tracing::debug!(tag, timestamp, "preserving unrecognized timeline event");
            TimelineEvent::Unknown {
                timestamp,
                properties: body.to_map(),
            }
        }
    }
}

/// Decode an event record, reading the tag from `type` and the timestamp
/// from `timestamp` (defaulting to `""` and `0`).
pub fn decode_raw_event(body: PropertyBag<'_>) -> TimelineEvent {
    let tag = body.get_string("type").unwrap_or_default();
    let timestamp = body.get_long("timestamp").unwrap_or(0);
    decode_event(tag, timestamp, body)
}

/// Team ids arrive as integers (`100`/`200`); string literals are accepted too.
fn team_side(body: PropertyBag<'_>, key: &str) -> TeamSide {
    if let Some(id) = body.get_long(key) {
        return TeamSide::from_id(id);
    }
    body.get_string(key)
        .map(TeamSide::from_value)
        .unwrap_or(TeamSide::Unknown)
}

fn lane_type(body: PropertyBag<'_>) -> LaneType {
    LaneType::from_value(body.get_string("laneType").unwrap_or_default())
}

fn ward_type(body: PropertyBag<'_>, key: &str) -> WardType {
    WardType::from_value(body.get_string(key).unwrap_or_default())
}

fn victim_damage(body: PropertyBag<'_>, key: &str) -> Vec<VictimDamage> {
    body.get_array::<PropertyBag>(key)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| VictimDamage {
            basic: entry.get_boolean("basic").unwrap_or(false),
            magic_damage: entry.get_int("magicDamage").unwrap_or(0),
            name: entry.get_string("name").unwrap_or_default().to_string(),
            participant_id: entry.get_int("participantId").unwrap_or(0),
            physical_damage: entry.get_int("physicalDamage").unwrap_or(0),
            spell_name: entry.get_string("spellName").unwrap_or_default().to_string(),
            spell_slot: entry.get_int("spellSlot").unwrap_or(0),
            true_damage: entry.get_int("trueDamage").unwrap_or(0),
            damage_type: entry.get_string("type").unwrap_or_default().to_string(),
        })
        .collect()
}
