//! Scalar aggregate decoders: positions, damage and champion stats, and
//! participant frames.
//!
//! Same policy as the event decoder: an absent or mistyped leaf becomes its
//! zero value, never an error.

use serde_json::{Map, Value};
use timeline_model::{
    ChampionStats, DamageCategory, DamageStat, DamageStats, ParticipantFrame, Position,
};

use crate::property_bag::PropertyBag;

/// Position from a nested `{ "x": .., "y": .. }` object, as used by
/// participant frames.
pub fn decode_position(bag: Option<PropertyBag<'_>>) -> Position {
    match bag {
        Some(bag) => Position::new(bag.get_int("x").unwrap_or(0), bag.get_int("y").unwrap_or(0)),
        None => Position::default(),
    }
}

/// Position from the flat `positionX` / `positionY` pair carried by
/// position-bearing events.
pub fn decode_flat_position(bag: PropertyBag<'_>) -> Position {
    Position::new(
        bag.get_int("positionX").unwrap_or(0),
        bag.get_int("positionY").unwrap_or(0),
    )
}

/// Damage stats from the flat `<category>DamageDone`,
/// `<category>DamageDoneToChampions` and `<category>DamageTaken` keys.
pub fn decode_damage_stats(bag: Option<PropertyBag<'_>>) -> DamageStats {
    let mut stats = DamageStats::default();
    let Some(bag) = bag else {
        return stats;
    };

    for category in DamageCategory::ALL {
        let prefix = category.wire_prefix();
        *stats.category_mut(category) = DamageStat::new(
            bag.get_int(&format!("{prefix}DamageDone")).unwrap_or(0),
            bag.get_int(&format!("{prefix}DamageDoneToChampions")).unwrap_or(0),
            bag.get_int(&format!("{prefix}DamageTaken")).unwrap_or(0),
        );
    }

    stats
}

/// Champion stats, driven by [`ChampionStats::FIELDS`].
pub fn decode_champion_stats(bag: Option<PropertyBag<'_>>) -> ChampionStats {
    let mut stats = ChampionStats::default();
    for field in ChampionStats::FIELDS {
        let value = bag
            .and_then(|b| b.get_int(field.key))
            .unwrap_or(field.default);
        (field.set)(&mut stats, value);
    }
    stats
}

/// Inverse of [`decode_champion_stats`]: one wire key per table row.
pub fn encode_champion_stats(stats: &ChampionStats) -> Map<String, Value> {
    ChampionStats::FIELDS
        .iter()
        .map(|field| (field.key.to_string(), Value::from((field.get)(stats))))
        .collect()
}

pub fn decode_participant_frame(bag: PropertyBag<'_>) -> ParticipantFrame {
    ParticipantFrame {
        champion_stats: decode_champion_stats(bag.get_object("championStats")),
        damage_stats: decode_damage_stats(bag.get_object("damageStats")),
        gold: bag.get_int("currentGold").unwrap_or(0),
        total_gold: bag.get_int("totalGold").unwrap_or(0),
        xp: bag.get_int("xp").unwrap_or(0),
        level: bag.get_int("level").unwrap_or(0),
        minions_killed: bag.get_int("minionsKilled").unwrap_or(0),
        jungle_minions_killed: bag.get_int("jungleMinionsKilled").unwrap_or(0),
        position: decode_position(bag.get_object("position")),
        time_enemy_spent_controlled: bag.get_int("timeEnemySpentControlled").unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: &Value) -> PropertyBag<'_> {
        PropertyBag::from_value(value).unwrap()
    }

    #[test]
    fn test_nested_position() {
        let doc = json!({ "x": 50, "y": 60 });
        assert_eq!(decode_position(Some(bag(&doc))), Position::new(50, 60));
        assert_eq!(decode_position(None), Position::new(0, 0));
    }

    #[test]
    fn test_flat_position() {
        let doc = json!({ "positionX": 100, "positionY": 200, "x": 1, "y": 2 });
        assert_eq!(decode_flat_position(bag(&doc)), Position::new(100, 200));

        let partial = json!({ "positionX": 100 });
        assert_eq!(decode_flat_position(bag(&partial)), Position::new(100, 0));
    }

    #[test]
    fn test_damage_stats() {
        let doc = json!({
            "magicDamageDone": 1000,
            "magicDamageDoneToChampions": 400,
            "magicDamageTaken": 250,
            "physicalDamageDone": 3000,
            "trueDamageDoneToChampions": 90,
            "totalDamageDone": 4100,
            "totalDamageTaken": "oops",
        });
        let stats = decode_damage_stats(Some(bag(&doc)));

        assert_eq!(stats.magic, DamageStat::new(1000, 400, 250));
        assert_eq!(stats.physical, DamageStat::new(3000, 0, 0));
        assert_eq!(stats.true_damage, DamageStat::new(0, 90, 0));
        assert_eq!(stats.total, DamageStat::new(4100, 0, 0));
        assert_eq!(decode_damage_stats(None), DamageStats::default());
    }

    #[test]
    fn test_champion_stats_defaults_each_field() {
        let doc = json!({
            "armor": 35,
            "health": 120,
            "healthMax": 640,
            "movementSpeed": 345,
            "attackSpeed": null,
            "spellVamp": "n/a",
            "tenacity": 10,
        });
        let stats = decode_champion_stats(Some(bag(&doc)));

        assert_eq!(stats.armor, 35);
        assert_eq!(stats.health, 120);
        assert_eq!(stats.health_max, 640);
        assert_eq!(stats.movement_speed, 345);
        assert_eq!(stats.attack_speed, 0);
        assert_eq!(stats.spell_vamp, 0);
        assert_eq!(stats.ability_haste, 0);
    }

    #[test]
    fn test_champion_stats_health_not_checked_against_max() {
        let doc = json!({ "health": 900, "healthMax": 500 });
        let stats = decode_champion_stats(Some(bag(&doc)));
        assert_eq!((stats.health, stats.health_max), (900, 500));
    }

    #[test]
    fn test_champion_stats_encode_inverts_decode() {
        let doc = json!({ "abilityPower": 80, "magicResist": 32, "omnivamp": 5 });
        let stats = decode_champion_stats(Some(bag(&doc)));

        let encoded = encode_champion_stats(&stats);
        assert_eq!(encoded.len(), ChampionStats::FIELDS.len());
        assert_eq!(encoded.get("abilityPower"), Some(&json!(80)));
        assert_eq!(encoded.get("armor"), Some(&json!(0)));

        let encoded = Value::Object(encoded);
        assert_eq!(decode_champion_stats(Some(bag(&encoded))), stats);
    }

    #[test]
    fn test_participant_frame() {
        let doc = json!({
            "championStats": { "armor": 40, "healthMax": 700 },
            "currentGold": 350,
            "damageStats": { "totalDamageDone": 5000 },
            "goldPerSecond": 0,
            "jungleMinionsKilled": 4,
            "level": 6,
            "minionsKilled": 52,
            "participantId": 1,
            "position": { "x": 50, "y": 60 },
            "timeEnemySpentControlled": 1234,
            "totalGold": 2890,
            "xp": 2100,
        });
        let frame = decode_participant_frame(bag(&doc));

        assert_eq!(frame.champion_stats.armor, 40);
        assert_eq!(frame.champion_stats.health_max, 700);
        assert_eq!(frame.damage_stats.total.dealt, 5000);
        assert_eq!(frame.gold, 350);
        assert_eq!(frame.total_gold, 2890);
        assert_eq!(frame.xp, 2100);
        assert_eq!(frame.level, 6);
        assert_eq!(frame.minions_killed, 52);
        assert_eq!(frame.jungle_minions_killed, 4);
        assert_eq!(frame.position, Position::new(50, 60));
        assert_eq!(frame.time_enemy_spent_controlled, 1234);
    }

    #[test]
    fn test_empty_participant_frame_is_all_defaults() {
        let doc = json!({});
        assert_eq!(decode_participant_frame(bag(&doc)), ParticipantFrame::default());
    }
}
