//! Champion stat snapshot and its declarative field table.

use serde::{Deserialize, Serialize};

/// Champion stats of one participant at a frame.
///
/// Every field is independently optional on the wire and defaults to 0.
/// There are no cross-field invariants; `health` is never checked against
/// `health_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ChampionStats {
    pub ability_haste: i32,
    pub ability_power: i32,
    pub armor: i32,
    pub armor_pen: i32,
    pub armor_pen_percent: i32,
    pub attack_damage: i32,
    pub attack_speed: i32,
    pub bonus_armor_pen_percent: i32,
    pub bonus_magic_pen_percent: i32,
    pub cc_reduction: i32,
    pub cooldown_reduction: i32,
    pub health: i32,
    pub health_max: i32,
    pub health_regen: i32,
    pub lifesteal: i32,
    pub magic_pen: i32,
    pub magic_pen_percent: i32,
    pub magic_resist: i32,
    pub movement_speed: i32,
    pub omnivamp: i32,
    pub physical_vamp: i32,
    pub power: i32,
    pub power_max: i32,
    pub power_regen: i32,
    pub spell_vamp: i32,
}

/// One entry of [`ChampionStats::FIELDS`]: the wire key, the value used when
/// the key is absent, and accessors for the matching struct field.
#[derive(Clone, Copy)]
pub struct ChampionStatField {
    pub key: &'static str,
    pub default: i32,
    pub get: fn(&ChampionStats) -> i32,
    pub set: fn(&mut ChampionStats, i32),
}

impl std::fmt::Debug for ChampionStatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChampionStatField")
            .field("key", &self.key)
            .field("default", &self.default)
            .finish()
    }
}

impl ChampionStats {
    /// Every stat, in wire order. Decoding and encoding both walk this table,
    /// so adding a stat means adding a struct field and one row here.
    #[rustfmt::skip]
    pub const FIELDS: &'static [ChampionStatField] = &[
        ChampionStatField { key: "abilityHaste", default: 0, get: |s| s.ability_haste, set: |s, v| s.ability_haste = v },
        ChampionStatField { key: "abilityPower", default: 0, get: |s| s.ability_power, set: |s, v| s.ability_power = v },
        ChampionStatField { key: "armor", default: 0, get: |s| s.armor, set: |s, v| s.armor = v },
        ChampionStatField { key: "armorPen", default: 0, get: |s| s.armor_pen, set: |s, v| s.armor_pen = v },
        ChampionStatField { key: "armorPenPercent", default: 0, get: |s| s.armor_pen_percent, set: |s, v| s.armor_pen_percent = v },
        ChampionStatField { key: "attackDamage", default: 0, get: |s| s.attack_damage, set: |s, v| s.attack_damage = v },
        ChampionStatField { key: "attackSpeed", default: 0, get: |s| s.attack_speed, set: |s, v| s.attack_speed = v },
        ChampionStatField { key: "bonusArmorPenPercent", default: 0, get: |s| s.bonus_armor_pen_percent, set: |s, v| s.bonus_armor_pen_percent = v },
        ChampionStatField { key: "bonusMagicPenPercent", default: 0, get: |s| s.bonus_magic_pen_percent, set: |s, v| s.bonus_magic_pen_percent = v },
        ChampionStatField { key: "ccReduction", default: 0, get: |s| s.cc_reduction, set: |s, v| s.cc_reduction = v },
        ChampionStatField { key: "cooldownReduction", default: 0, get: |s| s.cooldown_reduction, set: |s, v| s.cooldown_reduction = v },
        ChampionStatField { key: "health", default: 0, get: |s| s.health, set: |s, v| s.health = v },
        ChampionStatField { key: "healthMax", default: 0, get: |s| s.health_max, set: |s, v| s.health_max = v },
        ChampionStatField { key: "healthRegen", default: 0, get: |s| s.health_regen, set: |s, v| s.health_regen = v },
        ChampionStatField { key: "lifesteal", default: 0, get: |s| s.lifesteal, set: |s, v| s.lifesteal = v },
        ChampionStatField { key: "magicPen", default: 0, get: |s| s.magic_pen, set: |s, v| s.magic_pen = v },
        ChampionStatField { key: "magicPenPercent", default: 0, get: |s| s.magic_pen_percent, set: |s, v| s.magic_pen_percent = v },
        ChampionStatField { key: "magicResist", default: 0, get: |s| s.magic_resist, set: |s, v| s.magic_resist = v },
        ChampionStatField { key: "movementSpeed", default: 0, get: |s| s.movement_speed, set: |s, v| s.movement_speed = v },
        ChampionStatField { key: "omnivamp", default: 0, get: |s| s.omnivamp, set: |s, v| s.omnivamp = v },
        ChampionStatField { key: "physicalVamp", default: 0, get: |s| s.physical_vamp, set: |s, v| s.physical_vamp = v },
        ChampionStatField { key: "power", default: 0, get: |s| s.power, set: |s, v| s.power = v },
        ChampionStatField { key: "powerMax", default: 0, get: |s| s.power_max, set: |s, v| s.power_max = v },
        ChampionStatField { key: "powerRegen", default: 0, get: |s| s.power_regen, set: |s, v| s.power_regen = v },
        ChampionStatField { key: "spellVamp", default: 0, get: |s| s.spell_vamp, set: |s, v| s.spell_vamp = v },
    ];
}
