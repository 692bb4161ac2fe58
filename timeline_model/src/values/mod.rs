//! Enumerated wire values: team sides, lanes, buildings, towers, wards.
//!
//! Every enumeration carries an `Unknown` sentinel. The `from_value` mappings
//! are total: a literal that is not recognized decodes to `Unknown` instead of
//! failing, so a new value introduced upstream never breaks decoding.

use serde::{Deserialize, Serialize};

/// The side a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TeamSide {
    /// Team id 100.
    Blue,
    /// Team id 200.
    Red,
    #[default]
    Unknown,
}

impl TeamSide {
    /// Map a numeric team id.
    pub fn from_id(id: i64) -> Self {
        match id {
            100 => TeamSide::Blue,
            200 => TeamSide::Red,
            _ => TeamSide::Unknown,
        }
    }

    /// Map a string literal. Accepts both the side name and the numeric id
    /// written as a string.
    pub fn from_value(value: &str) -> Self {
        match value {
            "BLUE" | "100" => TeamSide::Blue,
            "RED" | "200" => TeamSide::Red,
            _ => TeamSide::Unknown,
        }
    }
}

/// Map lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LaneType {
    Top,
    Mid,
    Bot,
    #[default]
    Unknown,
}

impl LaneType {
    pub fn from_value(value: &str) -> Self {
        match value {
            "TOP_LANE" => LaneType::Top,
            "MID_LANE" => LaneType::Mid,
            "BOT_LANE" => LaneType::Bot,
            _ => LaneType::Unknown,
        }
    }
}

/// Destructible structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BuildingType {
    Tower,
    Inhibitor,
    #[default]
    Unknown,
}

impl BuildingType {
    pub fn from_value(value: &str) -> Self {
        match value {
            "TOWER_BUILDING" => BuildingType::Tower,
            "INHIBITOR_BUILDING" => BuildingType::Inhibitor,
            _ => BuildingType::Unknown,
        }
    }
}

/// Tower tiers, from the outermost turret to the nexus turrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TowerType {
    Outer,
    Inner,
    Base,
    Nexus,
    #[default]
    Unknown,
}

impl TowerType {
    pub fn from_value(value: &str) -> Self {
        match value {
            "OUTER_TURRET" => TowerType::Outer,
            "INNER_TURRET" => TowerType::Inner,
            "BASE_TURRET" => TowerType::Base,
            "NEXUS_TURRET" => TowerType::Nexus,
            _ => TowerType::Unknown,
        }
    }
}

/// Vision wards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WardType {
    YellowTrinket,
    ControlWard,
    SightWard,
    BlueTrinket,
    TeemoMushroom,
    /// The API's own "no ward type" literal, distinct from an unrecognized one.
    Undefined,
    #[default]
    Unknown,
}

impl WardType {
    pub fn from_value(value: &str) -> Self {
        match value {
            "YELLOW_TRINKET" => WardType::YellowTrinket,
            "CONTROL_WARD" => WardType::ControlWard,
            "SIGHT_WARD" => WardType::SightWard,
            "BLUE_TRINKET" => WardType::BlueTrinket,
            "TEEMO_MUSHROOM" => WardType::TeemoMushroom,
            "UNDEFINED" => WardType::Undefined,
            _ => WardType::Unknown,
        }
    }
}
