//! Generation parameters
//!
//! Every knob of the pipeline that is not content data. Loaded from JSON by
//! front-ends; missing fields fall back to the game's defaults.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::map::AreaSkeleton;
use crate::{HUB_AREA, MAX_ROOM_BYTES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Rooms grown per peripheral area, drawn from `area_size_min..=area_size_max`
    pub area_size_min: u32,
    pub area_size_max: u32,
    /// Rooms grown in the hub, at least the hub's cell count so growth
    /// reaches the starting text room
    pub hub_size: u32,
    /// Extra two-way connections per peripheral area
    pub area_extra_connections: u32,
    /// Extra one-way connections per peripheral area
    pub area_one_way_connections: u32,
    pub hub_extra_connections: u32,
    pub hub_one_way_connections: u32,
    /// Restrict one-way connections to rooms touching a portal-eligible room
    pub portal_only_one_way: bool,
    /// Probability a Normal or Item room gets an enemy group
    pub enemy_chance: f64,
    /// 1-in-N chance an undecorated room gets an ambient block set
    pub decoration_one_in: u32,
    /// 1-in-N chance an ambient block set has chip boxes
    pub chip_one_in: u32,
    /// Room table budget in bytes, excluding the terminator
    pub max_room_bytes: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            area_size_min: 18,
            area_size_max: 25,
            hub_size: 50,
            area_extra_connections: 3,
            area_one_way_connections: 0,
            hub_extra_connections: 6,
            hub_one_way_connections: 0,
            portal_only_one_way: false,
            enemy_chance: 0.9,
            decoration_one_in: 5,
            chip_one_in: 3,
            max_room_bytes: MAX_ROOM_BYTES,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<()> {
        if self.area_size_min > self.area_size_max {
            return Err(MapError::InvalidConfig(format!(
                "area_size_min {} exceeds area_size_max {}",
                self.area_size_min, self.area_size_max
            )));
        }
        let hub_cells = AreaSkeleton::standard().cell_count(HUB_AREA);
        if (self.hub_size as usize) < hub_cells {
            return Err(MapError::InvalidConfig(format!(
                "hub_size {} is below the {} hub cells it must fill",
                self.hub_size, hub_cells
            )));
        }
        if !(0.0..=1.0).contains(&self.enemy_chance) {
            return Err(MapError::InvalidConfig(format!(
                "enemy_chance {} is not a probability",
                self.enemy_chance
            )));
        }
        if self.decoration_one_in == 0 || self.chip_one_in == 0 {
            return Err(MapError::InvalidConfig(
                "decoration_one_in and chip_one_in must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MapConfig = serde_json::from_str(r#"{ "hub_size": 30 }"#).unwrap();
        assert_eq!(config.hub_size, 30);
        assert_eq!(config.area_size_min, 18);
        assert_eq!(config.max_room_bytes, MAX_ROOM_BYTES);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let inverted = MapConfig {
            area_size_min: 30,
            area_size_max: 20,
            ..MapConfig::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(MapError::InvalidConfig(_))
        ));

        let bad_chance = MapConfig {
            enemy_chance: 1.5,
            ..MapConfig::default()
        };
        assert!(bad_chance.validate().is_err());

        let small_hub = MapConfig {
            hub_size: 14,
            ..MapConfig::default()
        };
        assert!(matches!(
            small_hub.validate(),
            Err(MapError::InvalidConfig(_))
        ));
        let full_hub = MapConfig {
            hub_size: 48,
            ..MapConfig::default()
        };
        assert!(full_hub.validate().is_ok());

        let zero = MapConfig {
            decoration_one_in: 0,
            ..MapConfig::default()
        };
        assert!(zero.validate().is_err());
    }
}
