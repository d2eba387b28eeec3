//! The generation pipeline
//!
//! One run owns one grid and threads one RNG through every stage in a fixed
//! order, so a seed always reproduces the same map. Any stage error aborts the
//! run; retrying with another seed is the caller's choice.

use log::{debug, info, warn};

use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::rng::GameRng;
use crate::{AREA_COUNT, HUB_AREA, STARTING_TEXT_ROOM};

use super::decoration::{decorate_area_transitions, decorate_corridor_transitions, decorate_randomly};
use super::encode::{pack_rooms, predicted_size};
use super::enemies::populate_enemies;
use super::entrance::open_entrances;
use super::grid::{Grid, Pos};
use super::growth::{ConnectionRule, add_connections, grow_area};
use super::hub::{build_hub_ring, place_cardinal_points, place_starting_text_room};
use super::lookup::RoomLookup;
use super::placement::{place_important_rooms, place_items, place_safe_rooms, place_starting_points};
use super::skeleton::{AreaSkeleton, Layout};
use super::tables::ContentTables;

/// Fail the attempt when any accessible room is cut off from the starting room
fn ensure_connected(grid: &Grid) -> Result<()> {
    let start = Pos::new(STARTING_TEXT_ROOM.0, STARTING_TEXT_ROOM.1);
    let reached = grid.reachable_from(start).len();
    let unreachable = grid.accessible_count().saturating_sub(reached);
    if unreachable > 0 {
        return Err(MapError::Disconnected { unreachable });
    }
    Ok(())
}

/// Output of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    /// Seed of the RNG the map was generated from
    pub seed: u64,
    pub layout: Layout,
    /// Packed room table including the terminator
    pub bytes: Vec<u8>,
    pub lookup: RoomLookup,
}

impl GeneratedMap {
    /// Room data size, excluding the terminator
    pub fn room_bytes(&self) -> usize {
        self.bytes.len().saturating_sub(1)
    }
}

/// Map generator holding immutable parameters and content tables
#[derive(Debug, Clone)]
pub struct MapGenerator {
    config: MapConfig,
    tables: ContentTables,
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self {
            config: MapConfig::default(),
            tables: ContentTables::default(),
        }
    }
}

impl MapGenerator {
    pub fn new(config: MapConfig, tables: ContentTables) -> Result<Self> {
        config.validate()?;
        if !tables.is_complete() {
            return Err(MapError::InvalidConfig(format!(
                "content tables must cover {} areas and at least one item block set",
                AREA_COUNT
            )));
        }
        Ok(Self { config, tables })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn tables(&self) -> &ContentTables {
        &self.tables
    }

    /// Draw a layout and build the finished grid (everything but packing)
    pub fn build_grid(&self, rng: &mut GameRng) -> Result<(Layout, Grid)> {
        let layout = Layout::random(rng);
        debug!(
            "layout: flip {}, rotation {}, areas {:?}",
            layout.flip, layout.rotation, layout.permutation
        );
        let grid = self.build_grid_with_layout(rng, &layout)?;
        Ok((layout, grid))
    }

    /// Build the finished grid for a given layout
    pub fn build_grid_with_layout(&self, rng: &mut GameRng, layout: &Layout) -> Result<Grid> {
        let config = &self.config;
        let sets = &self.tables.block_sets;

        let skeleton = AreaSkeleton::standard().transformed(layout)?;
        let mut grid = Grid::from_skeleton(&skeleton);

        build_hub_ring(&mut grid);
        place_cardinal_points(&mut grid, &sets.cardinal);
        open_entrances(&mut grid, rng)?;

        let two_way = ConnectionRule {
            one_way: false,
            portal_only: false,
        };
        let one_way = ConnectionRule {
            one_way: true,
            portal_only: config.portal_only_one_way,
        };
        for &area in &layout.permutation {
            let area = area as i8;
            let size = rng.rn_range(config.area_size_min, config.area_size_max);
            grow_area(&mut grid, rng, area, size);
            add_connections(&mut grid, rng, area, config.area_extra_connections, two_way);
        }
        grow_area(&mut grid, rng, HUB_AREA, config.hub_size);
        add_connections(&mut grid, rng, HUB_AREA, config.hub_extra_connections, two_way);

        place_starting_points(&mut grid);
        decorate_area_transitions(&mut grid, rng, sets);
        place_starting_text_room(&mut grid);

        for area in 0..AREA_COUNT as u8 {
            place_important_rooms(&mut grid, rng, &self.tables, area)?;
            place_items(&mut grid, rng, &self.tables, area)?;
            place_safe_rooms(&mut grid, rng, &self.tables, area)?;
        }

        // One-way extras wait for typed rooms so the portal-only rule has endpoints
        for &area in &layout.permutation {
            add_connections(&mut grid, rng, area as i8, config.area_one_way_connections, one_way);
        }
        add_connections(&mut grid, rng, HUB_AREA, config.hub_one_way_connections, one_way);

        decorate_corridor_transitions(&mut grid, rng, sets);
        decorate_randomly(
            &mut grid,
            rng,
            sets,
            config.decoration_one_in,
            config.chip_one_in,
        );
        populate_enemies(&mut grid, rng, config.enemy_chance);

        ensure_connected(&grid)?;
        debug!("{} accessible rooms", grid.accessible_count());
        Ok(grid)
    }

    /// Run the whole pipeline and pack the room table
    pub fn generate(&self, rng: &mut GameRng) -> Result<GeneratedMap> {
        let seed = rng.seed();
        let (layout, grid) = self.build_grid(rng)?;
        let limit = self.config.max_room_bytes;
        let predicted = predicted_size(&grid);
        if predicted > limit {
            debug!("predicted {} bytes, skipping the pack", predicted);
            return Err(MapError::SizeBudget {
                size: predicted,
                limit,
            });
        }
        let bytes = pack_rooms(&grid, limit)?;
        let lookup = RoomLookup::from_grid(&grid, &self.tables);
        Ok(GeneratedMap {
            seed,
            layout,
            bytes,
            lookup,
        })
    }

    /// Try seeds `seed`, `seed + 1`, ... until one produces a valid map
    ///
    /// Returns the last error if every attempt fails.
    pub fn generate_with_retries(&self, seed: u64, attempts: u32) -> Result<GeneratedMap> {
        let mut last = MapError::InvalidConfig("at least one attempt is required".to_string());
        for attempt in 0..attempts {
            let attempt_seed = seed.wrapping_add(u64::from(attempt));
            let mut rng = GameRng::new(attempt_seed);
            match self.generate(&mut rng) {
                Ok(map) => {
                    if attempt > 0 {
                        info!("seed {} succeeded after {} retries", attempt_seed, attempt);
                    }
                    return Ok(map);
                }
                Err(err) => {
                    warn!("seed {} failed: {}", attempt_seed, err);
                    last = err;
                }
            }
        }
        Err(last)
    }
}
