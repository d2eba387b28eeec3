//! Enemy population

use log::debug;

use crate::MAX_ENEMY_GROUP;
use crate::rng::GameRng;

use super::grid::Grid;

/// Roll an enemy group for every accessible Normal or Item room
///
/// A room is populated when a uniform draw exceeds `1 - chance`.
pub fn populate_enemies(grid: &mut Grid, rng: &mut GameRng, chance: f64) -> usize {
    let threshold = 1.0 - chance;
    let mut populated = 0;
    for pos in grid.positions_where(|r| r.accessible && r.room_type.can_have_enemies()) {
        if rng.random_f64() > threshold {
            grid.room_mut(pos).enemy_group = rng.rn2(u32::from(MAX_ENEMY_GROUP)) as u8 + 1;
            populated += 1;
        }
    }
    debug!("{} rooms populated with enemies", populated);
    populated
}
