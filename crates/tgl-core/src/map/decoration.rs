//! Block-set decoration passes

use log::debug;

use crate::rng::GameRng;

use super::grid::{Grid, Pos};
use super::room::{Direction, RoomType};
use super::tables::{BlockSets, DirectionalSets};

fn undecorated_normal(grid: &Grid, pos: Pos) -> bool {
    let room = grid.room(pos);
    room.room_type == RoomType::Normal && room.block_set.is_none()
}

/// Neighbours reached through `pos`'s exits, with the side of the
/// neighbour that faces `pos`
fn exit_neighbours(grid: &Grid, pos: Pos) -> Vec<(Pos, Direction)> {
    let room = grid.room(pos);
    Direction::SCAN
        .into_iter()
        .filter(|&dir| room.has_exit(dir))
        .filter_map(|dir| pos.step(dir).map(|next| (next, dir.opposite())))
        .collect()
}

/// Decorate the rooms next to each peripheral starting point
///
/// Each coin flip picks between the plain and the chip-box palette for the
/// side of the neighbour that faces the starting point.
pub fn decorate_area_transitions(grid: &mut Grid, rng: &mut GameRng, sets: &BlockSets) -> usize {
    let mut decorated = 0;
    for start in grid.positions_where(|r| r.is_entrance && r.area > 0) {
        for (next, facing) in exit_neighbours(grid, start) {
            if !undecorated_normal(grid, next) {
                continue;
            }
            let plain = rng.random_f64() < 0.5;
            let palette: &DirectionalSets = if plain {
                &sets.area_transition_no_chips
            } else {
                &sets.area_transition_with_chips
            };
            if let Some(&set) = rng.choose(palette.get(facing)) {
                let room = grid.room_mut(next);
                room.block_set = Some(set);
                room.has_chip_tile = !plain;
                decorated += 1;
            }
        }
    }
    debug!("{} area transition rooms decorated", decorated);
    decorated
}

/// Decorate the accessible plain rooms next to each corridor entrance
///
/// Only area 1 starts on a corridor. Every other corridor lands anywhere in
/// its area, so the pass follows the Corridor rooms rather than the starts.
pub fn decorate_corridor_transitions(
    grid: &mut Grid,
    rng: &mut GameRng,
    sets: &BlockSets,
) -> usize {
    let mut decorated = 0;
    for corridor in grid.positions_where(|r| r.accessible && r.room_type == RoomType::Corridor) {
        for (next, facing) in exit_neighbours(grid, corridor) {
            if !grid.room(next).accessible || !undecorated_normal(grid, next) {
                continue;
            }
            if let Some(&set) = rng.choose(sets.corridor_transition.get(facing)) {
                let room = grid.room_mut(next);
                room.block_set = Some(set);
                room.has_chip_tile = false;
                decorated += 1;
            }
        }
    }
    debug!("{} corridor transition rooms decorated", decorated);
    decorated
}

/// Give a 1-in-`decoration_one_in` share of plain rooms an ambient layout,
/// with chip boxes 1 in `chip_one_in` times
pub fn decorate_randomly(
    grid: &mut Grid,
    rng: &mut GameRng,
    sets: &BlockSets,
    decoration_one_in: u32,
    chip_one_in: u32,
) -> usize {
    let mut decorated = 0;
    for pos in grid.positions_where(|r| r.is_plain()) {
        if !rng.one_in(decoration_one_in) {
            continue;
        }
        let chips = rng.one_in(chip_one_in);
        let palette = if chips { &sets.with_chips } else { &sets.no_chips };
        if let Some(&set) = rng.choose(palette) {
            let room = grid.room_mut(pos);
            room.block_set = Some(set);
            room.has_chip_tile = chips;
            decorated += 1;
        }
    }
    debug!("{} rooms decorated at random", decorated);
    decorated
}
