//! Hub (area 0) setup
//!
//! The ring of rooms along the hub's walls, the four cardinal landmark rooms
//! on that ring, and the fixed starting text room.

use log::{debug, warn};

use crate::STARTING_TEXT_ROOM;

use super::grid::{Grid, Pos};
use super::room::{Direction, Exits, RoomType};
use super::tables::CardinalSets;

fn mark_ring(grid: &mut Grid, pos: Pos) {
    let room = grid.room_mut(pos);
    room.accessible = true;
    room.avoid_special = true;
}

/// Carve the walkable loop of hub rooms that touch a wall
pub fn build_hub_ring(grid: &mut Grid) {
    let wall_at = |grid: &Grid, pos: Pos, dir: Direction| {
        grid.neighbor(pos, dir).is_some_and(|(_, r)| r.is_wall())
    };

    for pos in Grid::positions() {
        if !grid.room(pos).is_hub() {
            continue;
        }
        let axes = [
            (
                wall_at(grid, pos, Direction::Up) || wall_at(grid, pos, Direction::Down),
                [Direction::Left, Direction::Right],
            ),
            (
                wall_at(grid, pos, Direction::Left) || wall_at(grid, pos, Direction::Right),
                [Direction::Up, Direction::Down],
            ),
        ];
        for (touches_wall, along) in axes {
            if !touches_wall {
                continue;
            }
            mark_ring(grid, pos);
            for dir in along {
                if let Some((next, room)) = grid.neighbor(pos, dir)
                    && room.is_hub()
                {
                    grid.link(pos, dir);
                    mark_ring(grid, next);
                }
            }
        }
    }
}

/// Candidate on `line` whose `coord` is closest to the line's mean coord.
/// Ties go to the later candidate in scan order.
fn closest_to_mean<L, C>(candidates: &[Pos], on_line: L, coord: C) -> Option<Pos>
where
    L: Fn(&Pos) -> bool,
    C: Fn(&Pos) -> usize,
{
    let line: Vec<Pos> = candidates.iter().copied().filter(|p| on_line(p)).collect();
    if line.is_empty() {
        return None;
    }
    let mean = line.iter().map(|p| coord(p) as f64).sum::<f64>() / line.len() as f64;

    let mut best: Option<(Pos, f64)> = None;
    for pos in line {
        let distance = (mean - coord(&pos) as f64).abs();
        if best.is_none_or(|(_, d)| distance <= d) {
            best = Some((pos, distance));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Decorate the northern, southern, western and eastern ring rooms
///
/// Returns the number of landmarks placed (0 if the ring is empty).
pub fn place_cardinal_points(grid: &mut Grid, sets: &CardinalSets) -> usize {
    let ring = grid.positions_where(|r| {
        r.is_hub() && r.avoid_special && r.room_type == RoomType::Normal && r.accessible
    });
    let (Some(north), Some(south), Some(west), Some(east)) = (
        ring.iter().map(|p| p.row).min(),
        ring.iter().map(|p| p.row).max(),
        ring.iter().map(|p| p.col).min(),
        ring.iter().map(|p| p.col).max(),
    ) else {
        warn!("hub ring is empty, no cardinal landmarks placed");
        return 0;
    };

    let picks = [
        (closest_to_mean(&ring, |p| p.row == north, |p| p.col), sets.north),
        (closest_to_mean(&ring, |p| p.row == south, |p| p.col), sets.south),
        (closest_to_mean(&ring, |p| p.col == west, |p| p.row), sets.west),
        (closest_to_mean(&ring, |p| p.col == east, |p| p.row), sets.east),
    ];

    let mut placed = 0;
    for (pos, block_set) in picks {
        if let Some(pos) = pos {
            debug!("cardinal landmark {:#06X} at {:?}", block_set, pos);
            grid.room_mut(pos).block_set = Some(block_set);
            placed += 1;
        }
    }
    placed
}

/// Force the fixed starting room to text page 0 with all four exits open
pub fn place_starting_text_room(grid: &mut Grid) {
    let start = Pos::new(STARTING_TEXT_ROOM.0, STARTING_TEXT_ROOM.1);
    {
        let room = grid.room_mut(start);
        room.accessible = true;
        room.room_type = RoomType::Text;
        room.content_id = 0;
        room.exits = Exits::all();
    }
    for dir in Direction::ALL {
        if let Some(next) = start.step(dir) {
            let room = grid.room_mut(next);
            room.accessible = true;
            room.exits |= dir.opposite().exit();
        }
    }
}
