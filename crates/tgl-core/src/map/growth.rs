//! Region growth and extra connections
//!
//! Areas grow as random spanning trees from their already accessible rooms.
//! Extra connections then add loops between accessible rooms of the same area.

use log::{debug, info};

use crate::rng::GameRng;

use super::grid::{Grid, Pos};
use super::room::Direction;

/// Grow up to `target` new rooms in `area`, returns how many were grown
pub fn grow_area(grid: &mut Grid, rng: &mut GameRng, area: i8, target: u32) -> u32 {
    let mut frontier = grid.accessible_in(area);
    let mut grown = 0;

    while grown < target {
        let Some(idx) = rng.choose_index(frontier.len()) else {
            break;
        };
        let pos = frontier[idx];
        let order = rng.sample(&Direction::ALL, Direction::ALL.len());

        let next = order.into_iter().find_map(|dir| {
            let (next, room) = grid.neighbor(pos, dir)?;
            (room.area == area && !room.accessible).then_some((dir, next))
        });
        match next {
            Some((dir, next)) => {
                grid.link(pos, dir);
                grid.room_mut(next).accessible = true;
                frontier.push(next);
                grown += 1;
            }
            None => {
                frontier.remove(idx);
            }
        }
    }

    if grown < target {
        info!("area {} saturated at {} of {} grown rooms", area, grown, target);
    } else {
        debug!("area {} grew {} rooms", area, grown);
    }
    grown
}

/// How extra connections are made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionRule {
    /// Only set the exit on the chosen room
    pub one_way: bool,
    /// Only connect when either side is a portal-eligible room
    pub portal_only: bool,
}

fn can_connect(grid: &Grid, pos: Pos, dir: Direction, area: i8, rule: ConnectionRule) -> bool {
    let room = grid.room(pos);
    if room.has_exit(dir) {
        return false;
    }
    let Some((_, other)) = grid.neighbor(pos, dir) else {
        return false;
    };
    if other.area != area || !other.accessible {
        return false;
    }
    !rule.portal_only || room.room_type.is_portal_eligible() || other.room_type.is_portal_eligible()
}

/// Add up to `count` exits between adjacent accessible rooms of `area`
///
/// Returns the number of connections made.
pub fn add_connections(
    grid: &mut Grid,
    rng: &mut GameRng,
    area: i8,
    count: u32,
    rule: ConnectionRule,
) -> u32 {
    let mut candidates = grid.accessible_in(area);
    let mut made = 0;

    while made < count {
        let Some(idx) = rng.choose_index(candidates.len()) else {
            break;
        };
        let pos = candidates[idx];
        let dir = Direction::ALL[rng.rn2(4) as usize];

        let legal: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| can_connect(grid, pos, d, area, rule))
            .collect();
        if legal.is_empty() {
            candidates.remove(idx);
            continue;
        }
        if !legal.contains(&dir) {
            continue;
        }

        grid.room_mut(pos).exits |= dir.exit();
        if rule.one_way {
            grid.one_way_exits.push((pos, dir));
        } else if let Some(next) = pos.step(dir) {
            grid.room_mut(next).exits |= dir.opposite().exit();
        }
        made += 1;
    }

    if made > 0 {
        debug!(
            "area {} gained {} {} connections",
            area,
            made,
            if rule.one_way { "one-way" } else { "two-way" }
        );
    }
    made
}
