//! Text dumps of a grid for diagnostics

use std::fmt;

use super::grid::Grid;
use super::room::{Direction, Room, RoomType};

const OPEN: &str = "░░";
const CLOSED_INACCESSIBLE: &str = "╬╬";

/// Two-character glyph for the middle of a room cell
fn glyph(room: &Room) -> String {
    if !room.accessible {
        return CLOSED_INACCESSIBLE.to_string();
    }
    let id = room.content_id;
    match room.room_type {
        RoomType::Save => "SV".to_string(),
        RoomType::Corridor => match id {
            0..=9 => format!("X{}", id),
            10 => "XA".to_string(),
            20 => "xA".to_string(),
            21 => "XF".to_string(),
            _ => format!("x{}", id.saturating_sub(10)),
        },
        RoomType::Text => "TX".to_string(),
        RoomType::MultiShop => format!("S{}", id.saturating_sub(0x3F)),
        RoomType::SingleShop => format!("s{}", id.saturating_sub(0x3A)),
        RoomType::Miniboss | RoomType::Item => format!("{:02}", id),
        RoomType::Normal => OPEN.to_string(),
    }
}

impl Grid {
    /// One character per room: area digit, `A` for area 10, `X` for walls
    pub fn area_map(&self) -> String {
        let mut out = String::new();
        for line in &self.cells {
            for room in line {
                match room.area {
                    a if a < 0 => out.push_str("X "),
                    10 => out.push_str("A "),
                    a => out.push_str(&format!("{} ", a)),
                }
            }
            out.push('\n');
        }
        out
    }

    /// `O` for accessible rooms, `X` otherwise
    pub fn access_map(&self) -> String {
        let mut out = String::new();
        for line in &self.cells {
            for room in line {
                out.push_str(if room.accessible { "O " } else { "X " });
            }
            out.push('\n');
        }
        out
    }

    /// Box-drawing map: three text lines per grid row, exits drawn open
    pub fn visual_map(&self) -> String {
        let mut out = String::new();
        for line in &self.cells {
            for room in line {
                let door = if room.has_exit(Direction::Up) { OPEN } else { "══" };
                out.push_str(&format!("╔═{}═╗", door));
            }
            out.push('\n');
            for room in line {
                let left = if room.has_exit(Direction::Left) { OPEN } else { "║║" };
                let right = if room.has_exit(Direction::Right) { OPEN } else { "║║" };
                out.push_str(left);
                out.push_str(&glyph(room));
                out.push_str(right);
            }
            out.push('\n');
            for room in line {
                let door = if room.has_exit(Direction::Down) { OPEN } else { "══" };
                out.push_str(&format!("╚═{}═╝", door));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Areas:")?;
        writeln!(f, "{}", self.area_map())?;
        writeln!(f, "Accessibility:")?;
        writeln!(f, "{}", self.access_map())?;
        writeln!(f, "Visual map:")?;
        write!(f, "{}", self.visual_map())
    }
}
