//! Map system
//!
//! Contains the room grid, the area skeleton, content tables and every stage
//! of the generation pipeline, down to the packed room table.

mod decoration;
mod display;
mod encode;
mod enemies;
mod entrance;
mod generator;
mod grid;
mod growth;
mod hub;
mod lookup;
mod placement;
mod room;
mod skeleton;
mod tables;

pub use decoration::{decorate_area_transitions, decorate_corridor_transitions, decorate_randomly};
pub use encode::{RoomRecord, encode_room, pack_rooms, predicted_size};
pub use enemies::populate_enemies;
pub use entrance::{SeamCandidate, entrance_candidates, open_entrances};
pub use generator::{GeneratedMap, MapGenerator};
pub use grid::{Grid, Pos, SuitableFilter};
pub use growth::{ConnectionRule, add_connections, grow_area};
pub use hub::{build_hub_ring, place_cardinal_points, place_starting_text_room};
pub use lookup::{GenericRoom, RoomLookup, RoomPlacement, vanilla_location};
pub use placement::{place_important_rooms, place_items, place_safe_rooms, place_starting_points};
pub use room::{Direction, Exits, Room, RoomType};
pub use skeleton::{AreaSkeleton, Layout};
pub use tables::{BlockSets, CardinalSets, ContentKind, ContentTables, DirectionalSets, ShopEntry};
