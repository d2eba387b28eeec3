//! tgl-core: Map generation for The Guardian Legend
//!
//! This crate builds randomized room tables with no I/O dependencies.
//! Every run is driven by a seeded [`GameRng`], so it is pure and testable.

pub mod config;
pub mod error;
pub mod map;

mod consts;
mod rng;

pub use config::MapConfig;
pub use consts::*;
pub use error::{MapError, Result};
pub use map::{GeneratedMap, Grid, MapGenerator, RoomLookup};
pub use rng::GameRng;
