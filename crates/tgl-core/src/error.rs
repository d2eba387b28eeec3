//! Map generation errors
//!
//! Every variant is fatal for the generation attempt that raised it. Callers
//! abort the attempt and may retry with another seed.

use thiserror::Error;

use crate::map::ContentKind;

/// Errors raised while generating or packing a map
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("no valid hub entrance for area {area}")]
    NoEntrance { area: u8 },

    #[error("not enough suitable rooms in area {area} to place {content}")]
    Capacity { area: u8, content: ContentKind },

    #[error("room at row {row}, col {col} cannot be encoded: {reason}")]
    Encoding {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    #[error("{unreachable} accessible rooms cannot be reached from the starting room")]
    Disconnected { unreachable: usize },

    #[error("map is {size} bytes, exceeding the {limit} byte room table budget")]
    SizeBudget { size: usize, limit: usize },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
