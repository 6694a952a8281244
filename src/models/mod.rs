use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod element;
pub mod garden;
pub mod plant;
pub mod request;
pub mod weather;

/// A position on the garden grid, in grid units (one unit = one cell).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Footprint of an element in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees. Ignored by collision checks.
    #[serde(default)]
    pub rotation: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            rotation: 0.0,
        }
    }
}

/// One grid cell: the footprint assumed when an element carries no size.
impl Default for Dimensions {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
