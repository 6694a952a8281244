use log::debug;

use crate::error::PlannerError;
use crate::logic::geometry::{
    colliding_elements, grid_to_pixel, pixel_to_grid, update_element_position, Point,
};
use crate::models::{garden::Garden, Position};

/// Result of dropping an element at a pixel position.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The drop is free; the element snaps to `grid_position`.
    Accepted { grid_position: Position },
    /// The drop would overlap the listed elements; nothing changes.
    Rejected { colliding: Vec<String> },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Evaluates a drop without touching the garden.
///
/// The footprint is tested both where it was dropped and where it would snap
/// to, so an accepted drop can never end up overlapping after snapping.
/// Safe to call on every pointer move for live feedback.
pub fn propose_move(
    garden: &Garden,
    element_id: &str,
    pixel: Point,
    cell_size: f64,
) -> Result<MoveOutcome, PlannerError> {
    let moving = garden
        .element(element_id)
        .ok_or_else(|| PlannerError::ElementNotFound {
            garden: garden.id.clone(),
            element: element_id.to_string(),
        })?;

    let grid_position = pixel_to_grid(Some(pixel), cell_size);
    let snapped = grid_to_pixel(Some(grid_position), cell_size);

    let mut colliding: Vec<String> = Vec::new();
    for at in [pixel, snapped] {
        for other in colliding_elements(moving, at, &garden.elements, cell_size) {
            if !colliding.contains(&other.id) {
                colliding.push(other.id.clone());
            }
        }
    }

    if colliding.is_empty() {
        Ok(MoveOutcome::Accepted { grid_position })
    } else {
        debug!(
            "drop of '{element_id}' at ({}, {}) blocked by {colliding:?}",
            pixel.x, pixel.y
        );
        Ok(MoveOutcome::Rejected { colliding })
    }
}

/// Commits a drop, or fails with [`PlannerError::Collision`] leaving the garden unchanged.
pub fn apply_move(
    garden: &mut Garden,
    element_id: &str,
    pixel: Point,
    cell_size: f64,
) -> Result<Position, PlannerError> {
    match propose_move(garden, element_id, pixel, cell_size)? {
        MoveOutcome::Rejected { colliding } => Err(PlannerError::Collision {
            element: element_id.to_string(),
            colliding,
        }),
        MoveOutcome::Accepted { grid_position } => {
            if let Some(slot) = garden.elements.iter_mut().find(|e| e.id == element_id) {
                *slot = update_element_position(slot, grid_position);
            }
            garden.touch();
            Ok(grid_position)
        }
    }
}
