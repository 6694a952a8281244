use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use log::info;
use serde_json::{Map, Value};

use super::{new_id, read, write};
use crate::error::PlannerError;
use crate::logic::geometry::{clamp_dimensions, Point};
use crate::logic::placement::{apply_move, propose_move, MoveOutcome};
use crate::models::{
    element::GardenElement,
    garden::{Garden, GardenUpdate, NewGarden, PlotDimensions},
    Position,
};

#[derive(Debug, Default)]
pub struct GardenStore {
    gardens: RwLock<HashMap<String, Garden>>,
}

fn validate_name(name: &str) -> Result<(), PlannerError> {
    if name.trim().is_empty() {
        return Err(PlannerError::Validation("Garden name must not be empty.".into()));
    }
    Ok(())
}

fn validate_dimensions(dimensions: &PlotDimensions) -> Result<(), PlannerError> {
    if !(dimensions.width > 0.0 && dimensions.height > 0.0) {
        return Err(PlannerError::Validation(
            "Garden dimensions (width, height) must be strictly positive.".into(),
        ));
    }
    Ok(())
}

/// Clamps the element to a one-cell footprint and keeps its id, unless the id
/// is blank or already in `taken`; then a fresh one is minted.
fn admit(mut element: GardenElement, taken: &mut HashSet<String>) -> GardenElement {
    if element.id.trim().is_empty() || !taken.insert(element.id.clone()) {
        element.id = new_id();
        taken.insert(element.id.clone());
    }
    element.dimensions = clamp_dimensions(element.dimensions);
    element
}

fn admit_all(elements: Vec<GardenElement>) -> Vec<GardenElement> {
    let mut taken = HashSet::with_capacity(elements.len());
    elements
        .into_iter()
        .map(|element| admit(element, &mut taken))
        .collect()
}

/// Sets `group.axis` (e.g. `position.x`), leaving the group's other fields as stored.
fn overlay(merged: &mut Map<String, Value>, group: &str, axis: String, value: Value) {
    let slot = merged
        .entry(group)
        .or_insert_with(|| Value::Object(Map::new()));
    match slot {
        Value::Object(fields) => {
            fields.insert(axis, value);
        }
        other => {
            let mut fields = Map::new();
            fields.insert(axis, value);
            *other = Value::Object(fields);
        }
    }
}

/// Overlays `patch` on the stored element, field by field. Flat `x`/`y` and
/// `width`/`height`/`rotation` land on the matching nested axis, and a partial
/// nested `position` or `dimensions` only replaces the axes it names.
fn merge_element(current: &GardenElement, patch: Value) -> Result<GardenElement, PlannerError> {
    let Value::Object(patch) = patch else {
        return Err(PlannerError::Validation("Element update must be a JSON object.".into()));
    };
    let mut merged = match serde_json::to_value(current)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in patch {
        let group = match key.as_str() {
            "id" | "_id" => continue,
            "x" | "y" => Some("position"),
            "width" | "height" | "rotation" => Some("dimensions"),
            _ => None,
        };
        match (group, value) {
            (Some(group), value) => overlay(&mut merged, group, key, value),
            (None, Value::Object(fields)) if key == "position" || key == "dimensions" => {
                for (axis, v) in fields {
                    overlay(&mut merged, &key, axis, v);
                }
            }
            (None, value) => {
                merged.insert(key, value);
            }
        }
    }
    let mut element: GardenElement = serde_json::from_value(Value::Object(merged))?;
    element.id = current.id.clone();
    element.dimensions = clamp_dimensions(element.dimensions);
    Ok(element)
}

impl GardenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_garden_mut<T>(
        &self,
        garden_id: &str,
        f: impl FnOnce(&mut Garden) -> Result<T, PlannerError>,
    ) -> Result<T, PlannerError> {
        let mut gardens = write(&self.gardens);
        let garden = gardens
            .get_mut(garden_id)
            .ok_or_else(|| PlannerError::GardenNotFound(garden_id.to_string()))?;
        f(garden)
    }

    /// All gardens, oldest first.
    pub fn list(&self) -> Vec<Garden> {
        let mut gardens: Vec<Garden> = read(&self.gardens).values().cloned().collect();
        gardens.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        gardens
    }

    pub fn get(&self, garden_id: &str) -> Result<Garden, PlannerError> {
        read(&self.gardens)
            .get(garden_id)
            .cloned()
            .ok_or_else(|| PlannerError::GardenNotFound(garden_id.to_string()))
    }

    pub fn create(&self, mut new: NewGarden) -> Result<Garden, PlannerError> {
        validate_name(&new.name)?;
        validate_dimensions(&new.dimensions)?;
        new.elements = admit_all(new.elements);
        let garden = Garden::from_new(new_id(), new);
        info!("created garden '{}' ({})", garden.name, garden.id);
        write(&self.gardens).insert(garden.id.clone(), garden.clone());
        Ok(garden)
    }

    pub fn update(
        &self,
        garden_id: &str,
        mut update: GardenUpdate,
    ) -> Result<Garden, PlannerError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(dimensions) = &update.dimensions {
            validate_dimensions(dimensions)?;
        }
        update.elements = update.elements.map(admit_all);
        self.with_garden_mut(garden_id, |garden| {
            garden.apply(update);
            Ok(garden.clone())
        })
    }

    pub fn delete(&self, garden_id: &str) -> Result<(), PlannerError> {
        write(&self.gardens)
            .remove(garden_id)
            .map(|garden| info!("deleted garden '{}' ({})", garden.name, garden.id))
            .ok_or_else(|| PlannerError::GardenNotFound(garden_id.to_string()))
    }

    /// Adds an element and returns the updated garden along with the stored element.
    pub fn add_element(
        &self,
        garden_id: &str,
        element: GardenElement,
    ) -> Result<(Garden, GardenElement), PlannerError> {
        self.with_garden_mut(garden_id, |garden| {
            let mut taken: HashSet<String> =
                garden.elements.iter().map(|e| e.id.clone()).collect();
            let element = admit(element, &mut taken);
            garden.elements.push(element.clone());
            garden.touch();
            Ok((garden.clone(), element))
        })
    }

    pub fn update_element(
        &self,
        garden_id: &str,
        element_id: &str,
        patch: Value,
    ) -> Result<Garden, PlannerError> {
        self.with_garden_mut(garden_id, |garden| {
            let slot = garden
                .elements
                .iter_mut()
                .find(|e| e.id == element_id)
                .ok_or_else(|| PlannerError::ElementNotFound {
                    garden: garden_id.to_string(),
                    element: element_id.to_string(),
                })?;
            *slot = merge_element(slot, patch)?;
            garden.touch();
            Ok(garden.clone())
        })
    }

    pub fn delete_element(
        &self,
        garden_id: &str,
        element_id: &str,
    ) -> Result<Garden, PlannerError> {
        self.with_garden_mut(garden_id, |garden| {
            let index = garden
                .elements
                .iter()
                .position(|e| e.id == element_id)
                .ok_or_else(|| PlannerError::ElementNotFound {
                    garden: garden_id.to_string(),
                    element: element_id.to_string(),
                })?;
            garden.elements.remove(index);
            garden.touch();
            Ok(garden.clone())
        })
    }

    pub fn check_placement(
        &self,
        garden_id: &str,
        element_id: &str,
        pixel: Point,
        cell_size: f64,
    ) -> Result<MoveOutcome, PlannerError> {
        let gardens = read(&self.gardens);
        let garden = gardens
            .get(garden_id)
            .ok_or_else(|| PlannerError::GardenNotFound(garden_id.to_string()))?;
        propose_move(garden, element_id, pixel, cell_size)
    }

    /// Checks and commits under one write lock, so no other move can slip in between.
    pub fn move_element(
        &self,
        garden_id: &str,
        element_id: &str,
        pixel: Point,
        cell_size: f64,
    ) -> Result<Position, PlannerError> {
        self.with_garden_mut(garden_id, |garden| {
            apply_move(garden, element_id, pixel, cell_size)
        })
    }
}
