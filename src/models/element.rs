use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{Dimensions, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    Plant,
    RaisedBed,
    FlatBed,
    Path,
    Tree,
    Bush,
    Structure,
    /// Sentinel covering the whole plot; never takes part in collisions.
    Background,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PlantStatus {
    #[default]
    Planned,
    Planted,
    Germinated,
    Growing,
    Harvested,
    Removed,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantDetails {
    pub plant_id: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub germination_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: PlantStatus,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructureDetails {
    pub material: Option<String>,
    /// Height above ground, in centimetres.
    pub height: Option<f64>,
    /// Soil depth, in centimetres.
    pub depth: Option<f64>,
    pub soil_type: Option<String>,
    pub notes: Option<String>,
}

/// A placeable object in a garden, in its canonical shape.
///
/// Incoming JSON may carry geometry either nested (`position`, `dimensions`)
/// or flattened (`x`, `y`, `width`, `height`). Both are folded into the nested
/// form at deserialization time, so everything downstream reads a single shape.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "RawElement")]
pub struct GardenElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub name: String,
    pub description: String,
    pub position: Position,
    pub dimensions: Dimensions,
    pub color: Option<String>,
    pub plant_details: Option<PlantDetails>,
    pub structure_details: Option<StructureDetails>,
}

impl GardenElement {
    pub fn new(id: impl Into<String>, kind: ElementType, position: Position, dimensions: Dimensions) -> Self {
        Self {
            id: id.into(),
            kind,
            name: String::new(),
            description: String::new(),
            position,
            dimensions,
            color: None,
            plant_details: None,
            structure_details: None,
        }
    }

    pub fn is_background(&self) -> bool {
        self.kind == ElementType::Background
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawPoint {
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDimensions {
    width: Option<f64>,
    height: Option<f64>,
    rotation: Option<f64>,
}

/// Wire shape accepted on input: every geometric field is optional and both
/// layouts may be present at once.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawElement {
    #[serde(alias = "_id")]
    id: Option<String>,
    #[serde(rename = "type")]
    kind: ElementType,
    name: Option<String>,
    description: Option<String>,
    position: Option<RawPoint>,
    x: Option<f64>,
    y: Option<f64>,
    dimensions: Option<RawDimensions>,
    width: Option<f64>,
    height: Option<f64>,
    rotation: Option<f64>,
    color: Option<String>,
    plant_details: Option<PlantDetails>,
    structure_details: Option<StructureDetails>,
}

impl RawElement {
    fn position(&self) -> Position {
        let nested = self.position.as_ref().and_then(|p| p.x.zip(p.y));
        match nested.or(self.x.zip(self.y)) {
            Some((x, y)) => Position::new(x, y),
            None => Position::default(),
        }
    }

    fn dimensions(&self) -> Dimensions {
        let nested = self.dimensions.as_ref().and_then(|d| {
            d.width
                .zip(d.height)
                .map(|(w, h)| (w, h, d.rotation))
        });
        let flat = self.width.zip(self.height).map(|(w, h)| (w, h, self.rotation));
        match nested.or(flat) {
            Some((width, height, rotation)) => Dimensions {
                width,
                height,
                rotation: rotation.unwrap_or_default(),
            },
            None => Dimensions::default(),
        }
    }
}

impl From<RawElement> for GardenElement {
    fn from(raw: RawElement) -> Self {
        let position = raw.position();
        let dimensions = raw.dimensions();
        Self {
            id: raw.id.unwrap_or_default(),
            kind: raw.kind,
            name: raw.name.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            position,
            dimensions,
            color: raw.color,
            plant_details: raw.plant_details,
            structure_details: raw.structure_details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GardenElement {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_nested_geometry_is_read() {
        let el = parse(json!({
            "id": "bed-1",
            "type": "raisedBed",
            "position": { "x": 3, "y": 4 },
            "dimensions": { "width": 3, "height": 2, "rotation": 90 }
        }));
        assert_eq!(el.kind, ElementType::RaisedBed);
        assert_eq!(el.position, Position::new(3.0, 4.0));
        assert_eq!(el.dimensions.width, 3.0);
        assert_eq!(el.dimensions.height, 2.0);
        assert_eq!(el.dimensions.rotation, 90.0);
    }

    #[test]
    fn test_flat_geometry_is_normalized() {
        let el = parse(json!({ "id": "p", "type": "plant", "x": 3, "y": 4, "width": 1, "height": 2 }));
        assert_eq!(el.position, Position::new(3.0, 4.0));
        assert_eq!(el.dimensions, Dimensions::new(1.0, 2.0));
    }

    #[test]
    fn test_missing_geometry_defaults_to_origin_and_one_cell() {
        let el = parse(json!({ "id": "bare" }));
        assert_eq!(el.position, Position::default());
        assert_eq!(el.dimensions, Dimensions::new(1.0, 1.0));
        assert_eq!(el.kind, ElementType::Other);
    }

    #[test]
    fn test_partial_nested_position_falls_back_to_flat_fields() {
        let el = parse(json!({ "id": "e", "position": { "x": 9 }, "x": 1, "y": 2 }));
        assert_eq!(el.position, Position::new(1.0, 2.0));
    }

    #[test]
    fn test_unknown_type_tag_becomes_other() {
        let el = parse(json!({ "id": "f", "type": "fence" }));
        assert_eq!(el.kind, ElementType::Other);
    }

    #[test]
    fn test_mongo_style_id_alias() {
        let el = parse(json!({ "_id": "abc", "type": "tree" }));
        assert_eq!(el.id, "abc");
        assert_eq!(el.kind, ElementType::Tree);
    }

    #[test]
    fn test_serializes_in_canonical_nested_form() {
        let el = parse(json!({ "id": "p", "type": "path", "x": 1, "y": 1, "width": 1, "height": 3 }));
        let out = serde_json::to_value(&el).unwrap();
        assert_eq!(out["type"], "path");
        assert_eq!(out["position"]["x"], 1.0);
        assert_eq!(out["dimensions"]["height"], 3.0);
        assert!(out.get("width").is_none());
        assert!(out.get("color").is_none());
    }

    #[test]
    fn test_plant_details_default_status() {
        let el = parse(json!({
            "id": "t",
            "type": "plant",
            "plantDetails": { "plantingDate": "2024-04-12" }
        }));
        let details = el.plant_details.unwrap();
        assert_eq!(details.status, PlantStatus::Planned);
        assert_eq!(details.planting_date, NaiveDate::from_ymd_opt(2024, 4, 12));
    }
}
