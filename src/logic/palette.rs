use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{
    element::{ElementType, GardenElement},
    Dimensions, Position,
};

pub const DEFAULT_PLANT_COLOR: &str = "#4CAF50";
pub const FALLBACK_COLOR: &str = "#BDBDBD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PaletteCategory {
    Structures,
    Plants,
    Trees,
    Decorative,
}

/// A draggable entry of the element palette.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElementTemplate {
    #[schema(value_type = String)]
    pub id: &'static str,
    #[schema(value_type = String)]
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub category: PaletteCategory,
    pub dimensions: Dimensions,
}

const fn template(
    category: PaletteCategory,
    id: &'static str,
    name: &'static str,
    kind: ElementType,
    width: f64,
    height: f64,
) -> ElementTemplate {
    ElementTemplate {
        id,
        name,
        kind,
        category,
        dimensions: Dimensions {
            width,
            height,
            rotation: 0.0,
        },
    }
}

const fn structure(
    id: &'static str,
    name: &'static str,
    kind: ElementType,
    w: f64,
    h: f64,
) -> ElementTemplate {
    template(PaletteCategory::Structures, id, name, kind, w, h)
}

const fn plant(id: &'static str, name: &'static str) -> ElementTemplate {
    template(PaletteCategory::Plants, id, name, ElementType::Plant, 1.0, 1.0)
}

const fn tree(
    id: &'static str,
    name: &'static str,
    kind: ElementType,
    w: f64,
    h: f64,
) -> ElementTemplate {
    template(PaletteCategory::Trees, id, name, kind, w, h)
}

const fn decorative(id: &'static str, name: &'static str, w: f64, h: f64) -> ElementTemplate {
    template(PaletteCategory::Decorative, id, name, ElementType::Structure, w, h)
}

static TEMPLATES: [ElementTemplate; 13] = [
    structure("raisedBed", "Raised Bed", ElementType::RaisedBed, 3.0, 2.0),
    structure("flatBed", "Flat Bed", ElementType::FlatBed, 4.0, 2.0),
    structure("path", "Path", ElementType::Path, 1.0, 3.0),
    structure("fence", "Fence", ElementType::Structure, 5.0, 1.0),
    structure("shed", "Shed", ElementType::Structure, 2.0, 2.0),
    plant("tomato", "Tomato"),
    plant("carrot", "Carrot"),
    plant("lettuce", "Lettuce"),
    tree("appleTree", "Apple Tree", ElementType::Tree, 3.0, 3.0),
    tree("cherryTree", "Cherry Tree", ElementType::Tree, 3.0, 3.0),
    tree("bush", "Bush", ElementType::Bush, 2.0, 2.0),
    decorative("bench", "Bench", 2.0, 1.0),
    decorative("pond", "Pond", 3.0, 2.0),
];

pub fn all_templates() -> &'static [ElementTemplate] {
    &TEMPLATES
}

pub fn template_by_id(id: &str) -> Option<&'static ElementTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn templates_in(category: PaletteCategory) -> impl Iterator<Item = &'static ElementTemplate> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

/// Creates a fresh element from a palette entry, with its own id.
pub fn instantiate(template: &ElementTemplate, position: Position) -> GardenElement {
    let mut element = GardenElement::new(
        format!("{}-{}", template.id, Uuid::new_v4()),
        template.kind,
        position,
        template.dimensions,
    );
    element.name = template.name.to_string();
    element
}

/// Fill colour used to draw an element.
pub fn element_color(element: Option<&GardenElement>) -> &str {
    let Some(element) = element else {
        return FALLBACK_COLOR;
    };
    match element.kind {
        ElementType::RaisedBed => "#8D6E63",
        ElementType::FlatBed => "#A5D6A7",
        ElementType::Path => "#E0E0E0",
        ElementType::Plant => element.color.as_deref().unwrap_or(DEFAULT_PLANT_COLOR),
        ElementType::Tree => "#43A047",
        ElementType::Bush => "#66BB6A",
        ElementType::Structure => "#90A4AE",
        ElementType::Background | ElementType::Other => FALLBACK_COLOR,
    }
}
