use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::element::GardenElement;

fn default_unit() -> String {
    "meters".into()
}

/// Physical size of the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlotDimensions {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub hardiness_zone: Option<String>,
    pub last_frost_date: Option<NaiveDate>,
    pub first_frost_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub id: String,
    pub name: String,
    pub description: String,
    pub dimensions: PlotDimensions,
    pub location: String,
    pub elements: Vec<GardenElement>,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub year: i32,
    pub weather_data: WeatherData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/gardens`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGarden {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub dimensions: PlotDimensions,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub elements: Vec<GardenElement>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub weather_data: WeatherData,
}

/// Body of `PUT /api/gardens/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dimensions: Option<PlotDimensions>,
    pub location: Option<String>,
    pub elements: Option<Vec<GardenElement>>,
    pub is_public: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub year: Option<i32>,
    pub weather_data: Option<WeatherData>,
}

impl Garden {
    pub fn from_new(id: String, new: NewGarden) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: new.name,
            description: new.description,
            dimensions: new.dimensions,
            location: new.location,
            elements: new.elements,
            is_public: new.is_public,
            tags: new.tags,
            year: new.year.unwrap_or_else(|| now.year()),
            weather_data: new.weather_data,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: GardenUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(dimensions) = update.dimensions {
            self.dimensions = dimensions;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(elements) = update.elements {
            self.elements = elements;
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(weather_data) = update.weather_data {
            self.weather_data = weather_data;
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn element(&self, element_id: &str) -> Option<&GardenElement> {
        self.elements.iter().find(|e| e.id == element_id)
    }
}
