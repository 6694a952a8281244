use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Vegetable,
    Fruit,
    Herb,
    Flower,
    Tree,
    Bush,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SunRequirement {
    #[default]
    #[serde(rename = "full sun")]
    FullSun,
    #[serde(rename = "partial sun")]
    PartialSun,
    #[serde(rename = "partial shade")]
    PartialShade,
    #[serde(rename = "full shade")]
    FullShade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WateringNeeds {
    Low,
    #[default]
    Moderate,
    High,
}

/// Inclusive bounds; either end may be unknown.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Planting distances, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub in_rows: f64,
    pub between_rows: f64,
}

fn default_depth() -> f64 {
    1.0
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrowingInfo {
    pub hardiness_zones: Option<ValueRange>,
    #[serde(default)]
    pub sun_requirements: SunRequirement,
    #[serde(default)]
    pub soil_requirements: Vec<String>,
    #[serde(rename = "soilPH")]
    pub soil_ph: Option<ValueRange>,
    #[serde(default)]
    pub watering_needs: WateringNeeds,
    pub spacing: Option<Spacing>,
    /// Sowing depth, in centimetres.
    #[serde(default = "default_depth")]
    pub depth: f64,
}

impl Default for GrowingInfo {
    fn default() -> Self {
        Self {
            hardiness_zones: None,
            sun_requirements: SunRequirement::default(),
            soil_requirements: vec![],
            soil_ph: None,
            watering_needs: WateringNeeds::default(),
            spacing: None,
            depth: default_depth(),
        }
    }
}

/// A day of the year without the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }
}

fn default_region() -> String {
    "general".into()
}

/// A yearly window, e.g. a sowing or harvest period. `start` after `end`
/// means the window runs over the new year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Period {
    pub start: MonthDay,
    pub end: MonthDay,
    #[serde(default = "default_region")]
    pub region: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Good,
    Bad,
    #[default]
    Neutral,
}

/// Link to another catalogue plant.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanionPlant {
    /// Id of the related plant.
    pub plant: String,
    #[serde(default)]
    pub relationship: Relationship,
    pub notes: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CareInstructions {
    pub fertilizing: Option<String>,
    pub pruning: Option<String>,
    pub pest_control: Option<String>,
    pub disease_control: Option<String>,
    pub special: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantImage {
    pub url: String,
    pub caption: Option<String>,
}

/// A catalogue entry, referenced from garden elements by `plantDetails.plantId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub plant_type: PlantType,
    pub growing_info: GrowingInfo,
    /// Days from sowing to harvest.
    pub time_to_maturity: u32,
    pub sowing_period: Vec<Period>,
    pub harvest_period: Vec<Period>,
    pub companion_plants: Vec<CompanionPlant>,
    pub care_instructions: CareInstructions,
    pub harvest_instructions: String,
    pub expected_yield: String,
    pub storage: String,
    pub culinary_uses: Vec<String>,
    pub medicinal_uses: Vec<String>,
    pub images: Vec<PlantImage>,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Body of `POST /api/plants`. Only `name` and `plantType` are required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPlant {
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub description: String,
    pub plant_type: PlantType,
    #[serde(default)]
    pub growing_info: GrowingInfo,
    #[serde(default)]
    pub time_to_maturity: u32,
    #[serde(default)]
    pub sowing_period: Vec<Period>,
    #[serde(default)]
    pub harvest_period: Vec<Period>,
    #[serde(default)]
    pub companion_plants: Vec<CompanionPlant>,
    #[serde(default)]
    pub care_instructions: CareInstructions,
    #[serde(default)]
    pub harvest_instructions: String,
    #[serde(default)]
    pub expected_yield: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub culinary_uses: Vec<String>,
    #[serde(default)]
    pub medicinal_uses: Vec<String>,
    #[serde(default)]
    pub images: Vec<PlantImage>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body of `PUT /api/plants/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantUpdate {
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub plant_type: Option<PlantType>,
    pub growing_info: Option<GrowingInfo>,
    pub time_to_maturity: Option<u32>,
    pub sowing_period: Option<Vec<Period>>,
    pub harvest_period: Option<Vec<Period>>,
    pub companion_plants: Option<Vec<CompanionPlant>>,
    pub care_instructions: Option<CareInstructions>,
    pub harvest_instructions: Option<String>,
    pub expected_yield: Option<String>,
    pub storage: Option<String>,
    pub culinary_uses: Option<Vec<String>>,
    pub medicinal_uses: Option<Vec<String>>,
    pub images: Option<Vec<PlantImage>>,
    pub is_public: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Query string of `GET /api/plants`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlantQuery {
    /// 1-based page number (default 1).
    pub page: Option<usize>,
    /// Items per page (default 20).
    pub per_page: Option<usize>,
    /// Case-insensitive fragment of the plant name.
    pub keyword: Option<String>,
    #[param(value_type = Option<String>)]
    pub plant_type: Option<PlantType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanionInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanionsResponse {
    pub id: String,
    pub name: String,
    pub good: Vec<CompanionInfo>,
    pub bad: Vec<CompanionInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeasonResponse {
    pub month: u32,
    pub plants: Vec<Plant>,
}

impl Plant {
    pub fn from_new(id: String, new: NewPlant) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: new.name,
            scientific_name: new.scientific_name,
            description: new.description,
            plant_type: new.plant_type,
            growing_info: new.growing_info,
            time_to_maturity: new.time_to_maturity,
            sowing_period: new.sowing_period,
            harvest_period: new.harvest_period,
            companion_plants: new.companion_plants,
            care_instructions: new.care_instructions,
            harvest_instructions: new.harvest_instructions,
            expected_yield: new.expected_yield,
            storage: new.storage,
            culinary_uses: new.culinary_uses,
            medicinal_uses: new.medicinal_uses,
            images: new.images,
            is_public: new.is_public,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: PlantUpdate) {
        macro_rules! set {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = update.$field {
                    self.$field = value;
                })*
            };
        }
        set!(
            name,
            scientific_name,
            description,
            plant_type,
            growing_info,
            time_to_maturity,
            sowing_period,
            harvest_period,
            companion_plants,
            care_instructions,
            harvest_instructions,
            expected_yield,
            storage,
            culinary_uses,
            medicinal_uses,
            images,
            is_public,
            tags,
        );
        self.updated_at = Utc::now();
    }

    /// Ids of catalogue plants linked with the given relationship.
    pub fn companions(&self, relationship: Relationship) -> impl Iterator<Item = &str> {
        self.companion_plants
            .iter()
            .filter(move |c| c.relationship == relationship)
            .map(|c| c.plant.as_str())
    }
}
