use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use log::info;

use super::{new_id, read, write};
use crate::error::PlannerError;
use crate::logic::companion::companions_of;
use crate::logic::filter::{filter_plants, plants_in_season};
use crate::models::plant::{
    CompanionPlant, CompanionsResponse, GrowingInfo, MonthDay, NewPlant, Period, Plant,
    PlantQuery, PlantType, PlantUpdate, Relationship, Spacing,
};

#[derive(Debug, Default)]
pub struct PlantStore {
    plants: RwLock<HashMap<String, Plant>>,
}

fn validate_name(name: &str) -> Result<(), PlannerError> {
    if name.trim().is_empty() {
        return Err(PlannerError::Validation("Plant name must not be empty.".into()));
    }
    Ok(())
}

fn validate_periods<'a>(periods: impl IntoIterator<Item = &'a Period>) -> Result<(), PlannerError> {
    for period in periods {
        if !(period.start.is_valid() && period.end.is_valid()) {
            return Err(PlannerError::Validation(format!(
                "Invalid period {}/{} - {}/{}: months run 1-12 and days 1-31.",
                period.start.month, period.start.day, period.end.month, period.end.day
            )));
        }
    }
    Ok(())
}

impl PlantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plants(plants: Vec<Plant>) -> Self {
        Self {
            plants: RwLock::new(plants.into_iter().map(|p| (p.id.clone(), p)).collect()),
        }
    }

    /// Store preloaded with [`starter_catalogue`].
    pub fn seeded() -> Self {
        Self::with_plants(starter_catalogue())
    }

    fn snapshot(&self) -> Vec<Plant> {
        read(&self.plants).values().cloned().collect()
    }

    /// Public plants matching the query, sorted by name.
    pub fn list(&self, query: &PlantQuery) -> Vec<Plant> {
        filter_plants(&self.snapshot(), query)
    }

    pub fn get(&self, plant_id: &str) -> Result<Plant, PlannerError> {
        read(&self.plants)
            .get(plant_id)
            .cloned()
            .ok_or_else(|| PlannerError::PlantNotFound(plant_id.to_string()))
    }

    pub fn create(&self, new: NewPlant) -> Result<Plant, PlannerError> {
        validate_name(&new.name)?;
        validate_periods(new.sowing_period.iter().chain(&new.harvest_period))?;
        let plant = Plant::from_new(new_id(), new);
        info!("created plant '{}' ({})", plant.name, plant.id);
        write(&self.plants).insert(plant.id.clone(), plant.clone());
        Ok(plant)
    }

    pub fn update(&self, plant_id: &str, update: PlantUpdate) -> Result<Plant, PlannerError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        validate_periods(
            update
                .sowing_period
                .iter()
                .chain(&update.harvest_period)
                .flatten(),
        )?;
        let mut plants = write(&self.plants);
        let plant = plants
            .get_mut(plant_id)
            .ok_or_else(|| PlannerError::PlantNotFound(plant_id.to_string()))?;
        plant.apply(update);
        Ok(plant.clone())
    }

    pub fn delete(&self, plant_id: &str) -> Result<(), PlannerError> {
        write(&self.plants)
            .remove(plant_id)
            .map(|plant| info!("deleted plant '{}' ({})", plant.name, plant.id))
            .ok_or_else(|| PlannerError::PlantNotFound(plant_id.to_string()))
    }

    pub fn in_season(&self, month: u32) -> Vec<Plant> {
        plants_in_season(&self.snapshot(), month)
    }

    pub fn companions(&self, plant_id: &str) -> Result<CompanionsResponse, PlannerError> {
        let plant = self.get(plant_id)?;
        Ok(companions_of(&plant, &self.snapshot()))
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    scientific_name: &str,
    plant_type: PlantType,
    spacing_cm: (f64, f64),
    time_to_maturity: u32,
    sowing: ((u32, u32), (u32, u32)),
    harvest: ((u32, u32), (u32, u32)),
    companions: &[(&str, Relationship)],
) -> Plant {
    let period = |((sm, sd), (em, ed)): ((u32, u32), (u32, u32))| Period {
        start: MonthDay::new(sm, sd),
        end: MonthDay::new(em, ed),
        region: "general".into(),
    };
    let now = Utc::now();
    Plant {
        id: id.into(),
        name: name.into(),
        scientific_name: scientific_name.into(),
        description: String::new(),
        plant_type,
        growing_info: GrowingInfo {
            spacing: Some(Spacing {
                in_rows: spacing_cm.0,
                between_rows: spacing_cm.1,
            }),
            ..GrowingInfo::default()
        },
        time_to_maturity,
        sowing_period: vec![period(sowing)],
        harvest_period: vec![period(harvest)],
        companion_plants: companions
            .iter()
            .map(|(plant, relationship)| CompanionPlant {
                plant: (*plant).into(),
                relationship: *relationship,
                notes: None,
            })
            .collect(),
        care_instructions: Default::default(),
        harvest_instructions: String::new(),
        expected_yield: String::new(),
        storage: String::new(),
        culinary_uses: vec![],
        medicinal_uses: vec![],
        images: vec![],
        is_public: true,
        tags: vec![],
        created_at: now,
        updated_at: now,
    }
}

/// Common allotment crops the catalogue starts with.
pub fn starter_catalogue() -> Vec<Plant> {
    use PlantType::{Herb, Vegetable};
    use Relationship::{Bad, Good};
    vec![
        seed(
            "tomato", "Tomato", "Solanum lycopersicum", Vegetable, (50.0, 80.0), 80,
            ((3, 1), (4, 30)), ((7, 1), (9, 30)),
            &[("basil", Good), ("carrot", Good), ("fennel", Bad)],
        ),
        seed(
            "basil", "Basil", "Ocimum basilicum", Herb, (25.0, 30.0), 60,
            ((4, 1), (6, 30)), ((6, 1), (9, 30)),
            &[("tomato", Good)],
        ),
        seed(
            "carrot", "Carrot", "Daucus carota", Vegetable, (5.0, 25.0), 75,
            ((3, 1), (7, 31)), ((6, 1), (11, 30)),
            &[("tomato", Good), ("lettuce", Good)],
        ),
        seed(
            "fennel", "Fennel", "Foeniculum vulgare", Herb, (30.0, 45.0), 90,
            ((4, 1), (7, 31)), ((8, 1), (10, 31)),
            &[("tomato", Bad)],
        ),
        seed(
            "lettuce", "Lettuce", "Lactuca sativa", Vegetable, (25.0, 30.0), 50,
            ((3, 1), (8, 31)), ((5, 1), (10, 31)),
            &[("carrot", Good), ("radish", Good)],
        ),
        seed(
            "radish", "Radish", "Raphanus sativus", Vegetable, (3.0, 15.0), 28,
            ((3, 1), (9, 30)), ((4, 1), (10, 31)),
            &[("lettuce", Good)],
        ),
    ]
}
