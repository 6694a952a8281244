use crate::error::PlannerError;
use crate::models::plant::{MonthDay, Period, Plant, PlantQuery};

/// Day of the month used to test whether a month falls inside a period.
pub const MID_MONTH_DAY: u32 = 15;

/// Parses a `1..=12` month from a path segment.
pub fn parse_month(raw: &str) -> Result<u32, PlannerError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| {
            PlannerError::Validation(
                "Invalid month. Please provide a number between 1 and 12.".into(),
            )
        })
}

/// True when `day` lies inside the period, both ends inclusive.
pub fn period_contains(period: &Period, day: MonthDay) -> bool {
    if period.start <= period.end {
        period.start <= day && day <= period.end
    } else {
        day >= period.start || day <= period.end
    }
}

/// A plant is in season when the middle of `month` falls in one of its
/// sowing or harvest periods.
pub fn in_season(plant: &Plant, month: u32) -> bool {
    let day = MonthDay::new(month, MID_MONTH_DAY);
    plant
        .sowing_period
        .iter()
        .chain(&plant.harvest_period)
        .any(|p| period_contains(p, day))
}

/// Public plants that can be sown or harvested in `month`, sorted by name.
pub fn plants_in_season(catalogue: &[Plant], month: u32) -> Vec<Plant> {
    let mut plants: Vec<Plant> = catalogue
        .iter()
        .filter(|p| p.is_public && in_season(p, month))
        .cloned()
        .collect();
    plants.sort_by(|a, b| a.name.cmp(&b.name));
    plants
}

/// Public plants matching the keyword and type filters, sorted by name.
pub fn filter_plants(catalogue: &[Plant], query: &PlantQuery) -> Vec<Plant> {
    let keyword = query
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_lowercase);

    let mut plants: Vec<Plant> = catalogue
        .iter()
        .filter(|p| {
            if !p.is_public {
                return false;
            }
            if let Some(ref keyword) = keyword {
                if !p.name.to_lowercase().contains(keyword) {
                    return false;
                }
            }
            if let Some(plant_type) = query.plant_type {
                if p.plant_type != plant_type {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    plants.sort_by(|a, b| a.name.cmp(&b.name));
    plants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plant::PlantType;
    use crate::store::starter_catalogue;

    fn period(start: (u32, u32), end: (u32, u32)) -> Period {
        Period {
            start: MonthDay::new(start.0, start.1),
            end: MonthDay::new(end.0, end.1),
            region: "general".into(),
        }
    }

    #[test]
    fn test_parse_month_bounds() {
        assert_eq!(parse_month("1").unwrap(), 1);
        assert_eq!(parse_month("12").unwrap(), 12);
        for bad in ["0", "13", "-1", "may", ""] {
            assert!(
                matches!(parse_month(bad), Err(PlannerError::Validation(_))),
                "month '{bad}' must be rejected"
            );
        }
    }

    #[test]
    fn test_period_contains_is_inclusive() {
        let spring = period((3, 15), (5, 15));
        assert!(period_contains(&spring, MonthDay::new(3, 15)));
        assert!(period_contains(&spring, MonthDay::new(5, 15)));
        assert!(!period_contains(&spring, MonthDay::new(5, 16)));
        assert!(!period_contains(&spring, MonthDay::new(2, 15)));
    }

    #[test]
    fn test_period_over_new_year() {
        let winter = period((11, 1), (2, 28));
        assert!(period_contains(&winter, MonthDay::new(12, 15)));
        assert!(period_contains(&winter, MonthDay::new(1, 15)));
        assert!(!period_contains(&winter, MonthDay::new(6, 15)));
    }

    #[test]
    fn test_tomato_in_season_summer_not_winter() {
        let db = starter_catalogue();
        let july = plants_in_season(&db, 7);
        assert!(july.iter().any(|p| p.id == "tomato"), "tomato is harvested in July");
        let december = plants_in_season(&db, 12);
        assert!(
            !december.iter().any(|p| p.id == "tomato"),
            "tomato must not appear in December"
        );
    }

    #[test]
    fn test_season_skips_private_plants() {
        let mut db = starter_catalogue();
        for plant in &mut db {
            plant.is_public = false;
        }
        assert!(plants_in_season(&db, 7).is_empty());
    }

    #[test]
    fn test_filter_by_keyword_is_case_insensitive() {
        let db = starter_catalogue();
        let query = PlantQuery {
            keyword: Some("TOM".into()),
            ..Default::default()
        };
        let result = filter_plants(&db, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "tomato");
    }

    #[test]
    fn test_filter_by_type_sorted_by_name() {
        let db = starter_catalogue();
        let query = PlantQuery {
            plant_type: Some(PlantType::Herb),
            ..Default::default()
        };
        let result = filter_plants(&db, &query);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.plant_type == PlantType::Herb));
        assert!(result.windows(2).all(|w| w[0].name <= w[1].name));
    }
}
