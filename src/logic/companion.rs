use crate::models::plant::{CompanionInfo, CompanionsResponse, Plant, Relationship};

pub const GOOD_COMPANION_SCORE: i32 = 2;
pub const BAD_COMPANION_SCORE: i32 = -3;

/// Companion score of a plant against its neighbours.
/// +2 per good companion, -3 per bad companion.
pub fn companion_score(plant: &Plant, neighbor_ids: &[&str]) -> i32 {
    let mut score = 0;
    for neighbor_id in neighbor_ids {
        if plant.companions(Relationship::Good).any(|c| c == *neighbor_id) {
            score += GOOD_COMPANION_SCORE;
        }
        if plant.companions(Relationship::Bad).any(|c| c == *neighbor_id) {
            score += BAD_COMPANION_SCORE;
        }
    }
    score
}

/// True unless either plant lists the other as a bad companion.
pub fn is_compatible(a: &Plant, b: &Plant) -> bool {
    !a.companions(Relationship::Bad).any(|c| c == b.id)
        && !b.companions(Relationship::Bad).any(|c| c == a.id)
}

/// Resolves a plant's good and bad companions against the catalogue.
/// Links to plants missing from the catalogue are dropped.
pub fn companions_of(plant: &Plant, catalogue: &[Plant]) -> CompanionsResponse {
    let resolve = |relationship| -> Vec<CompanionInfo> {
        plant
            .companions(relationship)
            .filter_map(|cid| {
                catalogue.iter().find(|p| p.id == cid).map(|p| CompanionInfo {
                    id: p.id.clone(),
                    name: p.name.clone(),
                })
            })
            .collect()
    };
    CompanionsResponse {
        id: plant.id.clone(),
        name: plant.name.clone(),
        good: resolve(Relationship::Good),
        bad: resolve(Relationship::Bad),
    }
}
