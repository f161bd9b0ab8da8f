use crate::model::{CommunityRecord, HazardLevel, Priorities, PriorityRating, RoadType, WaterStatus};
use crate::rng::Lcg;
use crate::synth::round2;

/// Fixed intervention catalog rated 0–3 in every record. The names double as
/// the join key the transition uses to target next year's investment.
pub const INTERVENTIONS: &[&str] = &[
    "water_system",
    "road_upgrade",
    "health_services",
    "electrification",
    "sanitation",
    "school_repair",
    "livelihood_support",
    "disaster_preparedness",
    "connectivity",
    "civil_registration",
];

const RATINGS: [u8; 4] = [0, 1, 2, 3];
/// Rating weights when the matching infrastructure is deficient vs. adequate.
const URGENT_WEIGHTS: [f64; 4] = [0.02, 0.08, 0.25, 0.65];
const ADEQUATE_WEIGHTS: [f64; 4] = [0.45, 0.35, 0.15, 0.05];

/// Whether this record's own data says the intervention is needed.
fn is_deficient(record: &CommunityRecord, need: &str) -> bool {
    let hh = record.demographics.households.max(1) as f64;
    match need {
        "water_system" => {
            record.water.source_status != WaterStatus::Functional
                || (record.water.households_with_safe_water as f64) < hh * 0.5
        }
        "road_upgrade" => {
            record.roads.condition <= 2
                || matches!(record.roads.main_access, RoadType::Dirt | RoadType::Footpath)
        }
        "health_services" => {
            !record.facilities.has_health_station
                || record.facilities.health_station_condition.is_some_and(|c| c <= 2)
        }
        "electrification" => (record.utilities.households_with_electricity as f64) < hh * 0.5,
        "sanitation" => (record.utilities.households_with_toilet as f64) < hh * 0.5,
        "school_repair" => record.education.school_condition <= 2,
        "livelihood_support" => record.livelihood.unemployment_rate >= 0.15,
        "disaster_preparedness" => {
            !record.hazards.has_evacuation_center
                || [
                    record.hazards.flood,
                    record.hazards.typhoon,
                    record.hazards.earthquake,
                    record.hazards.landslide,
                    record.hazards.drought,
                ]
                .contains(&HazardLevel::Frequent)
        }
        "connectivity" => {
            record.utilities.mobile_signal_tier <= 1
                || (record.utilities.households_with_internet as f64) < hh * 0.2
        }
        "civil_registration" => {
            let eligible =
                (record.demographics.age_15_64 + record.demographics.age_65_up).max(1) as f64;
            record.documentation.national_id_gap as f64 > eligible * 0.5
        }
        _ => false,
    }
}

pub(crate) fn synth_priorities(record: &CommunityRecord, rng: &mut Lcg) -> Priorities {
    let ratings: Vec<PriorityRating> = INTERVENTIONS
        .iter()
        .map(|&need| {
            let weights = if is_deficient(record, need) {
                &URGENT_WEIGHTS
            } else {
                &ADEQUATE_WEIGHTS
            };
            PriorityRating {
                need: need.to_string(),
                rating: *rng.pick_weighted(&RATINGS, weights),
            }
        })
        .collect();

    let need_score = round2(
        ratings.iter().map(|r| r.rating as f64).sum::<f64>() / ratings.len() as f64,
    );

    Priorities { ratings, need_score }
}
