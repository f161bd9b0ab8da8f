use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed identity of a community; identical across all of its yearly records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub code: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Classification flags drawn once at assembly and fixed thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Geographically isolated and disadvantaged.
    pub remote: bool,
    pub indigenous: bool,
    pub conflict_affected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub total_population: u32,
    pub male: u32,
    pub female: u32,
    pub households: u32,
    pub avg_household_size: f64,
    /// Age cohorts; the three sum to `total_population`.
    pub age_0_14: u32,
    pub age_15_64: u32,
    pub age_65_up: u32,
    pub registered_voters: u32,
    pub pwd_count: u32,
    pub senior_citizens: u32,
}

/// Civil-registry coverage. Gaps never exceed the eligible population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Documentation {
    pub national_id_holders: u32,
    pub national_id_gap: u32,
    pub birth_cert_holders: u32,
    pub birth_cert_gap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utilities {
    pub households_with_electricity: u32,
    /// Source breakdown; sums to at most `households_with_electricity`
    /// (the remainder are informal connections).
    pub grid_connections: u32,
    pub solar_home_systems: u32,
    pub generator_households: u32,
    pub households_with_toilet: u32,
    pub households_with_internet: u32,
    /// 0 = none, 4 = full broadband-grade coverage.
    pub mobile_signal_tier: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facilities {
    pub has_health_station: bool,
    pub has_daycare: bool,
    pub has_multipurpose_hall: bool,
    /// Condition 1 (failing) – 5 (excellent); present only with the facility.
    pub health_station_condition: Option<u8>,
    pub daycare_condition: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    Concrete,
    Gravel,
    Dirt,
    Footpath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roads {
    pub main_access: RoadType,
    /// 1 (impassable in rain) – 5 (all-weather).
    pub condition: u8,
    pub distance_to_town_km: f64,
    pub transport_modes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub elementary_enrollment: u32,
    pub high_school_enrollment: u32,
    pub out_of_school_youth: u32,
    pub literacy_rate: f64,
    /// 1–5 condition of the nearest serving school.
    pub school_condition: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    PipedSystem,
    Borehole,
    DugWell,
    Spring,
    SurfaceWater,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterStatus {
    Functional,
    NeedsRepair,
    NonFunctional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Water {
    pub primary_source: WaterSource,
    pub source_status: WaterStatus,
    pub households_with_safe_water: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivestockCount {
    pub kind: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Livelihood {
    pub main_crops: Vec<String>,
    pub livestock: Vec<LivestockCount>,
    pub farming_households: u32,
    pub average_monthly_income: f64,
    pub unemployment_rate: f64,
    pub dogs_count: u32,
    pub cats_count: u32,
    pub vaccinated_dogs: u32,
    pub vaccinated_cats: u32,
}

/// How often a hazard is felt, as reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardLevel {
    None,
    Rare,
    Occasional,
    Frequent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSecurity {
    Secure,
    Moderate,
    Insecure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazards {
    pub flood: HazardLevel,
    pub typhoon: HazardLevel,
    pub earthquake: HazardLevel,
    pub landslide: HazardLevel,
    pub drought: HazardLevel,
    pub has_evacuation_center: bool,
    pub food_security: FoodSecurity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityRating {
    pub need: String,
    /// 0 = not needed, 3 = urgent.
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priorities {
    pub ratings: Vec<PriorityRating>,
    /// Mean of the ratings, rounded to two decimals.
    pub need_score: f64,
}

/// One year's complete, cross-field-consistent snapshot of a community.
/// Immutable once produced; past years are never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityRecord {
    pub year: i32,
    pub identity: Identity,
    pub classification: Classification,
    pub demographics: Demographics,
    pub documentation: Documentation,
    pub utilities: Utilities,
    pub facilities: Facilities,
    pub roads: Roads,
    pub education: Education,
    pub water: Water,
    pub livelihood: Livelihood,
    pub hazards: Hazards,
    pub priorities: Priorities,
    /// Open key→value map from the externally supplied field catalog,
    /// keyed by stable field identifiers for cross-year joins.
    pub custom_fields: BTreeMap<String, serde_json::Value>,
}
