use serde::{Deserialize, Serialize};

/// Broad settlement class of an area; drives ranges and weight tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaType {
    Urban,
    SemiUrban,
    Rural,
    Highland,
}

/// Annual occurrence frequency per hazard, each in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct HazardProfile {
    pub flood: f64,
    pub typhoon: f64,
    pub earthquake: f64,
    pub landslide: f64,
    pub drought: f64,
}

/// Static per-area generation parameters. Never mutated; a read-only input
/// to state initialization and year synthesis.
#[derive(Debug, Clone)]
pub struct LocationProfile {
    pub name: &'static str,
    pub area_type: AreaType,
    /// Geographic center and the jitter radius (degrees) for coordinates.
    pub center_lat: f64,
    pub center_lon: f64,
    pub spread: f64,
    /// Probability the community is classified geographically isolated.
    pub gida_probability: f64,
    pub indigenous_probability: f64,
    pub conflict_probability: f64,
    /// Scales baseline household income.
    pub income_multiplier: f64,
    /// Infrastructure maturity scalar in `[0, 1]`; higher means better-served.
    pub infrastructure: f64,
    pub crops: &'static [&'static str],
    pub livestock: &'static [&'static str],
    pub hazards: HazardProfile,
}

const LOWLAND_CROPS: &[&str] = &["rice", "corn", "banana", "coconut", "cassava", "vegetables"];
const UPLAND_CROPS: &[&str] = &["corn", "coffee", "abaca", "sweet potato", "upland rice", "banana"];
const COASTAL_CROPS: &[&str] = &["coconut", "banana", "vegetables", "rice"];

const COMMON_LIVESTOCK: &[&str] = &["carabao", "swine", "chicken", "goat", "cattle", "duck"];
const UPLAND_LIVESTOCK: &[&str] = &["chicken", "swine", "goat", "horse", "carabao"];

pub const PROFILES: &[LocationProfile] = &[
    LocationProfile {
        name: "Centro Poblacion",
        area_type: AreaType::Urban,
        center_lat: 7.081,
        center_lon: 125.613,
        spread: 0.015,
        gida_probability: 0.02,
        indigenous_probability: 0.05,
        conflict_probability: 0.05,
        income_multiplier: 1.45,
        infrastructure: 0.92,
        crops: LOWLAND_CROPS,
        livestock: COMMON_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.45,
            typhoon: 0.35,
            earthquake: 0.25,
            landslide: 0.05,
            drought: 0.15,
        },
    },
    LocationProfile {
        name: "Bagong Silang",
        area_type: AreaType::Urban,
        center_lat: 14.758,
        center_lon: 121.043,
        spread: 0.02,
        gida_probability: 0.03,
        indigenous_probability: 0.04,
        conflict_probability: 0.03,
        income_multiplier: 1.3,
        infrastructure: 0.85,
        crops: LOWLAND_CROPS,
        livestock: COMMON_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.65,
            typhoon: 0.55,
            earthquake: 0.3,
            landslide: 0.1,
            drought: 0.1,
        },
    },
    LocationProfile {
        name: "Looc",
        area_type: AreaType::SemiUrban,
        center_lat: 10.31,
        center_lon: 123.75,
        spread: 0.03,
        gida_probability: 0.12,
        indigenous_probability: 0.08,
        conflict_probability: 0.06,
        income_multiplier: 1.05,
        infrastructure: 0.68,
        crops: COASTAL_CROPS,
        livestock: COMMON_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.5,
            typhoon: 0.7,
            earthquake: 0.35,
            landslide: 0.08,
            drought: 0.12,
        },
    },
    LocationProfile {
        name: "San Roque",
        area_type: AreaType::SemiUrban,
        center_lat: 13.14,
        center_lon: 123.73,
        spread: 0.025,
        gida_probability: 0.15,
        indigenous_probability: 0.1,
        conflict_probability: 0.08,
        income_multiplier: 1.0,
        infrastructure: 0.62,
        crops: LOWLAND_CROPS,
        livestock: COMMON_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.4,
            typhoon: 0.75,
            earthquake: 0.2,
            landslide: 0.15,
            drought: 0.2,
        },
    },
    LocationProfile {
        name: "Malaya",
        area_type: AreaType::Rural,
        center_lat: 8.48,
        center_lon: 124.64,
        spread: 0.04,
        gida_probability: 0.35,
        indigenous_probability: 0.22,
        conflict_probability: 0.18,
        income_multiplier: 0.8,
        infrastructure: 0.45,
        crops: LOWLAND_CROPS,
        livestock: COMMON_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.35,
            typhoon: 0.3,
            earthquake: 0.3,
            landslide: 0.25,
            drought: 0.3,
        },
    },
    LocationProfile {
        name: "Sitio Dulangan",
        area_type: AreaType::Rural,
        center_lat: 6.33,
        center_lon: 124.42,
        spread: 0.05,
        gida_probability: 0.55,
        indigenous_probability: 0.45,
        conflict_probability: 0.3,
        income_multiplier: 0.65,
        infrastructure: 0.3,
        crops: UPLAND_CROPS,
        livestock: UPLAND_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.2,
            typhoon: 0.25,
            earthquake: 0.4,
            landslide: 0.35,
            drought: 0.45,
        },
    },
    LocationProfile {
        name: "Upper Kalinawan",
        area_type: AreaType::Highland,
        center_lat: 16.93,
        center_lon: 121.1,
        spread: 0.06,
        gida_probability: 0.7,
        indigenous_probability: 0.6,
        conflict_probability: 0.15,
        income_multiplier: 0.55,
        infrastructure: 0.2,
        crops: UPLAND_CROPS,
        livestock: UPLAND_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.1,
            typhoon: 0.4,
            earthquake: 0.45,
            landslide: 0.65,
            drought: 0.25,
        },
    },
    LocationProfile {
        name: "Kandukay",
        area_type: AreaType::Highland,
        center_lat: 17.35,
        center_lon: 121.07,
        spread: 0.055,
        gida_probability: 0.8,
        indigenous_probability: 0.75,
        conflict_probability: 0.2,
        income_multiplier: 0.5,
        infrastructure: 0.15,
        crops: UPLAND_CROPS,
        livestock: UPLAND_LIVESTOCK,
        hazards: HazardProfile {
            flood: 0.08,
            typhoon: 0.45,
            earthquake: 0.5,
            landslide: 0.7,
            drought: 0.3,
        },
    },
];

/// Fallback for areas not present in the table.
pub const DEFAULT_PROFILE: LocationProfile = LocationProfile {
    name: "Unlisted",
    area_type: AreaType::SemiUrban,
    center_lat: 12.0,
    center_lon: 122.5,
    spread: 0.04,
    gida_probability: 0.2,
    indigenous_probability: 0.15,
    conflict_probability: 0.1,
    income_multiplier: 0.9,
    infrastructure: 0.5,
    crops: LOWLAND_CROPS,
    livestock: COMMON_LIVESTOCK,
    hazards: HazardProfile {
        flood: 0.3,
        typhoon: 0.4,
        earthquake: 0.3,
        landslide: 0.2,
        drought: 0.25,
    },
};

/// Look up a profile by area name; unlisted areas get [`DEFAULT_PROFILE`].
pub fn profile_for(name: &str) -> &'static LocationProfile {
    PROFILES
        .iter()
        .find(|p| p.name == name)
        .unwrap_or(&DEFAULT_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities_are_valid() {
        for p in PROFILES.iter().chain(std::iter::once(&DEFAULT_PROFILE)) {
            for (label, v) in [
                ("gida", p.gida_probability),
                ("indigenous", p.indigenous_probability),
                ("conflict", p.conflict_probability),
                ("infrastructure", p.infrastructure),
                ("flood", p.hazards.flood),
                ("typhoon", p.hazards.typhoon),
                ("earthquake", p.hazards.earthquake),
                ("landslide", p.hazards.landslide),
                ("drought", p.hazards.drought),
            ] {
                assert!(
                    (0.0..=1.0).contains(&v),
                    "{}: {label} probability {v} out of range",
                    p.name
                );
            }
        }
    }

    #[test]
    fn palettes_are_nonempty() {
        for p in PROFILES {
            assert!(!p.crops.is_empty(), "{} has no crops", p.name);
            assert!(!p.livestock.is_empty(), "{} has no livestock", p.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(profile_for("Looc").name, "Looc");
        assert_eq!(profile_for("Nowhere Particular").name, "Unlisted");
    }

    #[test]
    fn highland_areas_are_less_served_than_urban() {
        let urban = profile_for("Centro Poblacion");
        let highland = profile_for("Kandukay");
        assert!(highland.infrastructure < urban.infrastructure);
        assert!(highland.gida_probability > urban.gida_probability);
    }
}
