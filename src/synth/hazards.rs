use crate::model::{Classification, FoodSecurity, HazardLevel, Hazards};
use crate::profile::LocationProfile;
use crate::progression::ProgressionState;
use crate::rng::Lcg;

pub const HAZARD_LEVELS: [HazardLevel; 4] = [
    HazardLevel::None,
    HazardLevel::Rare,
    HazardLevel::Occasional,
    HazardLevel::Frequent,
];

/// Band thresholds on the profile's annual hazard frequency.
pub const LOW_FREQ_THRESHOLD: f64 = 0.2;
pub const HIGH_FREQ_THRESHOLD: f64 = 0.6;

/// Weight tables per band over [None, Rare, Occasional, Frequent].
/// The low band never reports Frequent; the high band never reports None.
pub const LOW_FREQ_WEIGHTS: [f64; 4] = [0.45, 0.40, 0.15, 0.0];
pub const MID_FREQ_WEIGHTS: [f64; 4] = [0.15, 0.40, 0.33, 0.12];
pub const HIGH_FREQ_WEIGHTS: [f64; 4] = [0.0, 0.10, 0.45, 0.45];

pub fn weights_for(frequency: f64) -> &'static [f64; 4] {
    if frequency < LOW_FREQ_THRESHOLD {
        &LOW_FREQ_WEIGHTS
    } else if frequency >= HIGH_FREQ_THRESHOLD {
        &HIGH_FREQ_WEIGHTS
    } else {
        &MID_FREQ_WEIGHTS
    }
}

/// Draw a reported hazard level for one hazard's annual frequency.
pub fn draw_level(frequency: f64, rng: &mut Lcg) -> HazardLevel {
    *rng.pick_weighted(&HAZARD_LEVELS, weights_for(frequency))
}

const FOOD_LEVELS: [FoodSecurity; 3] = [
    FoodSecurity::Secure,
    FoodSecurity::Moderate,
    FoodSecurity::Insecure,
];

pub(crate) fn synth_hazards(
    state: &ProgressionState,
    profile: &LocationProfile,
    class: &Classification,
    rng: &mut Lcg,
) -> Hazards {
    let h = &profile.hazards;
    let drought = draw_level(h.drought, rng);

    // Food stress follows joblessness and drought; subsistence farming and
    // town access cushion it.
    let mut insecure = state.unemployment * 2.0;
    if drought == HazardLevel::Frequent {
        insecure += 0.3;
    }
    if class.remote {
        insecure += 0.15;
    }
    if class.conflict_affected {
        insecure += 0.1;
    }
    let secure = (0.6 - insecure + state.farming_rate * 0.3).max(0.05);
    let food_weights = [secure, 0.35, insecure.max(0.02)];
    let food_security = *rng.pick_weighted(&FOOD_LEVELS, &food_weights);

    Hazards {
        flood: draw_level(h.flood, rng),
        typhoon: draw_level(h.typhoon, rng),
        earthquake: draw_level(h.earthquake, rng),
        landslide: draw_level(h.landslide, rng),
        drought,
        has_evacuation_center: state.has_multipurpose_hall
            || rng.chance(0.15 + 0.3 * profile.infrastructure),
        food_security,
    }
}
