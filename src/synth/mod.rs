mod custom_fields;
mod demographics;
pub mod hazards;
mod infrastructure;
mod livelihood;
mod priorities;

pub use priorities::INTERVENTIONS;

use crate::model::{Classification, CommunityRecord, FieldDef, Identity, Priorities};
use crate::profile::LocationProfile;
use crate::progression::ProgressionState;
use crate::rng::Lcg;

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Produce one year's fully populated record from the hidden state.
///
/// Inputs are never mutated (the rng advances, nothing else); every subgroup
/// count is bounded by its parent total, and the priority section is derived
/// from the same record's infrastructure so ratings and conditions agree.
pub fn synthesize(
    state: &ProgressionState,
    profile: &LocationProfile,
    class: &Classification,
    identity: &Identity,
    catalog: &[FieldDef],
    rng: &mut Lcg,
    year: i32,
) -> CommunityRecord {
    let demographics = demographics::synth_demographics(state, rng);
    let documentation = demographics::synth_documentation(state, &demographics);
    let education = demographics::synth_education(state, &demographics, class, rng);
    let utilities = infrastructure::synth_utilities(state, &demographics, class, rng);
    let facilities = infrastructure::synth_facilities(state, profile, class, rng);
    let roads = infrastructure::synth_roads(state, profile, class, rng);
    let water = infrastructure::synth_water(state, &demographics, rng);
    let livelihood = livelihood::synth_livelihood(state, profile, &demographics, rng);
    let hazards = hazards::synth_hazards(state, profile, class, rng);
    let custom_fields = custom_fields::synth_custom_fields(catalog, year, rng);

    let mut record = CommunityRecord {
        year,
        identity: identity.clone(),
        classification: *class,
        demographics,
        documentation,
        utilities,
        facilities,
        roads,
        education,
        water,
        livelihood,
        hazards,
        priorities: Priorities {
            ratings: Vec::new(),
            need_score: 0.0,
        },
        custom_fields,
    };
    record.priorities = priorities::synth_priorities(&record, rng);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(1.005), 1.0); // 1.005 is 1.00499… in binary
        assert_eq!(round2(2.675_1), 2.68);
        assert_eq!(round2(3.0), 3.0);
    }
}
