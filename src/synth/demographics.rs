use crate::model::{Classification, Demographics, Documentation, Education};
use crate::progression::ProgressionState;
use crate::rng::Lcg;
use crate::synth::round2;

pub(crate) fn synth_demographics(state: &ProgressionState, rng: &mut Lcg) -> Demographics {
    let total = state.population.round().max(1.0) as u32;
    let male = ((total as f64 * rng.next_float(0.48, 0.53)).round() as u32).min(total);
    let female = total - male;

    let households = state.households.round().max(1.0) as u32;
    let avg_household_size = round2(total as f64 / households as f64);

    // Young cohort first, elderly second, working-age absorbs the remainder
    // so the three always sum to the total.
    let age_0_14 = ((total as f64 * rng.next_float(0.28, 0.36)).round() as u32).min(total);
    let age_65_up =
        ((total as f64 * rng.next_float(0.04, 0.08)).round() as u32).min(total - age_0_14);
    let age_15_64 = total - age_0_14 - age_65_up;

    let adults = age_15_64 + age_65_up;
    let registered_voters = ((adults as f64 * rng.next_float(0.60, 0.85)).round() as u32).min(adults);

    let pwd_count = ((total as f64 * rng.next_float(0.008, 0.03)).round() as u32).min(total);
    let senior_citizens =
        ((age_65_up as f64 * rng.next_float(0.9, 1.0)).round() as u32).min(age_65_up);

    Demographics {
        total_population: total,
        male,
        female,
        households,
        avg_household_size,
        age_0_14,
        age_15_64,
        age_65_up,
        registered_voters,
        pwd_count,
        senior_citizens,
    }
}

/// Registry coverage straight off the state rates; no extra randomness so
/// the documented ratchet shows through year over year.
pub(crate) fn synth_documentation(state: &ProgressionState, demo: &Demographics) -> Documentation {
    let eligible = demo.age_15_64 + demo.age_65_up;
    let national_id_holders =
        ((eligible as f64 * state.rates.national_id).round() as u32).min(eligible);
    let birth_cert_holders = ((demo.total_population as f64 * state.rates.birth_cert).round()
        as u32)
        .min(demo.total_population);

    Documentation {
        national_id_holders,
        national_id_gap: eligible - national_id_holders,
        birth_cert_holders,
        birth_cert_gap: demo.total_population - birth_cert_holders,
    }
}

pub(crate) fn synth_education(
    state: &ProgressionState,
    demo: &Demographics,
    class: &Classification,
    rng: &mut Lcg,
) -> Education {
    let elem_age = (demo.age_0_14 as f64 * 0.55).round() as u32;
    let hs_age = (demo.age_0_14 as f64 * 0.30).round() as u32;

    let participation = if class.remote {
        rng.next_float(0.65, 0.88)
    } else {
        rng.next_float(0.85, 0.98)
    };
    let elementary_enrollment = ((elem_age as f64 * participation).round() as u32).min(elem_age);
    let high_school_enrollment =
        ((hs_age as f64 * participation * rng.next_float(0.8, 1.0)).round() as u32).min(hs_age);

    let youth = (demo.age_15_64 as f64 * 0.25).round() as u32;
    let oosy_rate = if class.remote {
        rng.next_float(0.06, 0.16)
    } else {
        rng.next_float(0.01, 0.08)
    };
    let out_of_school_youth = ((youth as f64 * oosy_rate).round() as u32).min(youth);

    // Literacy tracks civil-registry coverage as a rough proxy for reach of services.
    let literacy_rate = round2(
        (0.62 + 0.35 * state.rates.birth_cert + rng.next_float(-0.03, 0.03)).clamp(0.5, 0.99),
    );

    let school_condition = *rng.pick_weighted(
        &crate::synth::infrastructure::CONDITION_SCALE,
        &crate::synth::infrastructure::condition_weights(state.rates.road_maturity, class.remote),
    );

    Education {
        elementary_enrollment,
        high_school_enrollment,
        out_of_school_youth,
        literacy_rate,
        school_condition,
    }
}
