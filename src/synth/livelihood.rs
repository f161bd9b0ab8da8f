use crate::model::{Demographics, Livelihood, LivestockCount};
use crate::profile::LocationProfile;
use crate::progression::ProgressionState;
use crate::rng::Lcg;
use crate::synth::round2;

/// Rough head-per-household factor by animal kind; poultry dominates.
fn herd_factor(kind: &str) -> f64 {
    match kind {
        "chicken" | "duck" => 3.0,
        "swine" => 0.8,
        "goat" => 0.5,
        _ => 0.3,
    }
}

pub(crate) fn synth_livelihood(
    state: &ProgressionState,
    profile: &LocationProfile,
    demo: &Demographics,
    rng: &mut Lcg,
) -> Livelihood {
    let hh = demo.households;

    let mut crops: Vec<String> = profile.crops.iter().map(|s| s.to_string()).collect();
    rng.shuffle(&mut crops);
    crops.truncate(rng.next_int(2, crops.len().min(4) as i64) as usize);

    let mut kinds: Vec<&str> = profile.livestock.to_vec();
    rng.shuffle(&mut kinds);
    kinds.truncate(rng.next_int(2, kinds.len().min(4) as i64) as usize);
    let livestock = kinds
        .iter()
        .map(|kind| LivestockCount {
            kind: kind.to_string(),
            count: (hh as f64 * state.farming_rate * herd_factor(kind) * rng.next_float(0.5, 1.2))
                .round() as u32,
        })
        .collect();

    let farming_households = ((hh as f64 * state.farming_rate).round() as u32).min(hh);

    let dogs_count = (hh as f64 * rng.next_float(0.35, 0.8)).round() as u32;
    let cats_count = (hh as f64 * rng.next_float(0.2, 0.6)).round() as u32;
    let vaccinated_dogs =
        ((dogs_count as f64 * rng.next_float(0.25, 0.9)).round() as u32).min(dogs_count);
    let vaccinated_cats =
        ((cats_count as f64 * rng.next_float(0.15, 0.8)).round() as u32).min(cats_count);

    Livelihood {
        main_crops: crops,
        livestock,
        farming_households,
        average_monthly_income: round2(state.income),
        unemployment_rate: (state.unemployment * 10_000.0).round() / 10_000.0,
        dogs_count,
        cats_count,
        vaccinated_dogs,
        vaccinated_cats,
    }
}
