use crate::model::{
    Classification, Demographics, Facilities, RoadType, Roads, Utilities, Water, WaterSource,
    WaterStatus,
};
use crate::profile::{AreaType, LocationProfile};
use crate::progression::ProgressionState;
use crate::rng::Lcg;
use crate::synth::round2;

pub(crate) const CONDITION_SCALE: [u8; 5] = [1, 2, 3, 4, 5];

const CONDITION_BAD: [f64; 5] = [0.35, 0.30, 0.20, 0.10, 0.05];
const CONDITION_GOOD: [f64; 5] = [0.02, 0.08, 0.20, 0.35, 0.35];

/// Condition weights interpolated by a quality scalar in `[0, 1]`;
/// remoteness drags the whole distribution toward the bad end.
pub(crate) fn condition_weights(quality: f64, remote: bool) -> [f64; 5] {
    let q = if remote { quality * 0.6 } else { quality }.clamp(0.0, 1.0);
    let mut weights = [0.0; 5];
    for i in 0..5 {
        weights[i] = CONDITION_BAD[i] * (1.0 - q) + CONDITION_GOOD[i] * q;
    }
    weights
}

pub(crate) fn synth_utilities(
    state: &ProgressionState,
    demo: &Demographics,
    class: &Classification,
    rng: &mut Lcg,
) -> Utilities {
    let hh = demo.households;
    let electrified =
        ((hh as f64 * state.rates.electricity).round() as u32).min(hh);

    // Source split is carved out of the electrified pool, so the parts can
    // never exceed it; the remainder reads as informal connections.
    let grid_share = if class.remote {
        rng.next_float(0.15, 0.5)
    } else {
        rng.next_float(0.6, 0.92)
    };
    let grid_connections = ((electrified as f64 * grid_share).round() as u32).min(electrified);
    let off_grid = electrified - grid_connections;
    let solar_home_systems =
        ((off_grid as f64 * rng.next_float(0.4, 0.85)).round() as u32).min(off_grid);
    let generator_households = ((off_grid - solar_home_systems) as f64
        * rng.next_float(0.2, 0.7))
    .round() as u32;

    Utilities {
        households_with_electricity: electrified,
        grid_connections,
        solar_home_systems,
        generator_households,
        households_with_toilet: ((hh as f64 * state.rates.toilet).round() as u32).min(hh),
        households_with_internet: ((hh as f64 * state.rates.internet).round() as u32).min(hh),
        mobile_signal_tier: state.signal_tier,
    }
}

pub(crate) fn synth_facilities(
    state: &ProgressionState,
    profile: &LocationProfile,
    class: &Classification,
    rng: &mut Lcg,
) -> Facilities {
    let weights = condition_weights(profile.infrastructure, class.remote);
    let mut condition = |present: bool| {
        present.then(|| *rng.pick_weighted(&CONDITION_SCALE, &weights))
    };

    Facilities {
        has_health_station: state.has_health_station,
        has_daycare: state.has_daycare,
        has_multipurpose_hall: state.has_multipurpose_hall,
        health_station_condition: condition(state.has_health_station),
        daycare_condition: condition(state.has_daycare),
    }
}

const ROAD_TYPES: [RoadType; 4] = [
    RoadType::Concrete,
    RoadType::Gravel,
    RoadType::Dirt,
    RoadType::Footpath,
];

fn road_type_weights(maturity: f64, remote: bool) -> [f64; 4] {
    [
        maturity * maturity * 2.0,
        0.3 + (1.0 - maturity) * 0.4,
        (1.0 - maturity) * 0.8,
        if remote { 0.5 } else { 0.05 },
    ]
}

fn transport_pool(main_access: RoadType) -> &'static [&'static str] {
    match main_access {
        RoadType::Concrete => &["jeepney", "tricycle", "bus", "motorcycle", "private vehicle"],
        RoadType::Gravel => &["tricycle", "motorcycle", "jeepney", "habal-habal"],
        RoadType::Dirt => &["motorcycle", "habal-habal", "carabao cart", "on foot"],
        RoadType::Footpath => &["on foot", "habal-habal", "horse"],
    }
}

pub(crate) fn synth_roads(
    state: &ProgressionState,
    profile: &LocationProfile,
    class: &Classification,
    rng: &mut Lcg,
) -> Roads {
    let maturity = state.rates.road_maturity;
    let main_access = *rng.pick_weighted(&ROAD_TYPES, &road_type_weights(maturity, class.remote));
    let condition = *rng.pick_weighted(&CONDITION_SCALE, &condition_weights(maturity, class.remote));

    let base_distance = match profile.area_type {
        AreaType::Urban => rng.next_float(0.3, 4.0),
        AreaType::SemiUrban => rng.next_float(1.0, 10.0),
        AreaType::Rural => rng.next_float(3.0, 20.0),
        AreaType::Highland => rng.next_float(5.0, 35.0),
    };
    let distance_to_town_km = round2(if class.remote { base_distance * 1.5 } else { base_distance });

    let pool = transport_pool(main_access);
    let mut modes: Vec<String> = pool.iter().map(|s| s.to_string()).collect();
    rng.shuffle(&mut modes);
    modes.truncate(rng.next_int(2, 3) as usize);

    Roads {
        main_access,
        condition,
        distance_to_town_km,
        transport_modes: modes,
    }
}

const WATER_SOURCES: [WaterSource; 5] = [
    WaterSource::PipedSystem,
    WaterSource::Borehole,
    WaterSource::DugWell,
    WaterSource::Spring,
    WaterSource::SurfaceWater,
];

const WATER_STATUSES: [WaterStatus; 3] = [
    WaterStatus::Functional,
    WaterStatus::NeedsRepair,
    WaterStatus::NonFunctional,
];

pub(crate) fn synth_water(
    state: &ProgressionState,
    demo: &Demographics,
    rng: &mut Lcg,
) -> Water {
    let m = state.rates.water_maturity;
    let source_weights = [
        m * m * 2.5,
        m,
        0.3 + (1.0 - m) * 0.4,
        0.2 + (1.0 - m) * 0.5,
        (1.0 - m) * 0.6,
    ];
    let primary_source = *rng.pick_weighted(&WATER_SOURCES, &source_weights);

    let status_weights = [0.25 + 0.65 * m, 0.45 - 0.25 * m, (0.30 - 0.40 * m).max(0.0)];
    let source_status = *rng.pick_weighted(&WATER_STATUSES, &status_weights);

    let safe_share = match source_status {
        WaterStatus::Functional => m * rng.next_float(0.85, 1.0),
        WaterStatus::NeedsRepair => m * rng.next_float(0.5, 0.85),
        WaterStatus::NonFunctional => m * rng.next_float(0.15, 0.5),
    };
    let households_with_safe_water =
        ((demo.households as f64 * safe_share).round() as u32).min(demo.households);

    Water {
        primary_source,
        source_status,
        households_with_safe_water,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile_for;

    fn setup(seed: i64, remote: bool) -> (ProgressionState, Demographics, Classification, Lcg) {
        let class = Classification {
            remote,
            indigenous: false,
            conflict_affected: false,
        };
        let mut rng = Lcg::new(seed);
        let state = ProgressionState::init(&mut rng, profile_for("Malaya"), &class);
        let demo = crate::synth::demographics::synth_demographics(&state, &mut rng);
        (state, demo, class, rng)
    }

    #[test]
    fn electricity_sources_bounded_by_electrified() {
        for seed in 0..100 {
            let (state, demo, class, mut rng) = setup(seed, seed % 2 == 0);
            let util = synth_utilities(&state, &demo, &class, &mut rng);
            assert!(
                util.grid_connections + util.solar_home_systems + util.generator_households
                    <= util.households_with_electricity,
                "seed {seed}: source breakdown exceeds electrified households"
            );
            assert!(util.households_with_electricity <= demo.households);
            assert!(util.households_with_toilet <= demo.households);
            assert!(util.households_with_internet <= demo.households);
        }
    }

    #[test]
    fn facility_condition_present_iff_facility_exists() {
        for seed in 0..50 {
            let (state, _, class, mut rng) = setup(seed, false);
            let fac = synth_facilities(&state, profile_for("Malaya"), &class, &mut rng);
            assert_eq!(fac.has_health_station, fac.health_station_condition.is_some());
            assert_eq!(fac.has_daycare, fac.daycare_condition.is_some());
            if let Some(c) = fac.health_station_condition {
                assert!((1..=5).contains(&c));
            }
        }
    }

    #[test]
    fn condition_weights_skew_worse_when_remote() {
        let open = condition_weights(0.8, false);
        let remote = condition_weights(0.8, true);
        // Mass on the failing end grows, mass on the excellent end shrinks.
        assert!(remote[0] > open[0]);
        assert!(remote[4] < open[4]);
    }

    #[test]
    fn roads_have_valid_condition_and_modes() {
        for seed in 0..50 {
            let (state, _, class, mut rng) = setup(seed, true);
            let roads = synth_roads(&state, profile_for("Malaya"), &class, &mut rng);
            assert!((1..=5).contains(&roads.condition));
            assert!((2..=3).contains(&roads.transport_modes.len()));
            assert!(roads.distance_to_town_km > 0.0);
        }
    }

    #[test]
    fn safe_water_bounded_by_households() {
        for seed in 0..50 {
            let (state, demo, _, mut rng) = setup(seed, false);
            let water = synth_water(&state, &demo, &mut rng);
            assert!(water.households_with_safe_water <= demo.households);
        }
    }
}
