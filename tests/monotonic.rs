//! Ratchet behavior: maturity rates never decrease across a community's
//! consecutive years, and permanent flags never flip back off.

use community_gen::model::Classification;
use community_gen::profile::profile_for;
use community_gen::progression::{ProgressionState, advance};
use community_gen::synth::synthesize;
use community_gen::{GenConfig, Identity, Lcg, generate};

/// Fold init + synthesize/advance by hand so the hidden rates are visible.
fn state_trajectory(seed: i64, area: &str, remote: bool, years: u32) -> Vec<ProgressionState> {
    let class = Classification {
        remote,
        indigenous: false,
        conflict_affected: false,
    };
    let profile = profile_for(area);
    let identity = Identity {
        name: "Trace".into(),
        code: "TR-000".into(),
        location: area.into(),
        latitude: profile.center_lat,
        longitude: profile.center_lon,
    };

    let mut rng = Lcg::new(seed);
    let mut state = ProgressionState::init(&mut rng, profile, &class);
    let mut trajectory = vec![state.clone()];
    for offset in 0..years {
        let year = 2018 + offset as i32;
        let record = synthesize(&state, profile, &class, &identity, &[], &mut rng, year);
        state = advance(&state, &record, year, &mut rng);
        trajectory.push(state.clone());
    }
    trajectory
}

#[test]
fn access_rates_never_decrease() {
    for seed in 0..20 {
        let traj = state_trajectory(seed, "Malaya", seed % 2 == 0, 12);
        for pair in traj.windows(2) {
            let (a, b) = (&pair[0].rates, &pair[1].rates);
            assert!(b.electricity >= a.electricity, "seed {seed}: electricity fell");
            assert!(b.toilet >= a.toilet, "seed {seed}: toilet fell");
            assert!(b.internet >= a.internet, "seed {seed}: internet fell");
            assert!(b.water_maturity >= a.water_maturity, "seed {seed}: water fell");
            assert!(b.road_maturity >= a.road_maturity, "seed {seed}: road fell");
            assert!(b.national_id >= a.national_id, "seed {seed}: national id fell");
            assert!(b.birth_cert >= a.birth_cert, "seed {seed}: birth cert fell");
        }
    }
}

#[test]
fn income_rises_and_unemployment_stays_bounded() {
    for seed in 0..20 {
        let traj = state_trajectory(seed, "Looc", false, 12);
        for pair in traj.windows(2) {
            assert!(pair[1].income > pair[0].income, "seed {seed}: income fell");
            assert!((0.01..=0.40).contains(&pair[1].unemployment));
        }
    }
}

#[test]
fn signal_tier_steps_at_most_one_per_year() {
    let entities = generate(
        &GenConfig {
            count: 30,
            seed: 5,
            start_year: 2015,
            years: 12,
        },
        &[],
    );
    for e in &entities {
        let years = e.years();
        for pair in years.windows(2) {
            let a = e.records[&pair[0]].utilities.mobile_signal_tier;
            let b = e.records[&pair[1]].utilities.mobile_signal_tier;
            assert!(b >= a, "{}: signal tier fell", e.identity.code);
            assert!(b - a <= 1, "{}: signal tier jumped by more than one", e.identity.code);
        }
    }
}

#[test]
fn top_signal_tier_waits_for_the_rollout_year() {
    let entities = generate(
        &GenConfig {
            count: 50,
            seed: 8,
            start_year: 2015,
            years: 12,
        },
        &[],
    );
    for e in &entities {
        for r in e.records.values() {
            if r.year < 2021 {
                assert!(
                    r.utilities.mobile_signal_tier < 4,
                    "{} reached tier 4 in {}",
                    e.identity.code,
                    r.year
                );
            }
        }
    }
}

#[test]
fn facility_flags_never_revert() {
    let entities = generate(
        &GenConfig {
            count: 30,
            seed: 2,
            start_year: 2016,
            years: 10,
        },
        &[],
    );
    for e in &entities {
        let years = e.years();
        for pair in years.windows(2) {
            let a = &e.records[&pair[0]].facilities;
            let b = &e.records[&pair[1]].facilities;
            assert!(!a.has_health_station || b.has_health_station);
            assert!(!a.has_daycare || b.has_daycare);
            assert!(!a.has_multipurpose_hall || b.has_multipurpose_hall);
        }
    }
}

#[test]
fn population_counts_stay_positive() {
    for seed in 0..10 {
        // Highland growth can be negative; population must still floor at 1.
        let traj = state_trajectory(seed, "Kandukay", true, 30);
        for s in &traj {
            assert!(s.population >= 1.0);
            assert!(s.households >= 1.0);
        }
    }
}
