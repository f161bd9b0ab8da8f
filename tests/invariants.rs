//! Cross-field consistency checks over a full generation run: every subgroup
//! count stays inside its parent total in every record of every year.

use community_gen::{GenConfig, generate};

fn run() -> Vec<community_gen::CommunityEntity> {
    generate(
        &GenConfig {
            count: 40,
            seed: 20_240_817,
            start_year: 2016,
            years: 10,
        },
        &[],
    )
}

#[test]
fn sexes_partition_the_population() {
    for e in run() {
        for r in e.records.values() {
            assert_eq!(
                r.demographics.male + r.demographics.female,
                r.demographics.total_population,
                "{} {}: male+female != total",
                e.identity.code,
                r.year
            );
        }
    }
}

#[test]
fn age_cohorts_partition_the_population() {
    for e in run() {
        for r in e.records.values() {
            let d = &r.demographics;
            assert_eq!(d.age_0_14 + d.age_15_64 + d.age_65_up, d.total_population);
        }
    }
}

#[test]
fn vaccinated_pets_within_totals() {
    for e in run() {
        for r in e.records.values() {
            assert!(r.livelihood.vaccinated_cats <= r.livelihood.cats_count);
            assert!(r.livelihood.vaccinated_dogs <= r.livelihood.dogs_count);
        }
    }
}

#[test]
fn electricity_sources_within_electrified_households() {
    for e in run() {
        for r in e.records.values() {
            let u = &r.utilities;
            assert!(
                u.grid_connections + u.solar_home_systems + u.generator_households
                    <= u.households_with_electricity,
                "{} {}: source split exceeds electrified households",
                e.identity.code,
                r.year
            );
        }
    }
}

#[test]
fn household_counts_within_households() {
    for e in run() {
        for r in e.records.values() {
            let hh = r.demographics.households;
            assert!(r.utilities.households_with_electricity <= hh);
            assert!(r.utilities.households_with_toilet <= hh);
            assert!(r.utilities.households_with_internet <= hh);
            assert!(r.water.households_with_safe_water <= hh);
            assert!(r.livelihood.farming_households <= hh);
        }
    }
}

#[test]
fn documentation_gaps_within_eligible_population() {
    for e in run() {
        for r in e.records.values() {
            let eligible = r.demographics.age_15_64 + r.demographics.age_65_up;
            assert!(r.documentation.national_id_gap <= eligible);
            assert!(r.documentation.national_id_holders <= eligible);
            assert!(r.documentation.birth_cert_gap <= r.demographics.total_population);
        }
    }
}

#[test]
fn need_score_is_mean_of_ratings_to_two_decimals() {
    for e in run() {
        for r in e.records.values() {
            let p = &r.priorities;
            assert!(!p.ratings.is_empty());
            let mean =
                p.ratings.iter().map(|x| x.rating as f64).sum::<f64>() / p.ratings.len() as f64;
            let rounded = (mean * 100.0).round() / 100.0;
            assert!(
                (p.need_score - rounded).abs() < 1e-9,
                "{} {}: need_score {} vs mean {}",
                e.identity.code,
                r.year,
                p.need_score,
                rounded
            );
            assert!((0.0..=3.0).contains(&p.need_score));
        }
    }
}

#[test]
fn categorical_fields_stay_in_range() {
    for e in run() {
        for r in e.records.values() {
            assert!((1..=5).contains(&r.roads.condition));
            assert!((1..=5).contains(&r.education.school_condition));
            assert!(r.utilities.mobile_signal_tier <= 4);
            for rating in &r.priorities.ratings {
                assert!(rating.rating <= 3);
            }
        }
    }
}
