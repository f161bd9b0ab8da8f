use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::{Classification, CommunityRecord, FieldDef, Identity};
use crate::names::{compose_name, short_code};
use crate::profile::{AreaType, PROFILES};
use crate::progression::{ProgressionState, advance};
use crate::rng::{Lcg, sub_seed};
use crate::synth::synthesize;

/// How many fresh compositions, then suffixed variants, the name generator
/// tries before accepting a duplicate.
pub const MAX_NAME_RETRIES: usize = 8;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Number of communities to generate.
    pub count: usize,
    /// RNG seed; identical config ⇒ identical output.
    pub seed: i64,
    /// First simulated calendar year.
    pub start_year: i32,
    /// Number of consecutive years per community.
    pub years: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            count: 10,
            seed: 42,
            start_year: 2018,
            years: 5,
        }
    }
}

/// One generated community: fixed identity plus its year-indexed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityEntity {
    pub identity: Identity,
    pub area_type: AreaType,
    pub classification: Classification,
    pub records: BTreeMap<i32, CommunityRecord>,
}

impl CommunityEntity {
    /// Sorted list of years with a record.
    pub fn years(&self) -> Vec<i32> {
        self.records.keys().copied().collect()
    }
}

/// Generate `config.count` communities, each with `config.years` consecutive
/// yearly records starting at `config.start_year`.
///
/// Pure in its arguments: the same config and catalog always produce the same
/// entities. Panics on a zero count or zero years (caller precondition).
pub fn generate(config: &GenConfig, catalog: &[FieldDef]) -> Vec<CommunityEntity> {
    assert!(config.count >= 1, "generate: count must be at least 1");
    assert!(config.years >= 1, "generate: years must be at least 1");

    tracing::info!(
        count = config.count,
        seed = config.seed,
        start_year = config.start_year,
        years = config.years,
        "generating synthetic communities"
    );

    let mut shared = Lcg::new(config.seed);
    let mut used_names: HashSet<String> = HashSet::new();
    let mut entities = Vec::with_capacity(config.count);

    for index in 0..config.count {
        let profile = shared.pick(PROFILES);

        // Classification is drawn once and fixed for the entity's lifetime.
        let classification = Classification {
            remote: shared.chance(profile.gida_probability),
            indigenous: shared.chance(profile.indigenous_probability),
            conflict_affected: shared.chance(profile.conflict_probability),
        };

        let name = unique_name(
            profile.area_type,
            classification.indigenous,
            &mut shared,
            &mut used_names,
        );
        let identity = Identity {
            name,
            code: short_code(profile.name, &mut shared),
            location: profile.name.to_string(),
            latitude: profile.center_lat + shared.next_float(-profile.spread, profile.spread),
            longitude: profile.center_lon + shared.next_float(-profile.spread, profile.spread),
        };

        let mut rng = Lcg::new(sub_seed(config.seed, index, 0));
        let mut state = ProgressionState::init(&mut rng, profile, &classification);
        let mut records = BTreeMap::new();

        for offset in 0..config.years {
            if offset > 0 {
                rng = Lcg::new(sub_seed(config.seed, index, offset));
            }
            let year = config.start_year + offset as i32;
            let record = synthesize(
                &state,
                profile,
                &classification,
                &identity,
                catalog,
                &mut rng,
                year,
            );
            state = advance(&state, &record, year, &mut rng);
            records.insert(year, record);
        }

        tracing::debug!(name = %identity.name, code = %identity.code, "community generated");
        entities.push(CommunityEntity {
            identity,
            area_type: profile.area_type,
            classification,
            records,
        });
    }

    entities
}

/// Compose a name not seen in this run. Bounded retries, then suffixed
/// variants, then the duplicate is accepted — a deliberate soft-fail so a
/// large `count` against small pools cannot loop forever.
fn unique_name(
    area_type: AreaType,
    indigenous: bool,
    rng: &mut Lcg,
    used: &mut HashSet<String>,
) -> String {
    let mut candidate = compose_name(area_type, indigenous, rng);
    for _ in 0..MAX_NAME_RETRIES {
        if used.insert(candidate.clone()) {
            return candidate;
        }
        candidate = compose_name(area_type, indigenous, rng);
    }
    for _ in 0..MAX_NAME_RETRIES {
        let suffixed = format!("{candidate} {}", rng.next_int(2, 99));
        if used.insert(suffixed.clone()) {
            return suffixed;
        }
    }
    tracing::warn!(name = %candidate, "name pool exhausted, accepting duplicate");
    candidate
}
