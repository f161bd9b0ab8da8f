use serde::{Deserialize, Serialize};

use crate::model::{Classification, CommunityRecord};
use crate::profile::{AreaType, LocationProfile};
use crate::rng::Lcg;

// Calendar anchors for policy multipliers.
/// Rural electrification push starts here.
pub const ELECTRIFICATION_PUSH_YEAR: i32 = 2022;
/// Pandemic onset: internet adoption jumps, one-time unemployment shock.
pub const PANDEMIC_YEAR: i32 = 2020;
/// National-ID registration rollout window.
pub const ID_ROLLOUT_START: i32 = 2020;
pub const ID_ROLLOUT_END: i32 = 2023;
/// The top mobile-signal tier is not reachable before this year.
pub const TOP_SIGNAL_TIER_YEAR: i32 = 2021;

// Hard caps on the ratchet rates.
pub const ELECTRICITY_CAP: f64 = 0.99;
pub const TOILET_CAP: f64 = 0.98;
pub const INTERNET_CAP: f64 = 0.95;
pub const WATER_CAP: f64 = 0.95;
pub const ROAD_CAP: f64 = 0.92;
pub const NATIONAL_ID_CAP: f64 = 0.97;
pub const BIRTH_CERT_CAP: f64 = 0.99;

/// Baseline toilet-access band for remote communities; deliberately disjoint
/// from the served band so classification is visible in year-0 data.
pub const TOILET_REMOTE_RANGE: (f64, f64) = (0.15, 0.45);
pub const TOILET_SERVED_RANGE: (f64, f64) = (0.55, 0.95);

pub const UNEMPLOYMENT_FLOOR: f64 = 0.01;
pub const UNEMPLOYMENT_CEIL: f64 = 0.40;

/// The monotonically non-decreasing access rates, grouped so the ratchet
/// invariant is enforced mechanically rather than by convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatchetRates {
    pub electricity: f64,
    pub toilet: f64,
    pub internet: f64,
    pub water_maturity: f64,
    pub road_maturity: f64,
    pub national_id: f64,
    pub birth_cert: f64,
}

/// Clamp-and-ratchet: apply a non-negative increment, never exceed the cap,
/// never go below the current value.
fn raised(current: f64, increment: f64, cap: f64) -> f64 {
    (current + increment.max(0.0)).min(cap).max(current)
}

/// Hidden per-community ground truth, initialized once and advanced by a
/// pure transition per simulated year. Never shared between communities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub population: f64,
    pub households: f64,
    pub household_size: f64,
    /// Annual growth rate fixed at initialization.
    pub growth_rate: f64,
    pub rates: RatchetRates,
    /// Average monthly household income; monotonically increasing.
    pub income: f64,
    /// Bounded random walk with event shocks.
    pub unemployment: f64,
    pub farming_rate: f64,
    // Permanent facility flags: false→true only.
    pub has_health_station: bool,
    pub has_daycare: bool,
    pub has_multipurpose_hall: bool,
    /// Mobile signal tier 0–4, non-decreasing, +1 at most per year.
    pub signal_tier: u8,
}

impl ProgressionState {
    /// Starting state for year 0. Called exactly once per community.
    pub fn init(rng: &mut Lcg, profile: &LocationProfile, class: &Classification) -> Self {
        let (hh_lo, hh_hi) = match profile.area_type {
            AreaType::Urban => (220, 600),
            AreaType::SemiUrban => (120, 350),
            AreaType::Rural => (60, 200),
            AreaType::Highland => (30, 120),
        };
        let households = rng.next_int(hh_lo, hh_hi) as f64;

        let (size_mean, size_sd) = if class.indigenous { (5.2, 0.7) } else { (4.6, 0.6) };
        let household_size = rng.clamped_gaussian(size_mean, size_sd, 3.0, 7.5);
        let population = (households * household_size).round();

        // Highland communities can shrink through outmigration.
        let growth_rate = match profile.area_type {
            AreaType::Urban => rng.clamped_gaussian(0.022, 0.008, 0.004, 0.045),
            AreaType::SemiUrban => rng.clamped_gaussian(0.018, 0.008, 0.002, 0.04),
            AreaType::Rural => rng.clamped_gaussian(0.014, 0.008, 0.001, 0.035),
            AreaType::Highland => rng.clamped_gaussian(0.006, 0.009, -0.012, 0.03),
        };

        let infra = 0.6 + 0.4 * profile.infrastructure;
        let served = |rng: &mut Lcg, lo: f64, hi: f64| (rng.next_float(lo, hi) * infra).min(0.97);

        let rates = if class.remote {
            RatchetRates {
                electricity: rng.next_float(0.10, 0.40),
                toilet: rng.next_float(TOILET_REMOTE_RANGE.0, TOILET_REMOTE_RANGE.1),
                internet: rng.next_float(0.0, 0.08),
                water_maturity: rng.next_float(0.10, 0.35),
                road_maturity: rng.next_float(0.05, 0.30),
                national_id: rng.next_float(0.0, 0.03),
                birth_cert: rng.next_float(0.40, 0.70),
            }
        } else {
            RatchetRates {
                electricity: served(rng, 0.55, 0.95),
                toilet: rng.next_float(TOILET_SERVED_RANGE.0, TOILET_SERVED_RANGE.1),
                internet: served(rng, 0.05, 0.40),
                water_maturity: served(rng, 0.35, 0.85),
                road_maturity: served(rng, 0.30, 0.80),
                national_id: rng.next_float(0.0, 0.05),
                birth_cert: rng.next_float(0.70, 0.95),
            }
        };

        let income_base = rng.next_float(4_000.0, 9_500.0) * profile.income_multiplier;
        let income = if class.remote { income_base * 0.7 } else { income_base };

        let unemployment = {
            let mut base = rng.next_float(0.04, 0.16);
            if class.remote {
                base += 0.05;
            }
            if class.conflict_affected {
                base += 0.03;
            }
            base.clamp(UNEMPLOYMENT_FLOOR, UNEMPLOYMENT_CEIL)
        };

        let farming_rate = match profile.area_type {
            AreaType::Urban => rng.next_float(0.04, 0.18),
            AreaType::SemiUrban => rng.next_float(0.18, 0.45),
            AreaType::Rural => rng.next_float(0.40, 0.78),
            AreaType::Highland => rng.next_float(0.50, 0.85),
        };

        let facility_base = match profile.area_type {
            AreaType::Urban => 0.9,
            AreaType::SemiUrban => 0.65,
            AreaType::Rural => 0.4,
            AreaType::Highland => 0.2,
        };
        let facility_p = if class.remote { facility_base * 0.5 } else { facility_base };

        let signal_tier = {
            let base = match profile.area_type {
                AreaType::Urban => rng.next_int(2, 3),
                AreaType::SemiUrban => rng.next_int(1, 3),
                AreaType::Rural => rng.next_int(1, 2),
                AreaType::Highland => rng.next_int(0, 1),
            };
            let tier = if class.remote { base - 1 } else { base };
            tier.max(0) as u8
        };

        Self {
            population,
            households,
            household_size,
            growth_rate,
            rates,
            income,
            unemployment,
            farming_rate,
            has_health_station: rng.chance(facility_p),
            has_daycare: rng.chance(facility_p * 0.9),
            has_multipurpose_hall: rng.chance(0.5),
            signal_tier,
        }
    }
}

/// How strongly an urgent priority rating in this year's record accelerates
/// next year's matching infrastructure gain.
const URGENCY_BOOST: f64 = 1.25;

fn urgency_multiplier(record: &CommunityRecord, need: &str) -> f64 {
    record
        .priorities
        .ratings
        .iter()
        .find(|r| r.need == need)
        .map(|r| if r.rating == 3 { URGENCY_BOOST } else { 1.0 })
        .unwrap_or(1.0)
}

/// Pure yearly transition: current state plus the just-synthesized record
/// for `year` produce the state for `year + 1`. Never touches another
/// community's state.
pub fn advance(
    state: &ProgressionState,
    record: &CommunityRecord,
    year: i32,
    rng: &mut Lcg,
) -> ProgressionState {
    let mut next = state.clone();

    let variance = rng.next_float(0.85, 1.15);
    next.population = (state.population * (1.0 + state.growth_rate * variance)).max(1.0);
    // Households grow slightly slower than heads, nudging size upward.
    next.households = (state.households * (1.0 + state.growth_rate * 0.9 * variance)).max(1.0);
    next.household_size = next.population / next.households;

    // Diminishing-returns gain toward the cap, scaled by calendar policy
    // and by whether this year's record flagged the need as urgent.
    let mut gain = |current: f64, cap: f64, policy: f64, need: &str| {
        let headroom = cap - current;
        let increment =
            headroom * rng.next_float(0.02, 0.10) * policy * urgency_multiplier(record, need);
        raised(current, increment, cap)
    };

    let electrification_policy = if year >= ELECTRIFICATION_PUSH_YEAR { 1.8 } else { 1.0 };
    let internet_policy = if year == PANDEMIC_YEAR {
        3.5
    } else if year > PANDEMIC_YEAR {
        1.8
    } else {
        1.0
    };
    let id_policy = if year == ID_ROLLOUT_START {
        4.0
    } else if year > ID_ROLLOUT_START && year <= ID_ROLLOUT_END {
        2.5
    } else {
        1.0
    };

    next.rates.electricity = gain(
        state.rates.electricity,
        ELECTRICITY_CAP,
        electrification_policy,
        "electrification",
    );
    next.rates.toilet = gain(state.rates.toilet, TOILET_CAP, 1.0, "sanitation");
    next.rates.internet = gain(state.rates.internet, INTERNET_CAP, internet_policy, "connectivity");
    next.rates.water_maturity = gain(state.rates.water_maturity, WATER_CAP, 1.0, "water_system");
    next.rates.road_maturity = gain(state.rates.road_maturity, ROAD_CAP, 1.0, "road_upgrade");
    next.rates.national_id = gain(state.rates.national_id, NATIONAL_ID_CAP, id_policy, "civil_registration");
    next.rates.birth_cert = gain(state.rates.birth_cert, BIRTH_CERT_CAP, 1.0, "civil_registration");

    next.income = state.income * (1.0 + rng.next_float(0.01, 0.06));

    let mut unemployment = state.unemployment + rng.next_float(-0.012, 0.012);
    if year == PANDEMIC_YEAR {
        unemployment += 0.06;
    } else if year == PANDEMIC_YEAR + 1 {
        unemployment -= 0.03;
    }
    next.unemployment = unemployment.clamp(UNEMPLOYMENT_FLOOR, UNEMPLOYMENT_CEIL);

    next.farming_rate = (state.farming_rate + rng.next_float(-0.02, 0.012)).clamp(0.02, 0.9);

    // Permanent flags only ever flip on.
    if !next.has_health_station && rng.chance(0.04) {
        next.has_health_station = true;
    }
    if !next.has_daycare && rng.chance(0.06) {
        next.has_daycare = true;
    }
    if !next.has_multipurpose_hall && rng.chance(0.05) {
        next.has_multipurpose_hall = true;
    }

    // One tier per year at most; tier 4 gated by the rollout calendar.
    if next.signal_tier < 4 && rng.chance(0.18) {
        let candidate = next.signal_tier + 1;
        if candidate < 4 || year + 1 >= TOP_SIGNAL_TIER_YEAR {
            next.signal_tier = candidate;
        }
    }

    next
}
