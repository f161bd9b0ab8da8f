use rand::RngCore;

/// Multiplier/increment of the 31-bit linear congruential step.
const LCG_A: i64 = 1_103_515_245;
const LCG_C: i64 = 12_345;
/// Modulus: 2^31.
const LCG_M: i64 = 1 << 31;

/// Stride constants for deriving independent sub-streams per entity and year.
const ENTITY_STRIDE: i64 = 100_003;
const YEAR_STRIDE: i64 = 7_919;

/// Derive a deterministic sub-seed for one entity-year, independent of the
/// order in which entities or years are processed.
pub fn sub_seed(seed: i64, entity_index: usize, year_offset: u32) -> i64 {
    let raw = seed
        .wrapping_add(ENTITY_STRIDE.wrapping_mul(entity_index as i64 + 1))
        .wrapping_add(YEAR_STRIDE.wrapping_mul(year_offset as i64));
    raw.rem_euclid(LCG_M)
}

/// Seeded 31-bit linear congruential generator.
///
/// Every draw advances the one internal seed, so a given seed always yields
/// the same sequence. Not suitable for anything security-sensitive; it exists
/// to make synthetic data reproducible.
#[derive(Debug, Clone)]
pub struct Lcg {
    seed: i64,
}

impl Lcg {
    pub fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(LCG_M),
        }
    }

    fn step(&mut self) -> i64 {
        self.seed = (self.seed * LCG_A + LCG_C).rem_euclid(LCG_M);
        self.seed
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.step() as f64 / LCG_M as f64
    }

    /// Uniform integer in `[lo, hi]` (inclusive on both ends).
    pub fn next_int(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "next_int: empty range {lo}..={hi}");
        lo + (self.next_uniform() * (hi - lo + 1) as f64).floor() as i64
    }

    /// Uniform float in `[lo, hi)`.
    pub fn next_float(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_uniform() * (hi - lo)
    }

    /// Bernoulli draw with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_uniform() < p
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick: empty slice");
        &items[self.next_int(0, items.len() as i64 - 1) as usize]
    }

    /// Weighted pick via cumulative subtraction.
    ///
    /// Panics on an empty slice or a length mismatch. A zero (or negative)
    /// total weight falls back to a uniform pick, since context-scaled weight
    /// tables can legitimately collapse to all zeros. Floating-point rounding
    /// at the tail resolves to the last item.
    pub fn pick_weighted<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> &'a T {
        assert!(!items.is_empty(), "pick_weighted: empty slice");
        assert_eq!(
            items.len(),
            weights.len(),
            "pick_weighted: {} items vs {} weights",
            items.len(),
            weights.len()
        );
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return self.pick(items);
        }
        let mut roll = self.next_uniform() * total;
        for (item, &w) in items.iter().zip(weights) {
            roll -= w;
            if roll < 0.0 {
                return item;
            }
        }
        &items[items.len() - 1]
    }

    /// In-place Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            items.swap(i, j);
        }
    }

    /// Normal draw via Box–Muller (consumes two uniforms).
    pub fn gaussian(&mut self, mean: f64, sd: f64) -> f64 {
        // 1 - u keeps the argument of ln strictly positive.
        let u1 = 1.0 - self.next_uniform();
        let u2 = self.next_uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + z * sd
    }

    pub fn clamped_gaussian(&mut self, mean: f64, sd: f64, lo: f64, hi: f64) -> f64 {
        self.gaussian(mean, sd).clamp(lo, hi)
    }
}

/// Bridge into the rand ecosystem: a u32 is assembled from the top 16 bits of
/// two consecutive 31-bit steps (the low bits of an LCG are the weakest).
impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        let hi = (self.step() >> 15) as u32;
        let lo = (self.step() >> 15) as u32;
        (hi << 16) | (lo & 0xffff)
    }

    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
