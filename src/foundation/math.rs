//! Deterministic math helpers shared by the frame evaluator.
//!
//! Everything here is a pure function of its arguments. Seeded noise is the
//! only sanctioned source of randomness in the crate; sampling it with the
//! same seed and coordinate always returns the same value, which is what
//! makes repeated frame evaluation bit-identical.

/// Linear interpolation from `a` to `b` by `t` (unclamped).
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp to the unit interval.
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// SplitMix64 generator. Small state, good distribution, trivially seedable.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed the generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64 random bits.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Stateless noise in `[0, 1)` at integer coordinate `x` under `seed`.
pub fn noise01(seed: u64, x: u64) -> f64 {
    let mut rng = Rng64::new(seed ^ x.wrapping_mul(0xD6E8_FEB8_6659_FD93));
    rng.next_f64_01()
}

/// Seeded FNV-1a 64 over a string. Used to derive per-scene seeds from the
/// timeline seed and scene ids so scenes animate independently but stably.
pub fn stable_hash64(seed: u64, s: &str) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325u64 ^ seed;
    for &b in s.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}
