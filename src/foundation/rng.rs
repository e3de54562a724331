/// Small deterministic PRNG (SplitMix64).
///
/// Every random decision in the engine (spot positions, carousel order and
/// per-slot geometry) draws from an explicit `Rng64`, so a fixed seed
/// reproduces a layout exactly.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// A fresh seed from the thread-local OS-seeded generator. Log or print
    /// it when a run should be reproducible later.
    pub fn entropy_seed() -> u64 {
        rand::random()
    }

    pub fn from_entropy() -> Self {
        Self::new(Self::entropy_seed())
    }

    /// Derive an independent stream; the parent advances by one step.
    pub fn fork(&mut self) -> Self {
        Self::new(self.next_u64())
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform in `[lo, hi)`.
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64_01() * (hi - lo)
    }

    /// Uniform index in `0..=max`.
    pub fn next_index_inclusive(&mut self, max: usize) -> usize {
        let i = (self.next_f64_01() * (max as f64 + 1.0)).floor() as usize;
        i.min(max)
    }
}
