//! Seeded, deterministic shuffling.
//!
//! The generator is a plain 32-bit linear congruential generator
//! (`state = state * 1664525 + 1013904223 mod 2^32`). It exists for
//! repeatability only: it is not statistically strong and must never be used
//! where unpredictability matters.
//!
//! The swap index is derived from the state read as a *signed* 32-bit value:
//! `|state as i32| mod (i + 1)`. Reading it unsigned produces a different
//! permutation, so keep both the wrapping arithmetic and the sign handling
//! when touching this code.

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// 32-bit linear congruential generator
#[derive(Clone, Copy, Debug)]
struct Lcg {
    state: u32,
}

impl Lcg {
    fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Next index in `0..bound`
    fn next_index(&mut self, bound: usize) -> usize {
        let signed = self.step() as i32;
        signed.unsigned_abs() as usize % bound
    }
}

/// Return a permutation of `items` determined entirely by `seed`
///
/// Fisher-Yates from the last index down to 1, advancing the generator once
/// per swap. Slices of length 0 or 1 come back unchanged.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut rng = Lcg::new(seed);

    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i + 1);
        shuffled.swap(i, j);
    }

    shuffled
}
