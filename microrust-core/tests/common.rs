use microrust_core::rand::rngs::StdRng;
use microrust_core::rand::SeedableRng;
use microrust_core::value::from_slice;
use microrust_core::Value;

// Each integration test binary compiles this module separately and only
// uses part of it.

/// Seed shared by the training tests.
#[allow(dead_code)]
pub const SEED: u64 = 1337;

#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// The four input rows of the toy binary-classification dataset.
#[allow(dead_code)]
pub fn toy_inputs() -> Vec<Vec<Value>> {
    [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ]
    .iter()
    .map(|row| from_slice(row))
    .collect()
}

/// Targets matching [`toy_inputs`].
#[allow(dead_code)]
pub const TOY_TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];
