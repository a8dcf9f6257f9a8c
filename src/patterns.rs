//! Input sequence generation for the driver, tests and benchmarks.
//!
//! Every generator takes an explicit seed so runs are reproducible; the
//! process-wide [`master_seed`] can be pinned via the `SORT_BENCH_SEED`
//! environment variable.

use std::env;

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

static MASTER_SEED: Lazy<u64> = Lazy::new(|| {
    env::var("SORT_BENCH_SEED")
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or_else(|| rand::thread_rng().gen())
});

/// Process-wide seed. Fresh per process unless pinned via `SORT_BENCH_SEED`.
pub fn master_seed() -> u64 {
    *MASTER_SEED
}

fn rng_from(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// `len` values drawn uniformly from `[0, len)`.
pub fn random_uniform(len: usize, seed: u64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = rng_from(seed);
    let bound = i32::try_from(len).unwrap_or(i32::MAX);
    (0..len).map(|_| rng.gen_range(0..bound)).collect()
}

/// `len` zipfian-distributed values in `[0, len)`, heavy on duplicates of the
/// small keys.
pub fn random_zipf(len: usize, exponent: f64, seed: u64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = rng_from(seed);
    let dist = zipf::ZipfDistribution::new(len, exponent).expect("invalid zipf parameters");
    (0..len)
        .map(|_| {
            let val = dist.sample(&mut rng) - 1;
            i32::try_from(val).unwrap_or(i32::MAX)
        })
        .collect()
}

/// `0, 1, .., len-1`. Already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len).map(|x| i32::try_from(x).unwrap_or(i32::MAX)).collect()
}

/// `len-1, .., 1, 0`. Reverse sorted, the quicksort worst case.
pub fn descending(len: usize) -> Vec<i32> {
    let mut v = ascending(len);
    v.reverse();
    v
}
