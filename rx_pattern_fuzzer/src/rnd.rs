/**
 * Random utilities. Everything draws from one seeded generator per thread,
 * so a run can be replayed from its seed.
 */

use std::cell::RefCell;
use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

thread_local! {
    static RNG: RefCell<Mcg128Xsl64> = RefCell::new(Mcg128Xsl64::new(0));
    static SEED: RefCell<u64> = RefCell::new(0);
}

pub fn seed_from_system_time() -> u64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

pub fn current_seed() -> u64 {
    SEED.with(|s| *s.borrow())
}

pub fn set_seed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = Mcg128Xsl64::seed_from_u64(seed));
    SEED.with(|s| *s.borrow_mut() = seed);
}

/// A number in `r`; `r.start` for an empty range.
pub fn rand_range(r: &Range<usize>) -> usize {
    if r.start >= r.end {
        return r.start;
    }
    RNG.with(|rng| rng.borrow_mut().gen_range(r.start, r.end))
}

pub fn sample<T>(s: &[T]) -> &T {
    assert!(!s.is_empty());
    &s[rand_range(&(0..s.len()))]
}

pub fn rand_string(len: &Range<usize>, charset: &[char]) -> String {
    let len = rand_range(len);
    (0..len).map(|_| *sample(charset)).collect()
}

/// A random char boundary of `src` in the byte range `r`, ends included.
pub fn rand_boundary(src: &str, r: Range<usize>) -> usize {
    let boundaries: Vec<usize> = (r.start..=r.end)
        .filter(|i| src.is_char_boundary(*i))
        .collect();
    if boundaries.is_empty() {
        src.len()
    }
    else {
        *sample(&boundaries)
    }
}
