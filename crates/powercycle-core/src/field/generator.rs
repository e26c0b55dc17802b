// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::field::arith::pow_mod;
use rand::Rng;

/// Checks whether `g` generates the full multiplicative group modulo `p`,
/// where `p - 1 = r * s` with `s` prime and `r_factors` the distinct prime
/// divisors of `r`.
///
/// `g` has order `p - 1` iff `g^((p - 1) / q) != 1` for every prime `q`
/// dividing `p - 1`. For `q = s` this is `g^r != 1`; the remaining primes
/// are exactly those of `r`.
pub fn is_generator(g: u64, p: u64, r: u64, r_factors: &[u64]) -> bool {
    debug_assert_eq!((p - 1) % r, 0, "r must divide p - 1");
    let g = g % p;
    if g == 0 {
        return false;
    }
    if pow_mod(g, r, p) == 1 {
        return false;
    }
    r_factors
        .iter()
        .all(|&q| pow_mod(g, (p - 1) / q, p) != 1)
}

/// Draws uniform candidates from `[2, p - 2]` until one is a primitive root
/// modulo `p`.
///
/// Each draw succeeds with probability `phi(p - 1) / (p - 1)`, so the
/// expected number of trials is small. There is no upper bound.
///
/// # Panics
///
/// Panics if `p < 5`, since `[2, p - 2]` would be empty.
pub fn find_generator<R: Rng>(p: u64, r: u64, r_factors: &[u64], rng: &mut R) -> u64 {
    find_generator_counted(p, r, r_factors, rng).0
}

/// Like [`find_generator`], also returning the number of candidates drawn.
pub(crate) fn find_generator_counted<R: Rng>(
    p: u64,
    r: u64,
    r_factors: &[u64],
    rng: &mut R,
) -> (u64, u64) {
    assert!(p >= 5, "modulus too small for a generator search");
    let mut trials = 0u64;
    loop {
        trials += 1;
        let g = rng.random_range(2..=p - 2);
        if is_generator(g, p, r, r_factors) {
            return (g, trials);
        }
        tracing::trace!(p, g, trials, "rejected generator candidate");
    }
}
