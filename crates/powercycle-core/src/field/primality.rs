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

use crate::field::arith::{mul_mod, pow_mod};

/// Witness set that makes Miller-Rabin exact for every `n < 3.3 * 10^24`,
/// which covers the whole `u64` range.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic primality test for 64-bit integers.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &q in WITNESSES.iter() {
        if n % q == 0 {
            return n == q;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in WITNESSES.iter() {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Distinct prime divisors of `r` in ascending order, by trial division.
///
/// Only meant for the small split parameter, never for `p - 1` itself.
pub fn prime_factors(mut r: u64) -> Vec<u64> {
    let mut out = Vec::new();
    if r < 2 {
        return out;
    }
    if r % 2 == 0 {
        out.push(2);
        while r % 2 == 0 {
            r /= 2;
        }
    }
    let mut q = 3u64;
    while q <= r / q {
        if r % q == 0 {
            out.push(q);
            while r % q == 0 {
                r /= q;
            }
        }
        q += 2;
    }
    if r > 1 {
        out.push(r);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sieve(limit: usize) -> Vec<bool> {
        let mut is = vec![true; limit + 1];
        is[0] = false;
        if limit >= 1 {
            is[1] = false;
        }
        let mut i = 2;
        while i * i <= limit {
            if is[i] {
                let mut j = i * i;
                while j <= limit {
                    is[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        is
    }

    #[test]
    fn test_is_prime_matches_sieve() {
        let limit = 100_000;
        let table = sieve(limit);
        for (n, &expected) in table.iter().enumerate() {
            assert_eq!(is_prime(n as u64), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_is_prime_large_known_values() {
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(4_294_967_311));
        assert!(is_prime(u64::MAX - 58));
        assert!(!is_prime(u64::MAX));
        // Carmichael numbers
        assert!(!is_prime(561));
        assert!(!is_prime(41_041));
        assert!(!is_prime(3_215_031_751));
        // Product of two large primes
        assert!(!is_prime(1_000_000_007 * 998_244_353));
    }

    #[test]
    fn test_prime_factors_small() {
        assert_eq!(prime_factors(0), Vec::<u64>::new());
        assert_eq!(prime_factors(1), Vec::<u64>::new());
        assert_eq!(prime_factors(2), vec![2]);
        assert_eq!(prime_factors(12), vec![2, 3]);
        assert_eq!(prime_factors(20), vec![2, 5]);
        assert_eq!(prime_factors(64), vec![2]);
        assert_eq!(prime_factors(2 * 3 * 5 * 7 * 11), vec![2, 3, 5, 7, 11]);
        assert_eq!(prime_factors(2 * 97), vec![2, 97]);
    }

    #[test]
    fn test_prime_factors_are_prime_and_divide() {
        for r in 2..2_000u64 {
            let fs = prime_factors(r);
            assert!(!fs.is_empty());
            assert!(fs.windows(2).all(|w| w[0] < w[1]));
            for &q in &fs {
                assert!(is_prime(q));
                assert_eq!(r % q, 0);
            }
        }
    }
}
