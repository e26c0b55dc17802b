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

use crate::field::{err::FieldExhaustedError, primality::is_prime};

/// Successive primes `p > n` with `p = 1 (mod r)` and `(p - 1) / r` prime,
/// in increasing order.
///
/// For such a prime the factorization of `p - 1` is known up front
/// (the primes of `r` plus the cofactor), which is what makes the
/// primitive-root test in [`crate::field::generator`] cheap.
#[derive(Debug, Clone)]
pub struct PrimeCandidates {
    next: Option<u64>,
    r: u64,
}

impl PrimeCandidates {
    /// Starts the progression at the smallest value `>= n + 1` that is
    /// `1 (mod r)`.
    ///
    /// # Panics
    ///
    /// Panics if `r < 2`.
    pub fn new(n: u64, r: u64) -> Self {
        assert!(r >= 2, "r must be at least 2");
        let start = n.checked_add(1).and_then(|p| match n % r {
            0 => Some(p),
            rem => p.checked_add(r - rem),
        });
        Self { next: start, r }
    }

    #[inline]
    pub fn r(&self) -> u64 {
        self.r
    }
}

impl Iterator for PrimeCandidates {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let p = self.next?;
            self.next = p.checked_add(self.r);
            if is_prime((p - 1) / self.r) && is_prime(p) {
                return Some(p);
            }
        }
    }
}

/// Smallest prime `p >= n + 1` with `p = 1 (mod r)` and `(p - 1) / r` prime.
pub fn select_prime(n: u64, r: u64) -> Result<u64, FieldExhaustedError> {
    PrimeCandidates::new(n, r)
        .next()
        .ok_or_else(|| FieldExhaustedError::new(n, r))
}
