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

use crate::cycle::{
    TRIVIAL_LIMIT,
    err::{CycleError, EmptyDomainError},
    walk::FieldWalk,
};
use crate::field::{generator::find_generator_counted, select_prime};
use rand::Rng;

/// A single cycle through every element of `{0, ..., n - 1}`.
///
/// The successor of `x` is found by embedding `x + 1` into the prime field
/// `F_p` with `p > n` and multiplying by a primitive root `g` until the
/// result lands back in `1..=n`. Because `g` generates all of `F_p^*`,
/// the filtered orbit visits every domain element exactly once.
///
/// Domains with at most [`TRIVIAL_LIMIT`] elements use the plain successor
/// `x -> (x + 1) mod n` instead.
///
/// # Example
///
/// ```rust
/// use powercycle_core::prelude::*;
///
/// let cycle = Cycle::new(1000).unwrap();
/// let mut x = 0;
/// for _ in 0..1000 {
///     x = cycle.apply(x);
///     assert!(x < 1000);
/// }
/// assert_eq!(x, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cycle {
    n: u64,
    walk: Option<FieldWalk>,
}

impl Cycle {
    /// Builds a random cycle on `{0, ..., n - 1}` using the thread-local RNG.
    pub fn new(n: u64) -> Result<Self, CycleError> {
        Self::with_rng(n, &mut rand::rng())
    }

    /// Builds a random cycle on `{0, ..., n - 1}`, drawing the generator
    /// from `rng`.
    #[tracing::instrument(level = "debug", skip(rng))]
    pub fn with_rng<R: Rng>(n: u64, rng: &mut R) -> Result<Self, CycleError> {
        if n == 0 {
            return Err(EmptyDomainError.into());
        }
        if n <= TRIVIAL_LIMIT {
            tracing::debug!(n, "using trivial successor cycle");
            return Ok(Self::trivial(n));
        }

        let p = select_prime(n, 2)?;
        let (g, trials) = find_generator_counted(p, 2, &[2], rng);
        tracing::debug!(n, p, g, trials, "selected field and primitive root");

        Ok(Self::from_field(n, p, g))
    }

    #[inline]
    pub(crate) const fn trivial(n: u64) -> Self {
        Self { n, walk: None }
    }

    #[inline]
    pub(crate) const fn from_field(n: u64, p: u64, g: u64) -> Self {
        Self {
            n,
            walk: Some(FieldWalk::new(p, g)),
        }
    }

    /// Size of the domain.
    #[inline]
    pub const fn n(&self) -> u64 {
        self.n
    }

    /// The field modulus, `None` for trivial cycles.
    #[inline]
    pub fn p(&self) -> Option<u64> {
        self.walk.map(|w| w.p())
    }

    /// The multiplier, `None` for trivial cycles.
    #[inline]
    pub fn g(&self) -> Option<u64> {
        self.walk.map(|w| w.g())
    }

    #[inline]
    pub const fn is_trivial(&self) -> bool {
        self.walk.is_none()
    }

    /// Returns the successor of `x`. Requires `x < n`.
    #[inline]
    pub fn apply(&self, x: u64) -> u64 {
        debug_assert!(x < self.n, "{} is outside the domain of {}", x, self);
        match &self.walk {
            None => (x + 1) % self.n,
            Some(walk) => walk.next_in_range(x, self.n),
        }
    }

    /// Iterates one full lap of the cycle: `start`, `apply(start)`, ...,
    /// yielding exactly `n` elements.
    pub fn orbit(&self, start: u64) -> Orbit {
        debug_assert!(start < self.n);
        Orbit {
            cycle: *self,
            current: start,
            remaining: self.n,
        }
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.walk {
            None => write!(f, "<Cycle n={} (trivial)>", self.n),
            Some(walk) => write!(f, "<Cycle n={} p={} g={}>", self.n, walk.p(), walk.g()),
        }
    }
}

/// Iterator over one lap of a [`Cycle`].
#[derive(Debug, Clone)]
pub struct Orbit {
    cycle: Cycle,
    current: u64,
    remaining: u64,
}

impl Iterator for Orbit {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.current = self.cycle.apply(x);
        }
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(r) => (r, Some(r)),
            Err(_) => (usize::MAX, None),
        }
    }
}
