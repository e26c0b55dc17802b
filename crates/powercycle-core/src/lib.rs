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

//! # powercycle-core
//!
//! Pseudorandom cyclic permutations of `{0, ..., n - 1}` that are applied one
//! element at a time, without materializing the permutation. Domains of up to
//! roughly `10^15` elements are practical.
//!
//! A [`Cycle`](cycle::Cycle) is built from a prime `p > n` with `(p - 1) / 2`
//! prime and a random primitive root `g` modulo `p`. The successor of `x` is
//! found by multiplying `x + 1` by `g` until the product falls back into
//! `1..=n`. [`Cycles`](cycle::Cycles) uses a power of the primitive root to
//! split the domain into `m` disjoint cycles of near-equal length.
//!
//! The permutations are not cryptographically secure and only cover a small
//! structured family of all permutations.
//!
//! ## Example
//!
//! ```rust
//! use powercycle_core::prelude::*;
//!
//! let cycle = Cycle::new(1_000_000).unwrap();
//! let first: Vec<u64> = cycle.orbit(0).take(5).collect();
//! assert_eq!(first[0], 0);
//!
//! let (split, reps) = Cycles::new_split(100, 10).unwrap();
//! let total: usize = reps.iter().map(|&r| split.sub_cycle(r).count()).sum();
//! assert_eq!(total, 100);
//! ```

pub mod cycle;
pub mod field;

pub mod prelude {
    pub use crate::cycle::{Cycle, CycleError, Cycles, Orbit, SubCycle};
    pub use crate::field::FieldExhaustedError;
}
