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

//! Permutations of `{0, ..., n - 1}` driven by multiplication in a prime
//! field: [`Cycle`] is a single cycle through the whole domain, [`Cycles`]
//! splits the domain into `m` disjoint cycles.

pub mod err;
pub mod single;
pub mod split;
mod walk;

pub use err::{CycleError, EmptyDomainError, InvalidSplitError};
pub use single::{Cycle, Orbit};
pub use split::{Cycles, MAX_COVERAGE_RETRIES, SubCycle, split_modulus};

/// Domains up to this size skip the field construction and use the plain
/// successor `x -> (x + 1) mod n`.
pub const TRIVIAL_LIMIT: u64 = 5;
