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

//! Prime fields with a known factorization of `p - 1`.
//!
//! [`selector`] picks a prime `p` above the domain size such that
//! `p - 1 = r * s` with `r` small and `s` prime, and [`generator`] finds a
//! primitive root modulo such a `p`.

pub mod arith;
pub mod err;
pub mod generator;
pub mod primality;
pub mod selector;

pub use arith::{mul_mod, pow_mod};
pub use err::FieldExhaustedError;
pub use generator::{find_generator, is_generator};
pub use primality::{is_prime, prime_factors};
pub use selector::{PrimeCandidates, select_prime};
