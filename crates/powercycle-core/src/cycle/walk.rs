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

use crate::field::mul_mod;

/// Multiplication by `g` modulo `p`, restricted to the field
/// representatives `1..=n` of the domain `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FieldWalk {
    p: u64,
    g: u64,
}

impl FieldWalk {
    #[inline]
    pub(crate) const fn new(p: u64, g: u64) -> Self {
        Self { p, g }
    }

    #[inline]
    pub(crate) const fn p(&self) -> u64 {
        self.p
    }

    #[inline]
    pub(crate) const fn g(&self) -> u64 {
        self.g
    }

    /// Maps `x` in `0..n` to the next domain element along the orbit of `g`.
    ///
    /// Requires `n < p`. Field elements above `n` are skipped; the expected
    /// number of multiplications is about `p / n`.
    #[inline]
    pub(crate) fn next_in_range(&self, x: u64, n: u64) -> u64 {
        debug_assert!(n < self.p);
        let mut y = x + 1;
        loop {
            y = mul_mod(y, self.g, self.p);
            if y <= n {
                return y - 1;
            }
        }
    }
}
