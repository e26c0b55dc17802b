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

//! Modular arithmetic on 64-bit residues.
//!
//! Products of two residues below `p <= u64::MAX` always fit into a `u128`,
//! so every routine here reduces through a single widening multiply.

/// Computes `(a * b) mod p`.
#[inline]
pub fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    debug_assert!(p > 0, "modulus must be positive");
    ((a as u128 * b as u128) % p as u128) as u64
}

/// Computes `base^exp mod p` by square-and-multiply.
pub fn pow_mod(base: u64, mut exp: u64, p: u64) -> u64 {
    debug_assert!(p > 0, "modulus must be positive");
    if p == 1 {
        return 0;
    }

    let mut result = 1u64;
    let mut base = base % p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, p);
        }
        exp >>= 1;
        base = mul_mod(base, base, p);
    }
    result
}
