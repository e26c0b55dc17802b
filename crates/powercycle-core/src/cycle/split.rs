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
    err::{CycleError, EmptyDomainError, InvalidSplitError},
    single::Cycle,
};
use crate::field::{
    FieldExhaustedError, PrimeCandidates, generator::find_generator_counted, mul_mod, pow_mod,
    prime_factors,
};
use rand::Rng;

/// How many further primes [`Cycles::split_with_rng`] tries when some coset
/// of the subgroup does not meet the domain.
pub const MAX_COVERAGE_RETRIES: usize = 16;

/// A permutation of `{0, ..., n - 1}` made of `m` disjoint cycles of
/// roughly equal length.
///
/// If `g` is a primitive root modulo `p`, then `g^m` generates the unique
/// subgroup of index `m` in `F_p^*`. Walking by `g^m` never leaves the coset
/// it started in, so each coset that meets `1..=n` becomes one sub-cycle.
/// A coset holds `(p - 1) / m` field elements, at most `p - 1 - n` of which
/// fall outside the domain, which bounds how far sub-cycle lengths stray
/// from `n / m`.
///
/// When `m` is a large fraction of `n`, no admissible prime near `n` may
/// give every coset a domain element. The missing cycles are then made of
/// fixed points cut out of the covered sub-cycles; see
/// [`Cycles::fixed_points`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycles {
    inner: Cycle,
    m: u32,
    /// Sorted. Each maps to itself and is skipped by the field walk.
    fixed: Vec<u64>,
}

/// The divisor of `p - 1` used for an `m`-way split: `max(m, 2)`, doubled
/// when odd so that `p` can be odd.
#[inline]
pub fn split_modulus(m: u32) -> u64 {
    let r = u64::from(m.max(2));
    if r % 2 == 1 { 2 * r } else { r }
}

impl Cycles {
    /// Splits `{0, ..., n - 1}` into `m` cycles using the thread-local RNG.
    ///
    /// Returns the permutation together with one starting element per
    /// sub-cycle.
    pub fn new_split(n: u64, m: u32) -> Result<(Self, Vec<u64>), CycleError> {
        Self::split_with_rng(n, m, &mut rand::rng())
    }

    /// Splits `{0, ..., n - 1}` into `m` cycles, drawing the generator from
    /// `rng`.
    ///
    /// Always returns exactly `m` representatives, one per sub-cycle. They
    /// are ordered by coset. If some coset still misses the domain after
    /// [`MAX_COVERAGE_RETRIES`] further primes, the split falls back to the
    /// first candidate prime and completes the count with fixed points,
    /// which are appended after the coset representatives.
    #[tracing::instrument(level = "debug", skip(rng))]
    pub fn split_with_rng<R: Rng>(
        n: u64,
        m: u32,
        rng: &mut R,
    ) -> Result<(Self, Vec<u64>), CycleError> {
        if n == 0 {
            return Err(EmptyDomainError.into());
        }
        if m == 0 || u64::from(m) > n {
            return Err(InvalidSplitError::new(n, m).into());
        }
        if n <= TRIVIAL_LIMIT {
            tracing::debug!(n, m, "using trivial residue-class split");
            let split = Self::from_cycle(Cycle::trivial(n), m);
            return Ok((split, (0..u64::from(m)).collect()));
        }

        let r = split_modulus(m);
        let r_factors = prime_factors(r);
        let mut candidates = PrimeCandidates::new(n, r);
        let first = candidates
            .next()
            .ok_or_else(|| FieldExhaustedError::new(n, r))?;

        let (g0, representatives) = draw_field(n, m, first, r, &r_factors, rng);
        if representatives.len() == m as usize {
            return Ok((Self::from_field(n, m, first, g0), representatives));
        }

        let mut retries = 0;
        while retries < MAX_COVERAGE_RETRIES
            && let Some(p) = candidates.next()
        {
            retries += 1;
            tracing::debug!(p, retries, "a coset misses the domain, advancing prime");
            let (g0, representatives) = draw_field(n, m, p, r, &r_factors, rng);
            if representatives.len() == m as usize {
                return Ok((Self::from_field(n, m, p, g0), representatives));
            }
        }

        let mut split = Self::from_field(n, m, first, g0);
        let mut representatives = representatives;
        let missing = m as usize - representatives.len();
        tracing::warn!(
            n,
            m,
            p = first,
            missing,
            "cosets miss the domain, completing the split with fixed points"
        );
        let fixed = split.cut_fixed_points(&representatives, missing);
        representatives.extend_from_slice(&fixed);
        Ok((split, representatives))
    }

    fn from_cycle(inner: Cycle, m: u32) -> Self {
        Self {
            inner,
            m,
            fixed: Vec::new(),
        }
    }

    fn from_field(n: u64, m: u32, p: u64, g0: u64) -> Self {
        let g = pow_mod(g0, u64::from(m), p);
        Self::from_cycle(Cycle::from_field(n, p, g), m)
    }

    /// Turns `count` elements into fixed points, taking them from the
    /// sub-cycles of `representatives` in order and never the
    /// representatives themselves. Returns the elements in the order taken.
    ///
    /// Requires `count <= n - representatives.len()`.
    fn cut_fixed_points(&mut self, representatives: &[u64], count: usize) -> Vec<u64> {
        debug_assert!(self.fixed.is_empty());
        let mut taken = Vec::with_capacity(count);
        'cycles: for &rep in representatives {
            let mut x = self.inner.apply(rep);
            while x != rep {
                if taken.len() == count {
                    break 'cycles;
                }
                taken.push(x);
                x = self.inner.apply(x);
            }
        }
        debug_assert_eq!(taken.len(), count);

        let mut fixed = taken.clone();
        fixed.sort_unstable();
        self.fixed = fixed;
        taken
    }

    #[inline]
    pub const fn n(&self) -> u64 {
        self.inner.n()
    }

    /// Requested number of sub-cycles.
    #[inline]
    pub const fn m(&self) -> u32 {
        self.m
    }

    #[inline]
    pub fn p(&self) -> Option<u64> {
        self.inner.p()
    }

    /// The subgroup generator `g0^m`, `None` for trivial splits.
    #[inline]
    pub fn g(&self) -> Option<u64> {
        self.inner.g()
    }

    #[inline]
    pub const fn is_trivial(&self) -> bool {
        self.inner.is_trivial()
    }

    /// Elements cut out as one-element sub-cycles, in ascending order.
    /// Empty unless every coset of the subgroup could not be covered.
    #[inline]
    pub fn fixed_points(&self) -> &[u64] {
        &self.fixed
    }

    /// Returns the successor of `x` within its sub-cycle. Requires `x < n`.
    #[inline]
    pub fn apply(&self, x: u64) -> u64 {
        if self.inner.is_trivial() {
            debug_assert!(x < self.n(), "{} is outside the domain of {}", x, self);
            // Residue classes mod m.
            let next = x + u64::from(self.m);
            if next < self.n() {
                next
            } else {
                x % u64::from(self.m)
            }
        } else if self.fixed.is_empty() {
            self.inner.apply(x)
        } else {
            if self.is_fixed(x) {
                return x;
            }
            // The coset representative of x's sub-cycle is never fixed.
            let mut y = self.inner.apply(x);
            while self.is_fixed(y) {
                y = self.inner.apply(y);
            }
            y
        }
    }

    #[inline]
    fn is_fixed(&self, x: u64) -> bool {
        self.fixed.binary_search(&x).is_ok()
    }

    /// Iterates the sub-cycle containing `start`, beginning at `start` and
    /// ending just before it would come around again.
    pub fn sub_cycle(&self, start: u64) -> SubCycle<'_> {
        debug_assert!(start < self.n());
        SubCycle {
            split: self,
            start,
            next: Some(start),
        }
    }
}

impl std::fmt::Display for Cycles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.inner.p(), self.inner.g()) {
            (Some(p), Some(g)) => write!(
                f,
                "<Cycles n={} m={} p={} g={}>",
                self.n(),
                self.m,
                p,
                g
            ),
            _ => write!(f, "<Cycles n={} m={} (trivial)>", self.n(), self.m),
        }
    }
}

/// Iterator over one sub-cycle of a [`Cycles`].
#[derive(Debug, Clone)]
pub struct SubCycle<'a> {
    split: &'a Cycles,
    start: u64,
    next: Option<u64>,
}

impl Iterator for SubCycle<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.next?;
        let succ = self.split.apply(x);
        self.next = (succ != self.start).then_some(succ);
        Some(x)
    }
}

/// Draws a primitive root modulo `p` and collects the coset representatives
/// it yields.
fn draw_field<R: Rng>(
    n: u64,
    m: u32,
    p: u64,
    r: u64,
    r_factors: &[u64],
    rng: &mut R,
) -> (u64, Vec<u64>) {
    let (g0, trials) = find_generator_counted(p, r, r_factors, rng);
    let representatives = coset_representatives(n, m, p, g0);
    tracing::debug!(
        n,
        m,
        p,
        g0,
        trials,
        found = representatives.len(),
        "selected field for split"
    );
    (g0, representatives)
}

/// Walks the orbit of the primitive root `g0` from 1 and records, for each
/// of the `m` cosets of `<g0^m>`, the first element that lies in the domain.
///
/// The `j`-th power of `g0` lies in coset `j mod m`. The walk ends once all
/// cosets are represented or the orbit closes.
fn coset_representatives(n: u64, m: u32, p: u64, g0: u64) -> Vec<u64> {
    let m = m as usize;
    let mut reps: Vec<Option<u64>> = vec![None; m];
    let mut found = 0;
    let mut coset = 0;
    let mut y = 1u64;

    loop {
        if y <= n && reps[coset].is_none() {
            reps[coset] = Some(y - 1);
            found += 1;
            if found == m {
                break;
            }
        }
        y = mul_mod(y, g0, p);
        if y == 1 {
            break;
        }
        coset += 1;
        if coset == m {
            coset = 0;
        }
    }

    reps.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{is_generator, is_prime, select_prime};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    /// Walks every representative's sub-cycle and checks that they are
    /// disjoint and together cover the domain. Returns the sub-cycle lengths.
    fn assert_partition(split: &Cycles, reps: &[u64]) -> Vec<u64> {
        let n = split.n();
        let mut owner: Vec<Option<usize>> = vec![None; n as usize];
        let mut lengths = Vec::with_capacity(reps.len());
        for (i, &rep) in reps.iter().enumerate() {
            assert!(rep < n, "representative {} out of range in {}", rep, split);
            let mut len = 0;
            for x in split.sub_cycle(rep) {
                assert!(x < n, "{} is too big for {}", x, split);
                assert_eq!(
                    owner[x as usize], None,
                    "{} appears in two sub-cycles of {}",
                    x, split
                );
                owner[x as usize] = Some(i);
                len += 1;
            }
            lengths.push(len);
        }
        assert!(
            owner.iter().all(Option::is_some),
            "sub-cycles of {} do not cover the domain",
            split
        );
        assert_eq!(lengths.iter().sum::<u64>(), n);
        lengths
    }

    #[test]
    fn test_split_modulus() {
        assert_eq!(split_modulus(1), 2);
        assert_eq!(split_modulus(2), 2);
        assert_eq!(split_modulus(3), 6);
        assert_eq!(split_modulus(4), 4);
        assert_eq!(split_modulus(5), 10);
        assert_eq!(split_modulus(10), 10);
    }

    #[test]
    fn test_hundred_into_ten() {
        let (split, reps) = Cycles::new_split(100, 10).unwrap();
        assert_eq!(reps.len(), 10);
        let lengths = assert_partition(&split, &reps);
        assert_eq!(lengths.iter().sum::<u64>(), 100);
        assert_eq!(split.m(), 10);
        assert_eq!(split.p(), Some(131));
    }

    #[test]
    fn test_exact_representative_count_for_every_m() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 6..60u64 {
            for m in 1..=n as u32 {
                let (split, reps) = Cycles::split_with_rng(n, m, &mut rng).unwrap();
                assert_eq!(reps.len(), m as usize, "{}", split);
                let lengths = assert_partition(&split, &reps);
                assert!(lengths.iter().all(|&len| len >= 1));
            }
        }
    }

    #[test]
    fn test_uncoverable_split_keeps_first_prime() {
        // Every admissible prime near n leaves a coset outside the domain.
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for &(n, m, p) in &[(6u64, 5u32, 31u64), (10, 9, 37), (12, 11, 67)] {
            let (split, reps) = Cycles::split_with_rng(n, m, &mut rng).unwrap();
            assert_eq!(split.p(), Some(p));
            assert_eq!(split.p(), Some(select_prime(n, split_modulus(m)).unwrap()));
            assert!(!split.fixed_points().is_empty());
            assert_eq!(reps.len(), m as usize);
            assert_partition(&split, &reps);
        }
    }

    #[test]
    fn test_fixed_points_map_to_themselves() {
        let (split, reps) = Cycles::split_with_rng(12, 11, &mut StdRng::seed_from_u64(5)).unwrap();
        let fixed = split.fixed_points();
        assert!(fixed.windows(2).all(|w| w[0] < w[1]));
        for &x in fixed {
            assert_eq!(split.apply(x), x);
            assert!(reps.contains(&x));
        }
        // Coset representatives come first, fixed points after them.
        let cosets = reps.len() - fixed.len();
        assert!(reps[..cosets].iter().all(|x| fixed.binary_search(x).is_err()));
    }

    #[test]
    fn test_split_into_singletons() {
        let (split, reps) = Cycles::split_with_rng(20, 20, &mut StdRng::seed_from_u64(2)).unwrap();
        let mut sorted = reps.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
        for x in 0..20 {
            assert_eq!(split.apply(x), x);
        }
    }

    #[test]
    fn test_covered_split_has_no_fixed_points() {
        let (split, _) = Cycles::new_split(100, 10).unwrap();
        assert!(split.fixed_points().is_empty());
    }

    #[test]
    fn test_single_split_is_full_cycle() {
        let (split, reps) = Cycles::new_split(1_000, 1).unwrap();
        assert_eq!(reps, vec![0]);
        let lengths = assert_partition(&split, &reps);
        assert_eq!(lengths, vec![1_000]);
    }

    #[test]
    fn test_large_split_lengths_are_bounded() {
        let mut rng = StdRng::seed_from_u64(12);
        let n = 1_000_000u64;
        let m = 16u32;
        let (split, reps) = Cycles::split_with_rng(n, m, &mut rng).unwrap();
        assert_eq!(reps.len(), 16);
        let lengths = assert_partition(&split, &reps);

        let p = split.p().unwrap();
        let coset_size = (p - 1) / u64::from(m);
        let outside = p - 1 - n;
        for len in lengths {
            assert!(len <= coset_size);
            assert!(len + outside >= coset_size);
        }
    }

    #[test]
    fn test_huge_split_sub_cycles_are_disjoint() {
        let n = 100_000_000_000u64;
        let (split, reps) = Cycles::new_split(n, 8).unwrap();
        assert_eq!(reps.len(), 8);
        let mut seen = HashSet::new();
        for &rep in &reps {
            for x in split.sub_cycle(rep).take(10_000) {
                assert!(x < n);
                assert!(seen.insert(x), "{} shared between sub-cycles of {}", x, split);
            }
        }
    }

    #[test]
    fn test_field_invariants() {
        let mut rng = StdRng::seed_from_u64(77);
        for &(n, m) in &[(1_000u64, 3u32), (5_000, 7), (20_000, 12)] {
            let (split, _) = Cycles::split_with_rng(n, m, &mut rng).unwrap();
            let p = split.p().unwrap();
            let g = split.g().unwrap();
            let r = split_modulus(m);
            assert!(p > n);
            assert!(is_prime(p));
            assert_eq!((p - 1) % r, 0);
            assert!(is_prime((p - 1) / r));
            // g has order exactly (p - 1) / m
            let order = (p - 1) / u64::from(m);
            assert_eq!(pow_mod(g, order, p), 1);
            for q in prime_factors(order) {
                assert_ne!(pow_mod(g, order / q, p), 1);
            }
        }
    }

    #[test]
    fn test_coset_representatives_one_per_coset() {
        // 131 = 10 * 13 + 1; find a primitive root by brute force.
        let p = 131;
        let g0 = (2..p - 1)
            .find(|&g| is_generator(g, p, 10, &[2, 5]))
            .unwrap();
        let reps = coset_representatives(100, 10, p, g0);
        assert_eq!(reps.len(), 10);
        let classes: HashSet<u64> = reps.iter().map(|&x| pow_mod(x + 1, 13, p)).collect();
        assert_eq!(classes.len(), 10);
    }

    #[test]
    fn test_trivial_splits() {
        for n in 1..=TRIVIAL_LIMIT {
            for m in 1..=n as u32 {
                let (split, reps) = Cycles::new_split(n, m).unwrap();
                assert!(split.is_trivial());
                assert_eq!(reps, (0..u64::from(m)).collect::<Vec<_>>());
                assert_partition(&split, &reps);
            }
        }
    }

    #[test]
    fn test_trivial_single_split_matches_successor() {
        let (split, reps) = Cycles::new_split(5, 1).unwrap();
        assert_eq!(reps, vec![0]);
        let seq: Vec<u64> = split.sub_cycle(0).collect();
        assert_eq!(seq, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_trivial_residue_classes() {
        let (split, _) = Cycles::new_split(5, 2).unwrap();
        assert_eq!(split.sub_cycle(0).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(split.sub_cycle(1).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            Cycles::new_split(0, 1).unwrap_err(),
            CycleError::EmptyDomain(EmptyDomainError)
        );
        assert_eq!(
            Cycles::new_split(10, 0).unwrap_err(),
            CycleError::InvalidSplit(InvalidSplitError::new(10, 0))
        );
        assert_eq!(
            Cycles::new_split(10, 11).unwrap_err(),
            CycleError::InvalidSplit(InvalidSplitError::new(10, 11))
        );
    }

    #[test]
    fn test_seeded_split_is_deterministic() {
        let a = Cycles::split_with_rng(50_000, 6, &mut ChaCha8Rng::seed_from_u64(4)).unwrap();
        let b = Cycles::split_with_rng(50_000, 6, &mut ChaCha8Rng::seed_from_u64(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let (split, _) = Cycles::new_split(4, 2).unwrap();
        assert_eq!(split.to_string(), "<Cycles n=4 m=2 (trivial)>");

        let (split, _) = Cycles::new_split(100, 10).unwrap();
        let text = split.to_string();
        assert!(text.starts_with("<Cycles n=100 m=10 p=131 g="), "{}", text);
    }
}
