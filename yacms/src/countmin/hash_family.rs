// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Carter-Wegman universal hash family `h(x) = ((a * x + b) mod p) mod w`.

use crate::common::RandomSource;

/// Modulus of the hash family, the Mersenne prime `2^31 - 1`.
pub(super) const MERSENNE_PRIME: u64 = (1 << 31) - 1;

/// Parameters `(a, b)` of one row's hash function.
///
/// Both lie in `[1, p - 1]` where `p` is [`MERSENNE_PRIME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    a: u64,
    b: u64,
}

impl HashParams {
    /// Draws `a` then `b` uniformly from `[1, p - 1]`.
    fn draw<R: RandomSource>(rng: &mut R) -> Self {
        let a = rng.next_in_range(1, MERSENNE_PRIME - 1);
        let b = rng.next_in_range(1, MERSENNE_PRIME - 1);
        Self { a, b }
    }

    /// Returns the multiplier `a`.
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Returns the offset `b`.
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Maps a digest to a slot in `[0, width)`.
    ///
    /// The digest is reduced modulo `p` first; the affine map is taken modulo
    /// `p` anyway, so the slot is unchanged and `a * x + b < 2^63`.
    #[inline]
    pub(super) fn slot(&self, digest: u64, width: usize) -> usize {
        let x = digest % MERSENNE_PRIME;
        let h = (self.a * x + self.b) % MERSENNE_PRIME;
        (h % width as u64) as usize
    }
}

/// Generates one parameter pair per row, consuming `2 * depth` random values.
pub(super) fn generate<R: RandomSource>(depth: usize, rng: &mut R) -> Vec<HashParams> {
    (0..depth).map(|_| HashParams::draw(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::XorShift64;

    struct Sequence(Vec<u64>);

    impl RandomSource for Sequence {
        fn next_u64(&mut self) -> u64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_params_drawn_in_row_order() {
        // next_in_range(1, p - 1) maps v to 1 + v % (p - 1).
        let mut rng = Sequence(vec![0, 1, 2, 3]);
        let params = generate(2, &mut rng);
        assert_eq!(params[0], HashParams { a: 1, b: 2 });
        assert_eq!(params[1], HashParams { a: 3, b: 4 });
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_params_within_open_range() {
        let mut rng = XorShift64::seeded(11);
        for params in generate(1_000, &mut rng) {
            assert!(params.a() > 0 && params.a() < MERSENNE_PRIME);
            assert!(params.b() > 0 && params.b() < MERSENNE_PRIME);
        }
    }

    #[test]
    fn test_slot_matches_affine_formula() {
        let params = HashParams { a: 3, b: 5 };
        // (3 * 10 + 5) mod p mod 7 = 35 mod 7
        assert_eq!(params.slot(10, 7), 0);
        assert_eq!(params.slot(11, 7), 3);
        // digest above p wraps: (p + 10) behaves as 10
        assert_eq!(params.slot(MERSENNE_PRIME + 10, 7), 0);
    }

    #[test]
    fn test_slot_handles_extreme_parameters() {
        let params = HashParams {
            a: MERSENNE_PRIME - 1,
            b: MERSENNE_PRIME - 1,
        };
        let slot = params.slot(u64::MAX, 1024);
        assert!(slot < 1024);
        assert_eq!(params.slot(u64::MAX, 1), 0);
    }
}
