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

use std::fmt;
use std::hash::Hash;

use crate::common::RandomSource;
use crate::common::XorShift64;
use crate::countmin::hash_family;
use crate::countmin::hash_family::HashParams;
use crate::error::Error;
use crate::hash::digest;

/// Integer types usable as Count-Min counters.
///
/// All arithmetic on counters and the running total saturates at the bounds of
/// the type instead of wrapping.
pub trait CountMinValue: Copy + Ord + fmt::Debug + 'static {
    /// The additive identity.
    const ZERO: Self;
    /// The unit increment.
    const ONE: Self;
    /// The largest representable value.
    const MAX: Self;

    /// Adds two values, clamping at the numeric bounds.
    fn saturating_add(self, other: Self) -> Self;

    /// Converts to f64 for bound computations.
    fn as_f64(self) -> f64;
}

macro_rules! impl_count_min_value {
    ($($name:ty),*) => {
        $(
            impl CountMinValue for $name {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$name>::MAX;

                #[inline(always)]
                fn saturating_add(self, other: Self) -> Self {
                    <$name>::saturating_add(self, other)
                }

                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_count_min_value!(u32, u64, i32, i64);

/// Count-Min sketch for approximate frequency counting.
///
/// The sketch keeps `depth` rows of `width` counters. Each row owns a hash
/// function from a pairwise-independent family; an update adds its delta to
/// one counter per row and an estimate takes the minimum of those counters.
///
/// With non-negative updates the estimate never falls below the true count, and
/// exceeds it by at most `2N / width` with probability at least
/// `1 - (1/2)^depth`, where `N` is the total of all updates.
///
/// Signed counter types accept negative deltas. The lower guarantee no longer
/// holds once a decrement has been applied.
#[derive(Clone, PartialEq, Eq)]
pub struct CountMinSketch<T: CountMinValue = u64> {
    width: usize,
    depth: usize,
    hash_params: Vec<HashParams>,
    // Row-major, `depth * width` entries.
    counters: Vec<T>,
    total_count: T,
}

impl<T: CountMinValue> CountMinSketch<T> {
    /// Creates a sketch with hash parameters drawn from an entropy-seeded
    /// generator.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidParameter`](crate::error::ErrorKind::InvalidParameter)
    /// if `width` or `depth` is zero, or if the counter grid does not fit in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yacms::countmin::CountMinSketch;
    /// let sketch = CountMinSketch::<u64>::new(1024, 3).unwrap();
    /// assert_eq!(sketch.width(), 1024);
    /// assert_eq!(sketch.depth(), 3);
    /// assert!(CountMinSketch::<u64>::new(0, 3).is_err());
    /// ```
    pub fn new(width: usize, depth: usize) -> Result<Self, Error> {
        Self::with_rng(width, depth, &mut XorShift64::default())
    }

    /// Creates a sketch whose hash parameters are derived from `seed`.
    ///
    /// Two sketches built with the same dimensions and seed hash identically.
    pub fn with_seed(width: usize, depth: usize, seed: u64) -> Result<Self, Error> {
        Self::with_rng(width, depth, &mut XorShift64::seeded(seed))
    }

    /// Creates a sketch drawing its hash parameters from `rng`.
    ///
    /// Exactly `2 * depth` values are taken from `rng`: `a` then `b` for each row.
    pub fn with_rng<R: RandomSource>(width: usize, depth: usize, rng: &mut R) -> Result<Self, Error> {
        if width == 0 {
            return Err(Error::invalid_parameter("width must be positive")
                .with_context("width", width)
                .with_context("depth", depth));
        }
        if depth == 0 {
            return Err(Error::invalid_parameter("depth must be positive")
                .with_context("width", width)
                .with_context("depth", depth));
        }
        let num_counters = width
            .checked_mul(depth)
            .filter(|n| {
                n.checked_mul(size_of::<T>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| {
                Error::invalid_parameter("counter grid exceeds addressable memory")
                    .with_context("width", width)
                    .with_context("depth", depth)
            })?;

        let hash_params = hash_family::generate(depth, rng);
        log::debug!("count-min sketch created: width={width}, depth={depth}");

        Ok(Self {
            width,
            depth,
            hash_params,
            counters: vec![T::ZERO; num_counters],
            total_count: T::ZERO,
        })
    }

    /// Returns the number of counters per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows (hash functions).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the sum of all deltas applied so far.
    pub fn total_count(&self) -> T {
        self.total_count
    }

    /// Returns true if the running total is zero, as it is before any update.
    pub fn is_empty(&self) -> bool {
        self.total_count == T::ZERO
    }

    /// Returns the hash parameters, one pair per row.
    pub fn hash_params(&self) -> &[HashParams] {
        &self.hash_params
    }

    /// Applies the hash function of `row` to `item`, returning a slot in `[0, width)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= depth`.
    pub fn hash<H: Hash>(&self, row: usize, item: H) -> usize {
        self.hash_params[row].slot(digest(&item), self.width)
    }

    /// Adds one occurrence of `item`.
    pub fn increment<H: Hash>(&mut self, item: H) {
        self.update(item, T::ONE);
    }

    /// Adds `delta` occurrences of `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yacms::countmin::CountMinSketch;
    /// let mut sketch = CountMinSketch::<u64>::new(1024, 3).unwrap();
    /// sketch.update("the", 5);
    /// sketch.update("the", 3);
    /// assert!(sketch.estimate("the") >= 8);
    /// assert_eq!(sketch.total_count(), 8);
    /// ```
    pub fn update<H: Hash>(&mut self, item: H, delta: T) {
        let key = digest(&item);
        self.total_count = self.total_count.saturating_add(delta);
        for (row, params) in self.hash_params.iter().enumerate() {
            let index = row * self.width + params.slot(key, self.width);
            self.counters[index] = self.counters[index].saturating_add(delta);
        }
    }

    /// Returns the estimated count of `item`: the minimum of its counters across rows.
    pub fn estimate<H: Hash>(&self, item: H) -> T {
        let key = digest(&item);
        self.hash_params
            .iter()
            .enumerate()
            .map(|(row, params)| self.counters[row * self.width + params.slot(key, self.width)])
            .fold(T::MAX, |min, count| min.min(count))
    }

    /// Returns the relative error `2 / width`.
    pub fn relative_error(&self) -> f64 {
        2.0 / self.width as f64
    }

    /// Returns the probability `(1/2)^depth` that an estimate exceeds the error bound.
    pub fn failure_probability(&self) -> f64 {
        0.5f64.powi(self.depth.min(i32::MAX as usize) as i32)
    }

    /// Returns the additive error bound `2N / width` for the current total `N`.
    pub fn error_bound(&self) -> f64 {
        2.0 * self.total_count.as_f64() / self.width as f64
    }

    /// Suggests the width giving the requested relative error.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < relative_error < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yacms::countmin::CountMinSketch;
    /// assert_eq!(CountMinSketch::<u64>::suggest_width(0.01).unwrap(), 200);
    /// ```
    pub fn suggest_width(relative_error: f64) -> Result<usize, Error> {
        if !(relative_error > 0.0 && relative_error < 1.0) {
            return Err(Error::invalid_parameter("relative error must be in (0, 1)")
                .with_context("relative_error", relative_error));
        }
        Ok((2.0 / relative_error).ceil() as usize)
    }

    /// Suggests the depth giving at least the requested confidence.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < confidence < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yacms::countmin::CountMinSketch;
    /// assert_eq!(CountMinSketch::<u64>::suggest_depth(0.875).unwrap(), 3);
    /// ```
    pub fn suggest_depth(confidence: f64) -> Result<usize, Error> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(Error::invalid_parameter("confidence must be in (0, 1)")
                .with_context("confidence", confidence));
        }
        let depth = (1.0 / (1.0 - confidence)).log2().ceil() as usize;
        Ok(depth.max(1))
    }

    #[cfg(test)]
    fn row(&self, row: usize) -> &[T] {
        &self.counters[row * self.width..(row + 1) * self.width]
    }
}

impl<T: CountMinValue> fmt::Debug for CountMinSketch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountMinSketch")
            .field("width", &self.width)
            .field("depth", &self.depth)
            .field("total_count", &self.total_count)
            .field("hash_params", &self.hash_params)
            .finish_non_exhaustive()
    }
}
