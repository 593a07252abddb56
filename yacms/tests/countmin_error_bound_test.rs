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

//! Statistical checks of the `2N / width` error bound.
//!
//! A single estimate may exceed the bound; across many independently seeded
//! sketches the fraction that does must stay below `(1/2)^depth`.

use std::collections::HashMap;

use googletest::assert_that;
use googletest::prelude::le;
use yacms::common::RandomSource;
use yacms::common::XorShift64;
use yacms::countmin::CountMinSketch;

const TRIALS: u64 = 100;
const DISTINCT_ITEMS: u64 = 1_000;
const STREAM_LEN: usize = 10_000;

/// Skewed stream: item `i` is drawn with weight roughly proportional to `1 / (i + 1)`.
fn skewed_stream(rng: &mut XorShift64) -> Vec<u64> {
    (0..STREAM_LEN)
        .map(|_| {
            let bucket = rng.next_in_range(1, DISTINCT_ITEMS);
            rng.next_in_range(0, bucket - 1)
        })
        .collect()
}

fn failure_rate(width: usize, depth: usize) -> f64 {
    let mut rng = XorShift64::seeded(0xC0FFEE);
    let mut queries = 0u64;
    let mut failures = 0u64;

    for trial in 0..TRIALS {
        let mut sketch = CountMinSketch::<u64>::with_seed(width, depth, trial + 1).unwrap();
        let mut exact: HashMap<u64, u64> = HashMap::new();
        for item in skewed_stream(&mut rng) {
            sketch.increment(item);
            *exact.entry(item).or_default() += 1;
        }

        let bound = sketch.error_bound();
        for (item, count) in &exact {
            let estimate = sketch.estimate(item);
            assert!(estimate >= *count, "undercount for {item}: {estimate} < {count}");
            queries += 1;
            if (estimate - count) as f64 > bound {
                failures += 1;
            }
        }
    }

    failures as f64 / queries as f64
}

#[test]
fn test_error_bound_holds_with_configured_probability() {
    for (width, depth) in [(64, 1), (100, 2), (256, 3)] {
        let sketch = CountMinSketch::<u64>::with_seed(width, depth, 0).unwrap();
        let rate = failure_rate(width, depth);
        assert_that!(rate, le(sketch.failure_probability()));
    }
}

#[test]
fn test_deeper_sketches_fail_less_often() {
    let shallow = failure_rate(32, 1);
    let deep = failure_rate(32, 4);
    assert_that!(deep, le(shallow));
}
