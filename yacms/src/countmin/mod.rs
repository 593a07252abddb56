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

//! Count-Min sketch implementation for frequency estimation.
//!
//! The Count-Min sketch provides approximate frequency counts for streaming data
//! in `width * depth` counters. Estimates never undercount when all updates are
//! non-negative, and overcount by at most `2N / width` with probability at least
//! `1 - (1/2)^depth`.
//!
//! Based on Cormode and Muthukrishnan, "Approximating data with the count-min
//! data structure", IEEE Software (2012). Rows hash with the Carter-Wegman
//! family `((a * x + b) mod p) mod width`, `p = 2^31 - 1`.
//!
//! # Usage
//!
//! ```rust
//! use yacms::countmin::CountMinSketch;
//!
//! let mut sketch = CountMinSketch::<u64>::new(256, 5).unwrap();
//!
//! sketch.increment("apple");
//! sketch.update("banana", 3);
//!
//! let banana = sketch.estimate("banana");
//! assert!(banana >= 3);
//! assert!(sketch.error_bound() >= 0.0);
//! ```
//!
//! # Configuration Helpers
//!
//! ```rust
//! use yacms::countmin::CountMinSketch;
//!
//! let width = CountMinSketch::<u64>::suggest_width(0.01).unwrap();
//! let depth = CountMinSketch::<u64>::suggest_depth(0.99).unwrap();
//!
//! let _sketch = CountMinSketch::<u64>::new(width, depth).unwrap();
//! ```
//!
//! # Reproducible Sketches
//!
//! ```rust
//! use yacms::countmin::CountMinSketch;
//!
//! let left = CountMinSketch::<u64>::with_seed(64, 3, 42).unwrap();
//! let right = CountMinSketch::<u64>::with_seed(64, 3, 42).unwrap();
//! assert_eq!(left.hash_params(), right.hash_params());
//! ```

mod hash_family;

mod sketch;
pub use self::hash_family::HashParams;
pub use self::sketch::CountMinSketch;
pub use self::sketch::CountMinValue;
