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

//! Yet another Count-Min Sketch.
//!
//! A Count-Min sketch estimates how often each element occurs in a stream using
//! a fixed grid of counters, trading exactness for bounded, one-sided error.
//!
//! - [`countmin::CountMinSketch`] is the sketch itself.
//! - [`common::RandomSource`] lets callers supply the randomness for hash
//!   parameters, e.g. a fixed seed in tests.
//! - [`hash::digest`] reduces any [`Hash`](std::hash::Hash) value to the 64-bit
//!   digest the sketch hashes.

pub mod common;
pub mod countmin;
pub mod error;
pub mod hash;
