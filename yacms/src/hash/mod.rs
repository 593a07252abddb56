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

//! Element digests.
//!
//! Every element handed to a sketch is first reduced to a 64-bit digest with
//! MurmurHash3 (x64, 128-bit variant). The hasher is seeded with a constant, so
//! the same value yields the same digest in every sketch and every process.

use std::hash::Hash;

/// Seed used for element digests.
pub const DEFAULT_UPDATE_SEED: u32 = 9001;

/// Returns the 64-bit digest of `item`.
///
/// Types whose [`Hash`] impls agree (e.g. `str` and `String`) digest equally.
pub fn digest<T: Hash + ?Sized>(item: &T) -> u64 {
    let mut hasher = mur3::Hasher128::with_seed(DEFAULT_UPDATE_SEED);
    item.hash(&mut hasher);
    let (h1, _) = hasher.finish128();
    h1
}
