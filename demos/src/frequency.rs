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

use std::collections::HashMap;

/// Exact token counts, iterated in the order tokens were first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    order: Vec<String>,
    total: u64,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `token`.
    pub fn add(&mut self, token: &str, count: u64) {
        match self.counts.get_mut(token) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(token.to_string(), count);
                self.order.push(token.to_string());
            }
        }
        self.total += count;
    }

    /// Returns the exact count of `token`, zero if never seen.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns the number of distinct tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterates `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.order
            .iter()
            .map(|token| (token.as_str(), self.get(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let mut table = FrequencyTable::new();
        assert!(table.is_empty());
        for token in ["b", "a", "b", "c", "b"] {
            table.add(token, 1);
        }
        table.add("a", 4);

        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 9);
        assert_eq!(table.get("b"), 3);
        assert_eq!(table.get("a"), 5);
        assert_eq!(table.get("missing"), 0);
        let rows: Vec<_> = table.iter().collect();
        assert_eq!(rows, [("b", 3), ("a", 5), ("c", 1)]);
    }
}
