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

//! Word-frequency demonstration for the Count-Min sketch.
//!
//! Tokenizes text, counts every token both exactly and with a sketch, and
//! renders one comparison line per distinct token.

mod frequency;
mod tokenize;

pub use self::frequency::FrequencyTable;
pub use self::tokenize::Tokens;
pub use self::tokenize::tokenize;

use yacms::countmin::CountMinSketch;

/// Feeds every token of `text` into `sketch` with a count of one, returning the exact counts.
pub fn count_words(text: &str, sketch: &mut CountMinSketch<u64>) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokenize(text) {
        table.add(token, 1);
        sketch.increment(token);
    }
    table
}

/// Formats the comparison line for one token.
pub fn report_line(token: &str, exact: u64, estimate: u64) -> String {
    format!("'{token}' counter: {exact}, sketch: {estimate}")
}

/// Renders one comparison line per distinct token, in first-seen order.
pub fn report(table: &FrequencyTable, sketch: &CountMinSketch<u64>) -> Vec<String> {
    table
        .iter()
        .map(|(token, exact)| report_line(token, exact, sketch.estimate(token)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_format() {
        assert_eq!(report_line("the", 3, 4), "'the' counter: 3, sketch: 4");
    }

    #[test]
    fn test_count_words_tracks_both_counts() {
        let mut sketch = CountMinSketch::<u64>::with_seed(1024, 3, 7).unwrap();
        let table = count_words("the cat and the hat, the end", &mut sketch);

        assert_eq!(table.get("the"), 3);
        assert_eq!(table.total(), 7);
        assert_eq!(sketch.total_count(), 7);

        let lines = report(&table, &sketch);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("'the' counter: 3, sketch: "));
        for (token, exact) in table.iter() {
            assert!(sketch.estimate(token) >= exact);
        }
    }
}
