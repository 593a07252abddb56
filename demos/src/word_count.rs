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

//! Compares exact word counts of a text file against Count-Min estimates.
//!
//! ```text
//! word_count ideal_hash.txt --width 1024 --depth 3
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use yacms::countmin::CountMinSketch;

#[derive(Debug, Parser)]
#[command(about = "Compare exact word counts with Count-Min sketch estimates")]
struct Args {
    /// UTF-8 text file to count.
    path: PathBuf,

    /// Counters per sketch row.
    #[arg(long, default_value_t = 1024)]
    width: usize,

    /// Number of sketch rows.
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Seed for the hash parameters; entropy-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;

    let mut sketch = match args.seed {
        Some(seed) => CountMinSketch::<u64>::with_seed(args.width, args.depth, seed)?,
        None => CountMinSketch::<u64>::new(args.width, args.depth)?,
    };

    let table = demos::count_words(&text, &mut sketch);
    log::info!(
        "counted {} tokens, {} distinct; error bound {:.2} with probability {:.4}",
        table.total(),
        table.len(),
        sketch.error_bound(),
        1.0 - sketch.failure_probability()
    );

    for line in demos::report(&table, &sketch) {
        println!("{line}");
    }
    Ok(())
}
