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

use chrono::{DateTime, Utc};
use powercycle_core::prelude::{Cycle, CycleError, Cycles};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Debug, Clone)]
struct Cli {
    n: u64,
    splits: Option<u32>,
    seed: Option<u64>,
    take: usize,
    out: PathBuf,
}

fn parse_cli() -> Cli {
    let mut args = std::env::args().skip(1);

    let mut n: u64 = 1_000_000;
    let mut splits: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut take: usize = 10;
    let mut out = PathBuf::from("powercycle_run.json");

    while let Some(a) = args.next() {
        match a.as_str() {
            "--n" => n = args.next().and_then(|x| x.parse().ok()).unwrap_or(n),
            "--splits" | "-m" => splits = args.next().and_then(|x| x.parse().ok()),
            "--seed" => seed = args.next().and_then(|x| x.parse().ok()),
            "--take" => take = args.next().and_then(|x| x.parse().ok()).unwrap_or(take),
            "--out" => out = args.next().map(PathBuf::from).unwrap_or(out),
            other => tracing::warn!("Ignoring unknown argument {}", other),
        }
    }

    Cli {
        n,
        splits,
        seed,
        take,
        out,
    }
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Serialize)]
struct SubCycleRecord {
    representative: u64,
    prefix: Vec<u64>,
}

#[derive(Serialize)]
struct RunRecord {
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    construction_us: u128,
    n: u64,
    m: Option<u32>,
    seed: Option<u64>,
    description: String,
    p: Option<u64>,
    g: Option<u64>,
    prefix: Vec<u64>,
    sub_cycles: Vec<SubCycleRecord>,
}

fn run(cli: &Cli, rng: &mut ChaCha8Rng) -> Result<RunRecord, CycleError> {
    let start_ts = Utc::now();
    let t0 = Instant::now();

    let record = match cli.splits {
        None => {
            let cycle = Cycle::with_rng(cli.n, rng)?;
            let construction_us = t0.elapsed().as_micros();
            tracing::info!("Built {} in {}us", cycle, construction_us);

            let prefix: Vec<u64> = cycle.orbit(0).take(cli.take).collect();
            RunRecord {
                start_ts,
                end_ts: Utc::now(),
                construction_us,
                n: cli.n,
                m: None,
                seed: cli.seed,
                description: cycle.to_string(),
                p: cycle.p(),
                g: cycle.g(),
                prefix,
                sub_cycles: Vec::new(),
            }
        }
        Some(m) => {
            let (split, reps) = Cycles::split_with_rng(cli.n, m, rng)?;
            let construction_us = t0.elapsed().as_micros();
            tracing::info!(
                "Built {} with {} sub-cycle(s) in {}us",
                split,
                reps.len(),
                construction_us
            );

            let sub_cycles = reps
                .iter()
                .map(|&rep| SubCycleRecord {
                    representative: rep,
                    prefix: split.sub_cycle(rep).take(cli.take).collect(),
                })
                .collect();
            RunRecord {
                start_ts,
                end_ts: Utc::now(),
                construction_us,
                n: cli.n,
                m: Some(m),
                seed: cli.seed,
                description: split.to_string(),
                p: split.p(),
                g: split.g(),
                prefix: Vec::new(),
                sub_cycles,
            }
        }
    };
    Ok(record)
}

fn main() {
    enable_tracing();
    let cli = parse_cli();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let record = match run(&cli, &mut rng) {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("Construction failed for n={}: {}", cli.n, e);
            std::process::exit(1);
        }
    };

    if record.sub_cycles.is_empty() {
        println!("{}: {:?}", record.description, record.prefix);
    } else {
        println!("{}", record.description);
        for sub in &record.sub_cycles {
            println!("  from {}: {:?}", sub.representative, sub.prefix);
        }
    }

    match File::create(&cli.out).and_then(|mut f| {
        let json = serde_json::to_string_pretty(&record).map_err(std::io::Error::other)?;
        f.write_all(json.as_bytes())
    }) {
        Ok(()) => tracing::info!("Wrote run record to {}", cli.out.display()),
        Err(e) => tracing::error!("Failed to write {}: {}", cli.out.display(), e),
    }
}
