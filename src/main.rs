//! Benchmark driver: for each configured sequence length, generates one
//! random integer sequence and times every selected strategy on its own copy
//! of that same original input.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};

use sort_bench_rs::{patterns, sort, SortError, SortingType};

#[derive(Debug, Parser)]
#[command(version, about = "Benchmark classic sorting algorithms on random integer sequences")]
struct Args {
    /// Comma separated sequence lengths to benchmark.
    #[arg(long, default_value = "10,1000,10000,50000")]
    sizes: String,

    /// Comma separated strategy labels (bubble, shell, merge, quick).
    /// Runs all four when omitted.
    #[arg(long)]
    algos: Option<String>,

    /// Seed for the sequence generator. Defaults to the process master seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print at most this many leading elements of each sorted result.
    #[arg(long, default_value_t = 50)]
    preview: usize,
}

fn parse_sizes(raw: &str) -> Result<Vec<usize>, SortError> {
    let sizes: Vec<usize> = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().map_err(|_| SortError::InvalidInput))
        .collect::<Result<_, _>>()?;

    if sizes.is_empty() {
        return Err(SortError::InvalidInput);
    }
    Ok(sizes)
}

fn parse_algos(raw: Option<&str>) -> Result<Vec<SortingType>, SortError> {
    let Some(raw) = raw else {
        return Ok(SortingType::ALL.to_vec());
    };

    let algos: Vec<SortingType> = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()?;

    if algos.is_empty() {
        return Err(SortError::InvalidInput);
    }
    Ok(algos)
}

fn preview(sorted: &[i32], limit: usize) -> String {
    if sorted.len() <= limit {
        format!("sorted: {sorted:?}")
    } else {
        format!("first {} sorted elements: {:?}", limit, &sorted[..limit])
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let sizes = parse_sizes(&args.sizes).context("invalid --sizes")?;
    let algos = parse_algos(args.algos.as_deref()).context("invalid --algos")?;
    let seed = args.seed.unwrap_or_else(patterns::master_seed);

    info!("generator seed: {seed}");

    for (run, size) in sizes.into_iter().enumerate() {
        println!("\n[ sequence length: {size} ]");

        // One original input per size; every strategy sorts its own copy of
        // this same sequence, never a previous strategy's output.
        let input = patterns::random_uniform(size, seed.wrapping_add(run as u64));

        for &ty in &algos {
            let start = Instant::now();
            let sorted = sort(ty, &input);
            let elapsed = start.elapsed();

            debug!("{ty}: {elapsed:?} for {size} elements");
            println!("{:<8} {:>12.3} ms", ty.label(), elapsed.as_secs_f64() * 1e3);

            if !sorted.windows(2).all(|w| w[0] <= w[1]) {
                bail!("{ty} produced an unsorted result for length {size}");
            }
            println!("    {}", preview(&sorted, args.preview));
        }
    }

    Ok(())
}
