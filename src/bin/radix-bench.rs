use std::time::Instant;

use anyhow::{Result, ensure};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::slice::ParallelSliceMut;

use par_radix_sort::parallel_sort_range;

/// Benchmark the parallel radix sort against rayon's comparison sort.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Timed iterations per round
    #[arg(short, long, default_value_t = 20)]
    iterations: usize,

    /// Smallest array length
    #[arg(long, default_value_t = 90_000_000)]
    min_len: usize,

    /// Largest array length
    #[arg(long, default_value_t = 100_000_000)]
    max_len: usize,

    /// Exclusive upper bound for generated values
    #[arg(long, default_value_t = 1000)]
    max_value: i32,

    /// Largest random trim off the front of the range
    #[arg(long, default_value_t = 1313)]
    max_from: usize,

    /// Largest random trim off the back of the range
    #[arg(long, default_value_t = 1711)]
    max_skip: usize,

    /// RNG seed
    #[arg(long, default_value_t = 13)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    eprintln!("Warming up benchmark 1...");
    run_round(&args, &mut rng, false, false)?;
    eprintln!("Warming up benchmark 2...");
    run_round(&args, &mut rng, true, false)?;
    eprintln!("Benchmarking 1...");
    run_round(&args, &mut rng, false, true)?;
    eprintln!("Benchmarking 2...");
    run_round(&args, &mut rng, true, true)?;
    eprintln!("Benchmark done!");

    Ok(())
}

/// One benchmark round: random-length arrays with random range trims,
/// sorted both ways, timed and checked for agreement. `constant` swaps
/// the random fill for an all-zero one, the original's degenerate case.
fn run_round(args: &Args, rng: &mut StdRng, constant: bool, print: bool) -> Result<()> {
    let mut total_comparison_ms = 0u128;
    let mut total_radix_ms = 0u128;

    for _ in 0..args.iterations {
        let len = rng.gen_range(args.min_len..=args.max_len);
        let mut comparison_sorted: Vec<i32> = if constant {
            vec![0; len]
        } else {
            (0..len).map(|_| rng.gen_range(0..args.max_value)).collect()
        };
        let mut radix_sorted = comparison_sorted.clone();

        let from = rng.gen_range(0..=args.max_from.min(len));
        let to = len - rng.gen_range(0..=args.max_skip.min(len - from));

        let start = Instant::now();
        comparison_sorted[from..to].par_sort_unstable();
        let comparison_ms = start.elapsed().as_millis();
        total_comparison_ms += comparison_ms;

        let start = Instant::now();
        parallel_sort_range(&mut radix_sorted, from, to)?;
        let radix_ms = start.elapsed().as_millis();
        total_radix_ms += radix_ms;

        let agreed = comparison_sorted == radix_sorted;
        if print {
            eprintln!(
                "par_sort_unstable: {comparison_ms} ms, parallel_sort_range: {radix_ms} ms, \
                 agreed: {agreed}"
            );
        }
        ensure!(agreed, "radix sort disagreed with the comparison sort");
    }

    if print {
        eprintln!(
            "Total par_sort_unstable: {total_comparison_ms} ms, \
             total parallel_sort_range: {total_radix_ms} ms"
        );
    }

    Ok(())
}
