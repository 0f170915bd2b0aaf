//! Sorts a small integer sequence and prints it before and after.

use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sort::{SortAlgorithm, merge_sort, quick_sort, quick_sort_with_rng};
use tracing_subscriber::EnvFilter;

const DEFAULT_VALUES: [i64; 10] = [9, 8, 7, 6, 5, 1, 2, 3, 4, 0];

#[derive(Debug, Parser)]
#[command(name = "sort_demo", about = "Sort integers and print them before and after")]
struct Args {
    /// `merge_sort` or `quick_sort`.
    #[arg(short, long, default_value_t = SortAlgorithm::QuickSort)]
    algorithm: SortAlgorithm,

    /// Seeds quick sort pivot selection for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// First index of the quick sort range.
    #[arg(long)]
    start: Option<usize>,

    /// Last index (inclusive) of the quick sort range.
    #[arg(long)]
    end: Option<usize>,

    /// Values to sort. Defaults to 9 8 7 6 5 1 2 3 4 0.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let input = if args.values.is_empty() {
        DEFAULT_VALUES.to_vec()
    } else {
        args.values.clone()
    };

    tracing::info!(algorithm = %args.algorithm, len = input.len(), "sorting");
    println!("{input:?}");

    match run(&args, &input) {
        Ok(sorted) => {
            println!("{sorted:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "sort failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, input: &[i64]) -> sort::Result<Vec<i64>> {
    match args.algorithm {
        SortAlgorithm::MergeSort => Ok(merge_sort(input)),
        SortAlgorithm::QuickSort => {
            let mut data = input.to_vec();
            let Some(last) = data.len().checked_sub(1) else {
                return Ok(data);
            };
            let start = args.start.unwrap_or(0);
            let end = args.end.unwrap_or(last);

            match args.seed {
                Some(seed) => {
                    quick_sort_with_rng(&mut data, start, end, &mut StdRng::seed_from_u64(seed))?
                }
                None => quick_sort(&mut data, start, end)?,
            }
            Ok(data)
        }
    }
}
