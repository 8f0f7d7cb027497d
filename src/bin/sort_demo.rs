use std::error::Error;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use classic_sorts::{binary_search, bubble_sort, insertion_sort, merge_sort, quick_sort, SortError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SAMPLES: [&[i32]; 3] = [
    &[64, 34, 25, 12, 22, 11, 90],
    &[5, 2, 8, 1, 9, 4, 3, 7, 6],
    &[12, 11, 13, 5, 6, 7, 2, 19, 4],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    const SORTS: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    fn try_sort(self, v: Option<&mut [i32]>) -> Result<(), SortError> {
        match self {
            Algorithm::Bubble => bubble_sort::try_sort(v),
            Algorithm::Insertion => insertion_sort::try_sort(v),
            Algorithm::Merge => merge_sort::try_sort(v),
            Algorithm::Quick => quick_sort::try_sort(v),
        }
    }
}

/// Sorts integer arrays with the classic algorithms and prints before/after snapshots.
#[derive(Parser, Debug)]
#[command(name = "sort_demo", version, about)]
struct Cli {
    /// Values to sort. The built-in sample arrays are used when none are given.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Algorithm to run. Every sort runs when omitted.
    #[arg(long, short, value_enum)]
    algorithm: Option<Algorithm>,

    /// Binary search the sorted result for this value.
    #[arg(long, short, allow_negative_numbers = true)]
    search: Option<i32>,

    /// Pass an absent sequence to the checked entry points and print the errors.
    #[arg(long)]
    absent: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sort_demo=info")),
        )
        .init();

    let cli = Cli::parse();
    let algorithms = cli
        .algorithm
        .map_or_else(|| Algorithm::SORTS.to_vec(), |algorithm| vec![algorithm]);

    if cli.absent {
        for algorithm in algorithms {
            match algorithm.try_sort(None) {
                Ok(()) => println!("{:>10}: accepted absent input", algorithm.name()),
                Err(err) => println!("{:>10}: {err}", algorithm.name()),
            }
        }

        if let Err(err) = binary_search::try_search::<i32>(None, &0) {
            println!("{:>10}: {err}", "search");
        }

        return Ok(());
    }

    let inputs: Vec<Vec<i32>> = if cli.values.is_empty() {
        SAMPLES.iter().map(|sample| sample.to_vec()).collect()
    } else {
        vec![cli.values.clone()]
    };

    for input in &inputs {
        println!("{:>10}: {input:?}", "before");

        for &algorithm in &algorithms {
            let mut data = input.clone();

            let start = Instant::now();
            algorithm.try_sort(Some(data.as_mut_slice()))?;
            let elapsed = start.elapsed();

            debug!(algorithm = algorithm.name(), len = data.len(), ?elapsed, "sorted");
            println!("{:>10}: {data:?} ({elapsed:?})", algorithm.name());

            if let Some(target) = cli.search {
                match binary_search::search(&data, &target) {
                    Some(index) => println!("{:>10}  found {target} at index {index}", ""),
                    None => println!("{:>10}  {target} not found", ""),
                }
            }
        }

        println!();
    }

    Ok(())
}
