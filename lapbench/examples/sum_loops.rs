//! Compare three ways to sum a vector.
//!
//! ```text
//! cargo run --release --example sum_loops
//! ```

use anyhow::Result;
use lapbench::prelude::*;
use std::hint::black_box;

fn main() -> Result<()> {
    let data: Vec<u64> = (0..4096).collect();
    let (by_sum, by_fold, by_index) = (data.clone(), data.clone(), data);

    let runtimes = lapbench::time(
        100_000,
        vec![
            Test::new("iter_sum", move || {
                black_box(by_sum.iter().sum::<u64>());
            }),
            Test::new("iter_fold", move || {
                black_box(by_fold.iter().fold(0u64, |acc, x| acc + x));
            }),
            Test::new("index_loop", move || {
                let mut acc = 0u64;
                for i in 0..by_index.len() {
                    acc += by_index[i];
                }
                black_box(acc);
            }),
        ],
    );

    let opts = FormatOptions::default();
    print!("{}", format_runtimes(&runtimes, TimeUnit::Micros, &opts));

    let comparisons = lapbench::compare(&runtimes)?;
    println!();
    print!("{}", format_comparisons(&comparisons, TimeUnit::Micros, &opts));

    println!();
    println!("runtimes in milliseconds:");
    print!("{}", format_comparisons(&comparisons, TimeUnit::Millis, &opts));

    Ok(())
}
