//! Compare integer-parsing strategies.
//!
//! Four ways to turn the same decimal string into a `u64`, measured
//! head to head:
//!
//! ```text
//! cargo run --release --example parse_ints
//! cargo run --release --example parse_ints -- --count 200000 --unit ns
//! cargo run --release --example parse_ints -- --export target/parse
//! ```

use anyhow::Result;
use clap::Parser;
use lapbench::prelude::*;
use std::hint::black_box;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parse_ints", about = "lapbench demo: integer parsing strategies")]
struct Args {
    /// Iterations per test
    #[arg(long, default_value = "1000000")]
    count: u64,

    /// Display unit: ns, us, ms, s
    #[arg(long, default_value = "us")]
    unit: TimeUnit,

    /// Decimal places in the tables
    #[arg(long, default_value = "2")]
    precision: usize,

    /// Write per-test summary and distribution files under this base path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Log each finished test as it completes
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("lapbench_core=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("lapbench_core=info")
            .init();
    }

    let digits = "1846577093";

    let tests = vec![
        Test::new("str_parse", move || {
            black_box(digits.parse::<u64>().unwrap());
        }),
        Test::new("from_str_radix", move || {
            black_box(u64::from_str_radix(digits, 10).unwrap());
        }),
        Test::new("byte_fold", move || {
            let n = digits
                .bytes()
                .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
            black_box(n);
        }),
        Test::new("wrapping_loop", move || {
            let mut n: u64 = 0;
            for b in digits.bytes() {
                n = n.wrapping_mul(10).wrapping_add(u64::from(b - b'0'));
            }
            black_box(n);
        }),
    ];

    let runtimes = lapbench::time(args.count, tests);
    let opts = FormatOptions {
        precision: args.precision,
        ..Default::default()
    };

    println!("runtimes in {}:", args.unit.label());
    print!("{}", format_runtimes(&runtimes, args.unit, &opts));

    let comparisons = lapbench::compare(&runtimes)?;
    println!();
    print!("{}", format_comparisons(&comparisons, args.unit, &opts));

    if let Some(base) = args.export {
        write_results(&base, &runtimes, args.unit, &ExportOptions::default())?;
        println!();
        println!("results written under {}", base.display());
    }

    Ok(())
}
