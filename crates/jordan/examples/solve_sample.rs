//! Step-by-step elimination of a 4×4 system.
//!
//! Prints every intermediate matrix, then the verdict, in both numeric modes.
//!
//! Run with: cargo run --example solve_sample [rational|float]
//! Set `RUST_LOG=jordan=debug` to see the engine's own logging.

use jordan::prelude::*;
use tracing_subscriber::EnvFilter;

const SAMPLE: [[&str; 5]; 4] = [
    ["4", "3", "2", "-1", "4"],
    ["5", "4", "3", "-1", "4"],
    ["-2", "-2", "-1", "2", "-3"],
    ["11", "6", "4", "1", "11"],
];

fn print_report(report: &Report) {
    println!("=== {} mode ===", report.mode);
    for (k, step) in report.steps.iter().enumerate() {
        println!("{k:>2}. {}", step.description());
        for row in step.snapshot().as_dense().rows() {
            let (coefficients, constant) = row.split_at(row.len() - 1);
            let left: Vec<String> =
                coefficients.iter().map(|v| format!("{:>8}", v.format())).collect();
            println!("    [{} | {:>8}]", left.join(" "), constant[0].format());
        }
    }
    println!("{}", report.verdict());
    for line in report.solution_lines() {
        println!("  {line}");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let rows: Vec<Vec<&str>> = SAMPLE.iter().map(|r| r.to_vec()).collect();

    let modes = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<NumericMode>() {
            Ok(mode) => vec![mode],
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
        None => vec![NumericMode::Rational, NumericMode::Float],
    };

    for mode in modes {
        let config = SolverConfig::default().with_mode(mode);
        match solve(&rows, &config) {
            Ok(report) => print_report(&report),
            Err(err) => eprintln!("{mode}: {err}"),
        }
    }

    let strict = SolverConfig::default().with_policy(ClassificationPolicy::RankAware);
    match solve(&rows, &strict) {
        Ok(report) => println!("rank-aware: {}", report.verdict()),
        Err(err) => eprintln!("rank-aware: {err}"),
    }
}
