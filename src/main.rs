//! Command-line front end: multiply two matrix files across N threads.
//!
//! ```text
//! parmul <matrix-a-file> <matrix-b-file> <number-of-threads>
//! ```
//!
//! The result is printed to stdout in the same text format the inputs
//! use; errors go to stderr and the exit status is non-zero.

use std::env;
use std::io;
use std::process;

use parmul::io::{parse_worker_count, read_matrix, write_matrix};
use parmul::{Result, parallel_multiply};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        let program = args.first().map_or("parmul", String::as_str);
        eprintln!("Usage: {program} <matrix-a-file> <matrix-b-file> <number-of-threads>");
        process::exit(1);
    }

    if let Err(error) = run(&args[1], &args[2], &args[3]) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(a_path: &str, b_path: &str, workers: &str) -> Result<()> {
    let a = read_matrix(a_path)?;
    let b = read_matrix(b_path)?;
    let worker_count = parse_worker_count(workers)?;

    let result = parallel_multiply(&a, &b, worker_count)?;

    let stdout = io::stdout();
    write_matrix(&mut stdout.lock(), &result)
}
