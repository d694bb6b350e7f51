//! VTRIAD - Vector Triad bandwidth sweep
//!
//! # About
//! VTRIAD measures the sustained floating-point throughput of the Schönauer vector triad
//! `d[i] = a[i] + b[i] * c[i]` over a logarithmic sweep of array sizes. As the working set grows
//! past each level of the memory hierarchy (caches, TLB, DRAM), the throughput of this
//! memory-bound kernel drops, which makes the transition points visible.
//!
//! Each array size is measured under three execution modes:
//! - single-threaded, in index order (scalar)
//! - parallel with one contiguous block per worker thread (static)
//! - parallel with chunks handed out to idle worker threads (dynamic)
//!
//! See <https://blogs.fau.de/hager/archives/tag/benchmarking> for background on the triad.
//!
//! # Quickstart
//! ## Build
//! As any Rust-based project, VTRIAD is built and run with `cargo`:
//! ```sh
//! cargo build --release
//! ```
//!
//! ## Example run
//! Without arguments, VTRIAD sweeps 41 sizes from 1000 to 10^8 elements, 8 per decade:
//! ```sh
//! cargo run --release
//!
//! # nthreads=8
//! #        N   S_GFlops/s  P_GFlops/s  Pd_GFlops/s
//!       1000      1.742      0.201      0.132
//!       1333      1.755      0.262      0.179
//! ...
//! ```
//!
//! The number of worker threads is taken from `RAYON_NUM_THREADS` (or `--threads`), and log
//! verbosity from `RUST_LOG`. Logs are written to `stderr` and never mix with the results table:
//! ```sh
//! RAYON_NUM_THREADS=4 RUST_LOG=info cargo run --release -- --meta-repetitions 5
//! ```

pub mod cli;
pub mod consts;
pub mod drivers;
pub mod error;
pub mod kernels;
pub mod perf_report;
pub mod sizes;
pub mod utils;

use crate::cli::CliArgs;
use crate::error::TriadError;
use crate::utils::*;

use clap::Parser;

use std::{error::Error, io::stdout, process::ExitCode};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), TriadError> {
    let pool = drivers::thread_pool(args.threads)?;
    log::info!("Thread pool with {} workers", pool.current_num_threads());

    let mut output = stdout().lock();
    drivers::sweep(args, &pool, &mut output)
}
