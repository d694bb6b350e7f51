//! Kernel drivers.
//!
//! This module provides the API for appropriately initializing and profiling the triad kernel
//! over the whole sweep of array sizes, as well as post-processing the results.
//!
//! # High-level approach for kernel profiling
//! ## 1. Data initialization
//! For each array size, four fresh arrays are allocated and initialized in parallel. This step is
//! not timed.
//!
//! ## 2. Performance evaluation
//! The kernel is run in a tight loop whose length is inversely proportional to the array size, so
//! that every measurement performs roughly the same number of floating-point operations (see
//! [`crate::consts`] for the default budget and [`crate::cli`] for overriding it from the
//! command-line). The tight loop is timed once per execution mode: statically partitioned
//! parallel, dynamically scheduled parallel and single-threaded. It can be repeated in a "meta
//! repetitions loop" to average out noise.
//!
//! ## 3. Post-processing
//! The recorded execution times are turned into computational performance (in GFLOP/s) for each
//! execution mode, and printed as one line per array size on `stdout`.

mod host;

use host::TriadArrays;

use crate::{cli::CliArgs, error::TriadError, perf_report::*, sizes::vsizes, utils::*};

use rayon::{ThreadPool, ThreadPoolBuilder};

use std::io::Write;

/// Builds the worker thread pool, with `threads` workers if given and rayon's default otherwise.
pub fn thread_pool(threads: Option<usize>) -> Result<ThreadPool, TriadError> {
    let mut builder = ThreadPoolBuilder::new().thread_name(|idx| format!("vtriad worker #{idx}"));
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    Ok(builder.build()?)
}

/// Driver function responsible for initializing the data for the triad kernel of length `n` and
/// timing it under each execution mode.
///
/// Must be called from within the thread pool of `nthreads` workers the parallel modes run on.
pub fn vtriad<T: TriadFloat>(
    n: usize,
    nrepeat: usize,
    nthreads: usize,
    meta_reps: u8,
) -> Result<Measurement, TriadError> {
    let mut arrays = TriadArrays::<T>::new(n)?;

    let [static_parallel, dynamic_parallel, scalar] = ExecutionMode::ALL
        .map(|mode| host::triad(&mut arrays, mode, nrepeat, meta_reps, nthreads));

    Ok(Measurement::new(
        n,
        nrepeat,
        &scalar,
        &static_parallel,
        &dynamic_parallel,
    ))
}

/// Driver function for the whole sweep: generates the array sizes, profiles the triad for each of
/// them on `pool` and writes the resulting table to `output`.
pub fn sweep(args: &CliArgs, pool: &ThreadPool, output: &mut dyn Write) -> Result<(), TriadError> {
    let nthreads = pool.current_num_threads();
    let sizes = vsizes(args.start_size, args.points_per_decade, args.runs)?;
    log::info!(
        "{} array sizes from {} to {}, {} points per decade, {:e} FLOPs per measurement, {nthreads} threads",
        sizes.len(),
        args.start_size,
        sizes.last().copied().unwrap_or_default(),
        args.points_per_decade,
        args.flop_count,
    );

    Measurement::print_header(output, nthreads)?;
    output.flush()?;

    for n in sizes {
        let nrepeat = (args.flop_count / n as f64) as usize;
        log::info!("Vector length: {n} ({nrepeat} repetitions)");

        let measurement =
            pool.install(|| vtriad::<f64>(n, nrepeat, nthreads, args.meta_repetitions))?;
        for mode in ExecutionMode::ALL {
            log::debug!(
                "N={} {mode}: {:.3} GFLOP/s over {} repetitions",
                measurement.nb_elems(),
                measurement.gflops(mode),
                measurement.nb_repeats(),
            );
        }
        writeln!(output, "{measurement}")?;
        output.flush()?;
    }

    Ok(())
}
