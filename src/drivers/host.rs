//! Host kernel drivers.
//!
//! This module implements the working arrays of the triad and the driver function responsible for
//! timing the kernel on the host (CPU) under a given execution mode.

use crate::{error::TriadError, kernels::host, perf_report::ExecutionMode, utils::*};

use std::{hint::black_box, time::Instant};

/// The four equal-length arrays of the triad `d = a + b * c`.
pub struct TriadArrays<T> {
    pub a: Vec<T>,
    pub b: Vec<T>,
    pub c: Vec<T>,
    pub d: Vec<T>,
}

impl<T: TriadFloat> TriadArrays<T> {
    /// Allocates and initializes the arrays for `n` elements: `a[i] = i`, `b[i] = n - i`,
    /// `c[i] = i` and `d[i] = -i`.
    pub fn new(n: usize) -> Result<Self, TriadError> {
        Ok(Self {
            a: par_init_vector("a", n, T::from_index)?,
            b: par_init_vector("b", n, |i| T::from_index(n - i))?,
            c: par_init_vector("c", n, T::from_index)?,
            d: par_init_vector("d", n, |i| -T::from_index(i))?,
        })
    }
}

/// Host driver for the triad kernel.
///
/// Runs `nrepeat` passes of the kernel under `mode` in a timed loop, `meta_reps` times, and
/// returns the elapsed time of each timed loop in seconds.
pub fn triad<T: TriadFloat>(
    arrays: &mut TriadArrays<T>,
    mode: ExecutionMode,
    nrepeat: usize,
    meta_reps: u8,
    nthreads: usize,
) -> Vec<f64> {
    let schedule = mode.schedule(arrays.d.len(), nthreads);
    let (a, b, c) = (&arrays.a[..], &arrays.b[..], &arrays.c[..]);
    let d = &mut arrays.d[..];

    // Measure execution time of kernel
    let mut durations = Vec::with_capacity(meta_reps.into());
    for _ in 0..meta_reps {
        let dur = Instant::now();
        for _ in 0..nrepeat {
            host::triad_with(schedule, a, b, c, d);
            let _ = black_box(&mut *d);
        }
        durations.push(dur.elapsed().as_secs_f64());
    }
    durations
}
