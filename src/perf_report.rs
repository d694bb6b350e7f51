//! Performance report related structures and functions.
//!
//! This module defines the data structures and functions needed to turn the recorded execution
//! times of the triad into throughput figures, and to print them as the sweep's output table.

use crate::{consts, kernels::host::Schedule};

use statistical::{mean, standard_deviation};

use std::{fmt, io::Write};

/// Execution modes of the triad kernel, in the order they are measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    StaticParallel,
    DynamicParallel,
    Scalar,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 3] = [
        ExecutionMode::StaticParallel,
        ExecutionMode::DynamicParallel,
        ExecutionMode::Scalar,
    ];

    /// Partitioning used by this mode for arrays of `len` elements on `nthreads` workers.
    pub fn schedule(self, len: usize, nthreads: usize) -> Schedule {
        match self {
            Self::StaticParallel => Schedule::static_blocks(len, nthreads),
            Self::DynamicParallel => Schedule::dynamic_chunks(len, nthreads),
            Self::Scalar => Schedule::Sequential,
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticParallel => write!(f, "static parallel"),
            Self::DynamicParallel => write!(f, "dynamic parallel"),
            Self::Scalar => write!(f, "scalar"),
        }
    }
}

/// Number of GFLOPs performed by `nb_repeats` triads over `nb_elems` elements.
pub fn gflop(nb_elems: usize, nb_repeats: usize) -> f64 {
    nb_elems as f64 * nb_repeats as f64 * consts::FLOPS_PER_ELEM as f64 / 1.0e9
}

/// Throughput of a single array size, for each execution mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Number of elements per array.
    nb_elems: usize,
    /// Number of triad repetitions per timed loop.
    nb_repeats: usize,
    /// Single-threaded throughput in GFLOP/s.
    scalar: f64,
    /// Statically partitioned parallel throughput in GFLOP/s.
    static_parallel: f64,
    /// Dynamically scheduled parallel throughput in GFLOP/s.
    dynamic_parallel: f64,
}

impl Measurement {
    pub fn print_header(output: &mut dyn Write, nthreads: usize) -> std::io::Result<()> {
        writeln!(output, "# nthreads={nthreads}")?;
        writeln!(output, "#        N   S_GFlops/s  P_GFlops/s  Pd_GFlops/s")
    }

    /// Creates a new `Measurement` from the elapsed times (in seconds) of the timed loops of each
    /// execution mode, one per meta repetition.
    pub fn new(
        nb_elems: usize,
        nb_repeats: usize,
        scalar: &[f64],
        static_parallel: &[f64],
        dynamic_parallel: &[f64],
    ) -> Self {
        let gflop = gflop(nb_elems, nb_repeats);

        Self {
            nb_elems,
            nb_repeats,
            scalar: throughput(ExecutionMode::Scalar, nb_elems, gflop, scalar),
            static_parallel: throughput(
                ExecutionMode::StaticParallel,
                nb_elems,
                gflop,
                static_parallel,
            ),
            dynamic_parallel: throughput(
                ExecutionMode::DynamicParallel,
                nb_elems,
                gflop,
                dynamic_parallel,
            ),
        }
    }

    pub fn nb_elems(&self) -> usize {
        self.nb_elems
    }

    pub fn nb_repeats(&self) -> usize {
        self.nb_repeats
    }

    /// Throughput in GFLOP/s of the given execution mode.
    pub fn gflops(&self, mode: ExecutionMode) -> f64 {
        match mode {
            ExecutionMode::StaticParallel => self.static_parallel,
            ExecutionMode::DynamicParallel => self.dynamic_parallel,
            ExecutionMode::Scalar => self.scalar,
        }
    }
}

fn throughput(mode: ExecutionMode, nb_elems: usize, gflop: f64, durations: &[f64]) -> f64 {
    let avg_time = mean(durations);
    if durations.len() > 1 {
        log::debug!(
            "N={nb_elems} {mode}: avg {avg_time:e} s, stddev {:e} s over {} runs",
            standard_deviation(durations, Some(avg_time)),
            durations.len(),
        );
    } else {
        log::debug!("N={nb_elems} {mode}: {avg_time:e} s");
    }

    let gflops = gflop / avg_time;
    if !gflops.is_finite() {
        log::warn!("N={nb_elems} {mode}: non-finite throughput ({gflop} GFLOP in {avg_time} s)");
    }
    gflops
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:10} {:10.3} {:10.3} {:10.3}",
            self.nb_elems, self.scalar, self.static_parallel, self.dynamic_parallel,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header() {
        let mut out = Vec::new();
        Measurement::print_header(&mut out, 4).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# nthreads=4\n#        N   S_GFlops/s  P_GFlops/s  Pd_GFlops/s\n"
        );
    }

    #[test]
    fn gflop_count() {
        assert_eq!(gflop(1000, 500_000), 1.0);
        assert_eq!(gflop(1000, 0), 0.0);
    }

    #[test]
    fn throughput_per_mode() {
        let m = Measurement::new(1_000_000, 1000, &[1.0], &[0.5], &[0.25]);
        assert_eq!(m.gflops(ExecutionMode::Scalar), 2.0);
        assert_eq!(m.gflops(ExecutionMode::StaticParallel), 4.0);
        assert_eq!(m.gflops(ExecutionMode::DynamicParallel), 8.0);
        assert_eq!(
            m.to_string(),
            "   1000000      2.000      4.000      8.000"
        );
    }

    #[test]
    fn throughput_uses_mean_duration() {
        let m = Measurement::new(1_000_000, 1000, &[1.0, 3.0], &[1.0], &[1.0]);
        assert_eq!(m.gflops(ExecutionMode::Scalar), 1.0);
    }

    #[test]
    fn degenerate_measurement_is_printed() {
        let m = Measurement::new(1000, 0, &[0.0], &[0.0], &[1e-9]);
        assert!(m.gflops(ExecutionMode::Scalar).is_nan());
        assert_eq!(m.gflops(ExecutionMode::DynamicParallel), 0.0);
        assert_eq!(
            m.to_string(),
            "      1000        NaN        NaN      0.000"
        );
    }

    #[test]
    fn modes_measured_parallel_first() {
        assert_eq!(ExecutionMode::ALL[2], ExecutionMode::Scalar);
        assert_eq!(ExecutionMode::Scalar.schedule(10, 4), Schedule::Sequential);
    }
}
