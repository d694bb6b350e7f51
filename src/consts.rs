//! Crate-level constants.

/// Default smallest array size of the sweep.
pub const START_SIZE: usize = 1000;

/// Default number of data points per decade (of array size).
pub const POINTS_PER_DECADE: usize = 8;

/// Default number of array size increases.
pub const NB_RUNS: usize = 41;

/// Default approximate number of floating-point operations per measurement.
pub const FLOP_COUNT: f64 = 5.0e8;

/// Default number of meta repetitions performed for each execution mode.
pub const META_REPETITIONS: u8 = 1;

/// Floating-point operations per triad element (one multiply, one add).
pub const FLOPS_PER_ELEM: usize = 2;
