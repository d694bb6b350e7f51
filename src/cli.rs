//! Command-Line Interface related code.
//!
//! This module handles the parsing of CLI arguments using the [`clap`][1] crate.
//! Every option has a default, so that running the binary without arguments performs the standard
//! sweep.
//!
//! [1]: https://crates.io/crates/clap

use crate::consts;

use clap::Parser;

/// Vector triad memory bandwidth sweep.
///
/// Measures the throughput of `d[i] = a[i] + b[i] * c[i]` over logarithmically spaced array sizes,
/// single-threaded and in parallel with static and dynamic scheduling. The number of worker
/// threads defaults to the `RAYON_NUM_THREADS` environment variable, or the number of logical CPUs.
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct CliArgs {
    /// Smallest array size.
    #[arg(
        short,
        long,
        value_name = "N0",
        default_value_t = consts::START_SIZE,
        value_parser = positive_usize,
    )]
    pub start_size: usize,

    /// Data points per decade (of array size).
    #[arg(
        short,
        long,
        value_name = "POINTS",
        default_value_t = consts::POINTS_PER_DECADE,
        value_parser = positive_usize,
    )]
    pub points_per_decade: usize,

    /// Number of array sizes in the sweep.
    #[arg(
        short,
        long,
        value_name = "RUNS",
        default_value_t = consts::NB_RUNS,
        value_parser = positive_usize,
    )]
    pub runs: usize,

    /// Approximate number of floating-point operations per measurement.
    #[arg(
        short,
        long,
        value_name = "FLOPS",
        default_value_t = consts::FLOP_COUNT,
        value_parser = positive_f64,
    )]
    pub flop_count: f64,

    /// Number of meta-repetitions of each timed loop, whose durations are averaged.
    #[arg(
        short,
        long,
        value_name = "META_REPS",
        default_value_t = consts::META_REPETITIONS,
        value_parser = clap::value_parser!(u8).range(1..=u8::MAX.into()),
    )]
    pub meta_repetitions: u8,

    /// Number of worker threads.
    #[arg(short, long, value_name = "THREADS", value_parser = positive_usize)]
    pub threads: Option<usize>,
}

fn positive_usize(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn positive_f64(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() && x > 0.0 => Ok(x),
        Ok(_) => Err("must be a finite number greater than 0".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["vtriad"]).unwrap();
        assert_eq!(args.start_size, 1000);
        assert_eq!(args.points_per_decade, 8);
        assert_eq!(args.runs, 41);
        assert_eq!(args.flop_count, 5.0e8);
        assert_eq!(args.meta_repetitions, 1);
        assert_eq!(args.threads, None);
    }

    #[test]
    fn overrides() {
        let args = CliArgs::try_parse_from([
            "vtriad", "-s", "10", "-p", "4", "-r", "9", "-f", "1e6", "-m", "5", "-t", "2",
        ])
        .unwrap();
        assert_eq!(args.start_size, 10);
        assert_eq!(args.points_per_decade, 4);
        assert_eq!(args.runs, 9);
        assert_eq!(args.flop_count, 1.0e6);
        assert_eq!(args.meta_repetitions, 5);
        assert_eq!(args.threads, Some(2));
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(CliArgs::try_parse_from(["vtriad", "-s", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["vtriad", "-p", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["vtriad", "-f", "-1"]).is_err());
        assert!(CliArgs::try_parse_from(["vtriad", "-m", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["vtriad", "-t", "0"]).is_err());
    }
}
