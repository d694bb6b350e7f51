//! Array size sequence of the sweep.
//!
//! Sizes are spaced evenly in log10 space, with a fixed number of points per decade. The first
//! point of every decade is snapped to the exact decade boundary so that the floating-point drift
//! of the multiplicative step never accumulates past a decade.

use crate::error::TriadError;

/// Produces `nb_runs` array sizes starting at `start`, with `points_per_decade` sizes per tenfold
/// increase.
///
/// Within a decade, each size is the previous one multiplied by `10^(1 / points_per_decade)` and
/// truncated toward zero. Every `points_per_decade`-th size is reset to the next decade boundary.
pub fn vsizes(
    start: usize,
    points_per_decade: usize,
    nb_runs: usize,
) -> Result<Vec<usize>, TriadError> {
    if start == 0 {
        return Err(TriadError::InvalidSweep("start size must be positive"));
    }
    if points_per_decade == 0 {
        return Err(TriadError::InvalidSweep("points per decade must be positive"));
    }
    if nb_runs == 0 {
        return Err(TriadError::InvalidSweep("number of runs must be positive"));
    }

    let mut sizes = Vec::new();
    sizes
        .try_reserve_exact(nb_runs)
        .map_err(|source| TriadError::Allocation {
            name: "sizes",
            len: nb_runs,
            source,
        })?;

    let step = 10_f64.powf(1.0 / points_per_decade as f64);
    let mut decade_start = start;
    let mut n = start;
    sizes.push(n);

    for irun in 1..nb_runs {
        if irun % points_per_decade == 0 {
            decade_start = decade_start
                .checked_mul(10)
                .ok_or(TriadError::SizeOverflow {
                    start,
                    decade: irun / points_per_decade,
                })?;
            n = decade_start;
        } else {
            n = (n as f64 * step) as usize;
        }
        sizes.push(n);
    }

    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn first_decade_reset() {
        let sizes = vsizes(1000, 8, 9).unwrap();
        assert_eq!(sizes.len(), 9);
        assert_eq!(sizes[0], 1000);
        assert_eq!(sizes[1], 1333);
        assert_eq!(sizes[8], 10000);
    }

    #[test]
    fn default_sweep_spans_five_decades() {
        let sizes = vsizes(1000, 8, 41).unwrap();
        assert_eq!(sizes.len(), 41);
        assert_eq!(sizes[16], 100_000);
        assert_eq!(sizes[24], 1_000_000);
        assert_eq!(sizes[32], 10_000_000);
        assert_eq!(sizes[40], 100_000_000);
    }

    #[test]
    fn one_point_per_decade() {
        assert_eq!(vsizes(3, 1, 4).unwrap(), vec![3, 30, 300, 3000]);
    }

    #[test]
    fn single_run() {
        assert_eq!(vsizes(42, 8, 1).unwrap(), vec![42]);
    }

    #[test]
    fn rejects_zero_parameters() {
        assert!(matches!(vsizes(0, 8, 41), Err(TriadError::InvalidSweep(_))));
        assert!(matches!(vsizes(1000, 0, 41), Err(TriadError::InvalidSweep(_))));
        assert!(matches!(vsizes(1000, 8, 0), Err(TriadError::InvalidSweep(_))));
    }

    #[test]
    fn reports_overflow() {
        let err = vsizes(usize::MAX / 2, 1, 3).unwrap_err();
        assert!(matches!(err, TriadError::SizeOverflow { decade: 1, .. }));
    }

    fn sweep_params() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..10_000, 1usize..16)
            .prop_flat_map(|(start, ppd)| (Just(start), Just(ppd), 1usize..=8 * ppd))
    }

    proptest! {
        #[test]
        fn sequence_shape((start, ppd, nb_runs) in sweep_params()) {
            let sizes = vsizes(start, ppd, nb_runs).unwrap();
            prop_assert_eq!(sizes.len(), nb_runs);
            prop_assert_eq!(sizes[0], start);
            prop_assert!(sizes.iter().all(|&n| n > 0));

            for i in 1..nb_runs {
                if i % ppd == 0 {
                    prop_assert_eq!(sizes[i], start * 10usize.pow((i / ppd) as u32));
                    prop_assert!(sizes[i] > sizes[i - 1]);
                } else {
                    prop_assert!(sizes[i] >= sizes[i - 1]);
                }
            }
        }

        #[test]
        fn deterministic((start, ppd, nb_runs) in sweep_params()) {
            prop_assert_eq!(
                vsizes(start, ppd, nb_runs).unwrap(),
                vsizes(start, ppd, nb_runs).unwrap()
            );
        }
    }
}
