//! Error types.
//!
//! Every fallible step of a sweep reports a [`TriadError`], which is propagated up to `main` and
//! logged there before the process exits.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriadError {
    /// Sweep parameters that cannot produce a size sequence.
    #[error("invalid sweep parameters: {0}")]
    InvalidSweep(&'static str),

    /// A decade boundary does not fit in `usize`.
    #[error("array size overflow after {decade} decade(s) starting from {start}")]
    SizeOverflow { start: usize, decade: usize },

    /// Heap allocation of a buffer failed.
    #[error("failed to allocate {len} elements for `{name}`")]
    Allocation {
        name: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("failed to build the worker thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write results")]
    Io(#[from] std::io::Error),
}
