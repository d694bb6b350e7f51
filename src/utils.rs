//! Utility functions and traits.

use crate::error::TriadError;

use rayon::prelude::*;

use std::fmt::Debug;

/// Utility trait that generalizes floating-point types in VTRIAD and implements common
/// functionnalities needed by the kernel and driver functions.
pub trait TriadFloat: num::Float + Default + Debug + Send + Sync {
    /// Converts an array index into a scalar of type `T`.
    fn from_index(i: usize) -> Self;
}

impl TriadFloat for f32 {
    fn from_index(i: usize) -> Self {
        i as f32
    }
}

impl TriadFloat for f64 {
    fn from_index(i: usize) -> Self {
        i as f64
    }
}

/// Allocates a vector of length `len` whose element `i` is `init(i)`.
///
/// The heap reservation is fallible, and the elements are written in parallel so that each worker
/// thread is the first to touch the memory pages it will later stream through.
pub fn par_init_vector<T, F>(name: &'static str, len: usize, init: F) -> Result<Vec<T>, TriadError>
where
    T: TriadFloat,
    F: Fn(usize) -> T + Sync + Send,
{
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|source| TriadError::Allocation { name, len, source })?;

    // Reuses the reserved capacity
    (0..len).into_par_iter().map(init).collect_into_vec(&mut v);
    Ok(v)
}
