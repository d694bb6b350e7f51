//! Kernel implementations.
//!
//! This modules contains the actual implementation of the vector triad `d = a + b * c` on the
//! host, along with the partitioning strategies used to spread it over worker threads.

pub mod host {
    //! Host kernel implementations.
    //!
    //! The parallel implementations rely on the [`rayon`][1] crate and must be called from within
    //! the thread pool they are meant to run on (see [`rayon::ThreadPool::install`]).
    //!
    //! [1]: https://crates.io/crates/rayon

    use rayon::prelude::*;

    use crate::TriadFloat;

    /// Partitioning of the index range of a data-parallel loop across worker threads.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Schedule {
        /// Single thread, indices visited in order.
        Sequential,
        /// `nthreads` contiguous blocks of `block_size` elements.
        Static { block_size: usize },
        /// Chunks of `chunk_size` elements handed out to workers as they become idle.
        Dynamic { chunk_size: usize },
    }

    impl Schedule {
        /// Static partitioning of `len` elements into `nthreads` contiguous blocks.
        pub fn static_blocks(len: usize, nthreads: usize) -> Self {
            Self::Static {
                block_size: len.div_ceil(nthreads.max(1)).max(1),
            }
        }

        /// Dynamic partitioning of `len` elements into chunks of `len / nthreads` elements.
        ///
        /// The chunk size is clamped to 1 when there are fewer elements than threads.
        pub fn dynamic_chunks(len: usize, nthreads: usize) -> Self {
            Self::Dynamic {
                chunk_size: (len / nthreads.max(1)).max(1),
            }
        }
    }

    // Naive implementation of the triad kernel (unidiomatic Rust).
    pub fn triad<T: TriadFloat>(a: &[T], b: &[T], c: &[T], d: &mut [T]) {
        for i in 0..d.len() {
            d[i] = a[i] + b[i] * c[i];
        }
    }

    // Idiomatic Rust implementation of the triad kernel (using iterators).
    pub fn iter_triad<T: TriadFloat>(a: &[T], b: &[T], c: &[T], d: &mut [T]) {
        d.iter_mut()
            .zip(a)
            .zip(b)
            .zip(c)
            .for_each(|(((di, ai), bi), ci)| *di = *ai + *bi * *ci);
    }

    // Statically partitioned parallel triad (using `rayon`'s indexed parallel chunks).
    pub fn par_static_triad<T: TriadFloat>(
        a: &[T],
        b: &[T],
        c: &[T],
        d: &mut [T],
        block_size: usize,
    ) {
        let block_size = block_size.max(1);
        d.par_chunks_mut(block_size)
            .zip(a.par_chunks(block_size))
            .zip(b.par_chunks(block_size))
            .zip(c.par_chunks(block_size))
            .for_each(|(((d, a), b), c)| iter_triad(a, b, c, d));
    }

    // Dynamically scheduled parallel triad (using `rayon`'s bridge over a serial chunk iterator,
    // which hands the next chunk to whichever worker asks for it first).
    pub fn par_dynamic_triad<T: TriadFloat>(
        a: &[T],
        b: &[T],
        c: &[T],
        d: &mut [T],
        chunk_size: usize,
    ) {
        let chunk_size = chunk_size.max(1);
        d.chunks_mut(chunk_size)
            .zip(a.chunks(chunk_size))
            .zip(b.chunks(chunk_size))
            .zip(c.chunks(chunk_size))
            .par_bridge()
            .for_each(|(((d, a), b), c)| iter_triad(a, b, c, d));
    }

    /// Runs one triad pass over the whole arrays with the given partitioning.
    pub fn triad_with<T: TriadFloat>(schedule: Schedule, a: &[T], b: &[T], c: &[T], d: &mut [T]) {
        match schedule {
            Schedule::Sequential => triad(a, b, c, d),
            Schedule::Static { block_size } => par_static_triad(a, b, c, d, block_size),
            Schedule::Dynamic { chunk_size } => par_dynamic_triad(a, b, c, d, chunk_size),
        }
    }

}
