//! Radix-2 butterfly kernels.
//!
//! Each kernel performs one stage's butterflies over a single contiguous
//! block: the lower half of the block zipped against the upper half and the
//! stage's twiddle row. The two halves are disjoint sub-slices, which is
//! what lets the chunked parallel path mutate them without locks. The `j = 0`
//! butterfly is special-cased in both variants: its twiddle is one and the
//! multiplication is elided.

pub(crate) mod dif;
pub(crate) mod dit;

/// Smallest half-block size worth slicing across workers; below this the
/// dispatch overhead exceeds the recovered work.
pub(crate) const BUTTERFLY_THRESHOLD: usize = 16;
