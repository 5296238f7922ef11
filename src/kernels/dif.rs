//! DIF-specific butterfly kernel.

use ark_ff::FftField;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::options::Options;

/// One DIF stage over `block`: each pair `(lo[j], hi[j])` becomes
/// `(lo[j] + hi[j], (lo[j] − hi[j])·w[j])`.
///
/// `twiddles` is the stage's row; its first `block.len() / 2` entries are
/// consumed. While the recursion is still fanning out (`stage` below the
/// split cap) and the half-block clears [`BUTTERFLY_THRESHOLD`], the loop is
/// sliced into contiguous chunks, one per advisory worker; a worker count
/// that shifts down to zero or one simply runs serially.
///
/// [`BUTTERFLY_THRESHOLD`]: super::BUTTERFLY_THRESHOLD
#[inline]
#[allow(unused_variables)] // `stage` and `opts` are ignored when the `parallel` feature is disabled
pub(crate) fn butterfly<F: FftField>(
    block: &mut [F],
    twiddles: &[F],
    stage: usize,
    opts: &Options,
) {
    let half = block.len() / 2;
    debug_assert!(half >= 1 && block.len() == half * 2);
    debug_assert!(twiddles.len() >= half);

    let (lo, hi) = block.split_at_mut(half);

    // j = 0: the twiddle is one.
    let t = lo[0];
    lo[0] += hi[0];
    hi[0] = t - hi[0];

    #[cfg(feature = "parallel")]
    {
        let workers = opts.parallelism >> stage;
        if (stage as isize) < opts.max_splits && half > super::BUTTERFLY_THRESHOLD && workers > 1 {
            let chunk = (half - 1).div_ceil(workers);
            lo[1..]
                .par_chunks_mut(chunk)
                .zip(hi[1..].par_chunks_mut(chunk))
                .zip(twiddles[1..half].par_chunks(chunk))
                .for_each(|((lo, hi), w)| butterfly_chunk(lo, hi, w));
            return;
        }
    }

    butterfly_chunk(&mut lo[1..], &mut hi[1..], &twiddles[1..half]);
}

#[inline]
fn butterfly_chunk<F: FftField>(lo: &mut [F], hi: &mut [F], twiddles: &[F]) {
    for ((x, y), w) in lo.iter_mut().zip(hi.iter_mut()).zip(twiddles) {
        let t = *x;
        *x += *y;
        *y = (t - *y) * *w;
    }
}
