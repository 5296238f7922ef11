//! Decimation-in-Time (DIT) driver.
//!
//! Mirror image of the DIF driver: the recursion descends into the two
//! halves first and the stage's kernel combines them on the way back up.
//! Bit-reversed input, natural-order output.

use ark_ff::FftField;

use crate::kernels;
use crate::options::Options;
use crate::parallel::run_maybe_in_parallel;

/// Transform `a` in place at recursion depth `stage`, consulting row `stage`
/// of the twiddle table.
pub(crate) fn fft<F: FftField>(a: &mut [F], twiddles: &[Vec<F>], stage: usize, opts: &Options) {
    let n = a.len();
    if n == 1 {
        return;
    }
    let half = n / 2;

    if half > 1 {
        let (lo, hi) = a.split_at_mut(half);
        run_maybe_in_parallel(
            (stage as isize) < opts.max_splits,
            || fft(lo, twiddles, stage + 1, opts),
            || fft(hi, twiddles, stage + 1, opts),
        );
    }

    kernels::dit::butterfly(a, &twiddles[stage], stage, opts);
}
