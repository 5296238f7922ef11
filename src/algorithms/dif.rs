//! Decimation-in-Frequency (DIF) driver.
//!
//! Butterflies shrink from the full slice down to pairs: the stage's kernel
//! runs over the whole block first, then the recursion descends into the two
//! halves. Natural-order input, bit-reversed output.

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

    kernels::dif::butterfly(a, &twiddles[stage], stage, opts);
    if half == 1 {
        return;
    }

    let (lo, hi) = a.split_at_mut(half);
    run_maybe_in_parallel(
        (stage as isize) < opts.max_splits,
        || fft(lo, twiddles, stage + 1, opts),
        || fft(hi, twiddles, stage + 1, opts),
    );
}
