//! Evaluation domain and the transform façade.
//!
//! A [`Domain`] is built once per proving key and reused across many
//! transforms; it owns the subgroup constants and the per-stage twiddle
//! tables, and is read-only during transforms, so one instance may serve any
//! number of concurrent FFTs on distinct working vectors.

use core::fmt;

use ark_ff::FftField;

use crate::algorithms;
use crate::options::Options;
use crate::twiddles::generate_twiddles;

/// Which decimation a transform uses, fixing where bit-reversed order sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decimation {
    /// Decimation in time: bit-reversed input, natural-order output.
    Dit,
    /// Decimation in frequency: natural-order input, bit-reversed output.
    Dif,
}

/// Errors surfaced by [`Domain`] construction and transforms.
///
/// All variants are programmer errors; there is no retry or recovery inside
/// the transforms, and a working vector is undefined after a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The requested size is not a power of two, or the field has no
    /// primitive root of unity of that order.
    #[error("no multiplicative subgroup of size {size} in this field")]
    UnsupportedSize { size: usize },
    /// The working vector's length does not match the domain size.
    #[error("working vector has length {actual}, domain expects {expected}")]
    InvalidLength { expected: usize, actual: usize },
}

/// A radix-2 evaluation domain of size `N = 2^k` over the prime field `F`.
#[derive(Clone)]
pub struct Domain<F: FftField> {
    pub(crate) size: usize,
    pub(crate) log_size: u32,
    pub(crate) omega: F,
    pub(crate) omega_inv: F,
    pub(crate) size_inv: F,
    pub(crate) twiddles: Vec<Vec<F>>,
    pub(crate) twiddles_inv: Vec<Vec<F>>,
}

impl<F: FftField> fmt::Debug for Domain<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "radix-2 domain of size {}", self.size)
    }
}

impl<F: FftField> Domain<F> {
    /// Build a domain of `size` points.
    ///
    /// Fails with [`FftError::UnsupportedSize`] when `size` is not a power of
    /// two or exceeds the field's two-adicity. The check runs before any
    /// table is allocated.
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(FftError::UnsupportedSize { size });
        }
        let unsupported = FftError::UnsupportedSize { size };
        let omega = F::get_root_of_unity(size as u64).ok_or(unsupported)?;
        let omega_inv = omega.inverse().ok_or(unsupported)?;
        let size_inv = F::from(size as u64).inverse().ok_or(unsupported)?;

        Ok(Self {
            size,
            log_size: size.trailing_zeros(),
            omega,
            omega_inv,
            size_inv,
            twiddles: generate_twiddles(size, omega),
            twiddles_inv: generate_twiddles(size, omega_inv),
        })
    }

    /// The domain size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `log₂ N`.
    pub fn log_size(&self) -> u32 {
        self.log_size
    }

    /// The primitive N-th root of unity generating the domain.
    pub fn omega(&self) -> F {
        self.omega
    }

    /// The inverse of [`omega`](Self::omega).
    pub fn omega_inv(&self) -> F {
        self.omega_inv
    }

    /// N⁻¹ as a field element, the inverse transform's scaling factor.
    pub fn size_inv(&self) -> F {
        self.size_inv
    }

    /// Forward transform of `a` in place, with settings guessed from the
    /// running hardware.
    pub fn fft(&self, a: &mut [F], decimation: Decimation) -> Result<(), FftError> {
        self.fft_with_opts(a, decimation, &Options::guess_options())
    }

    /// Forward transform of `a` in place with explicit [`Options`].
    pub fn fft_with_opts(
        &self,
        a: &mut [F],
        decimation: Decimation,
        opts: &Options,
    ) -> Result<(), FftError> {
        self.check_len(a)?;
        match decimation {
            Decimation::Dif => algorithms::dif::fft(a, &self.twiddles, 0, opts),
            Decimation::Dit => algorithms::dit::fft(a, &self.twiddles, 0, opts),
        }
        Ok(())
    }

    /// Inverse transform of `a` in place, with settings guessed from the
    /// running hardware.
    pub fn fft_inverse(&self, a: &mut [F], decimation: Decimation) -> Result<(), FftError> {
        self.fft_inverse_with_opts(a, decimation, &Options::guess_options())
    }

    /// Inverse transform of `a` in place with explicit [`Options`]: the same
    /// recursion over the inverse twiddle table, then a scaling of every
    /// element by N⁻¹.
    pub fn fft_inverse_with_opts(
        &self,
        a: &mut [F],
        decimation: Decimation,
        opts: &Options,
    ) -> Result<(), FftError> {
        self.check_len(a)?;
        match decimation {
            Decimation::Dif => algorithms::dif::fft(a, &self.twiddles_inv, 0, opts),
            Decimation::Dit => algorithms::dit::fft(a, &self.twiddles_inv, 0, opts),
        }
        self.scale(a, opts);
        Ok(())
    }

    fn check_len(&self, a: &[F]) -> Result<(), FftError> {
        if a.len() != self.size {
            return Err(FftError::InvalidLength {
                expected: self.size,
                actual: a.len(),
            });
        }
        Ok(())
    }

    #[allow(unused_variables)] // `opts` is ignored when the `parallel` feature is disabled
    fn scale(&self, a: &mut [F], opts: &Options) {
        let factor = self.size_inv;

        #[cfg(feature = "parallel")]
        if opts.max_splits >= 0 {
            use rayon::prelude::*;
            a.par_iter_mut().for_each(|x| *x *= factor);
            return;
        }

        for x in a.iter_mut() {
            *x *= factor;
        }
    }
}
