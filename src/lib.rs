//! Radix-2 in-place FFT over a prime field.
//!
//! Proving systems evaluate and interpolate polynomials over a multiplicative
//! subgroup of order `N = 2^k` generated by a primitive N-th root of unity ω.
//! A [`Domain`] precomputes the per-stage twiddle tables for one such
//! subgroup and exposes the forward and inverse transforms, both performed in
//! place with bounded fork-join parallelism.
//!
//! ## Decimation selection
//!
//! - [`Decimation::Dif`] consumes natural order and produces bit-reversed
//!   order.
//! - [`Decimation::Dit`] consumes bit-reversed order and produces natural
//!   order.
//!
//! The two compose: a DIF forward transform followed by a DIT inverse
//! round-trips without any explicit [`bit_reverse`] pass in between. When a
//! single transform's output is needed in natural order, apply
//! [`bit_reverse`] to the result of a DIF pass (or to the input of a DIT
//! pass); the two conventions are not interchangeable without it.

mod algorithms;
mod bit_reverse;
mod domain;
mod kernels;
mod options;
mod parallel;
mod twiddles;

#[cfg(test)]
mod utils;

pub use bit_reverse::bit_reverse;
pub use domain::{Decimation, Domain, FftError};
pub use options::Options;
