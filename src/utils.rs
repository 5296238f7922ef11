//! Shared test helpers.

use ark_ff::FftField;
use ark_std::test_rng;

/// A vector of `n` random field elements from the deterministic test rng.
pub(crate) fn random_vector<F: FftField>(n: usize) -> Vec<F> {
    let mut rng = test_rng();
    (0..n).map(|_| F::rand(&mut rng)).collect()
}

/// Direct O(N²) evaluation of the polynomial with coefficients `a` over the
/// powers of `root`, natural order in and out. The exact-arithmetic oracle
/// the transforms are checked against.
pub(crate) fn naive_dft<F: FftField>(a: &[F], root: F) -> Vec<F> {
    let n = a.len();
    let mut out = Vec::with_capacity(n);
    let mut point = F::one();
    for _ in 0..n {
        // Horner evaluation at the current domain point.
        let mut acc = F::zero();
        for c in a.iter().rev() {
            acc = acc * point + c;
        }
        out.push(acc);
        point *= root;
    }
    out
}

/// Schoolbook O(N²) cyclic convolution of `a` and `b`.
pub(crate) fn cyclic_convolution<F: FftField>(a: &[F], b: &[F]) -> Vec<F> {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let mut out = vec![F::zero(); n];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[(i + j) % n] += *x * y;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use ark_bls12_381::Fr;
    use ark_ff::FftField;

    use super::*;

    #[test]
    fn naive_dft_of_constant_polynomial() {
        let omega = Fr::get_root_of_unity(4).unwrap();
        let c = Fr::from(9u64);
        let evals = naive_dft(&[c, Fr::from(0u64), Fr::from(0u64), Fr::from(0u64)], omega);
        assert_eq!(evals, vec![c; 4]);
    }

    #[test]
    fn convolution_with_unit_impulse() {
        let a: Vec<Fr> = (1u64..=4).map(Fr::from).collect();
        let mut e1 = vec![Fr::from(0u64); 4];
        e1[1] = Fr::from(1u64);
        // Convolving with the shifted impulse rotates the sequence.
        assert_eq!(
            cyclic_convolution(&a, &e1),
            vec![Fr::from(4u64), Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)],
        );
    }
}
