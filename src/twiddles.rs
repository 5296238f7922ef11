//! Per-stage twiddle tables.
//!
//! Row `s` holds `ω^(j·2^s)` for `j ∈ [0, (N >> s) / 2)`, exactly the
//! factors the butterflies at stage `s` consume, so a driver indexes row `s`
//! directly with no arithmetic beyond the index. Each row is the previous
//! row filtered down to every second entry: squaring the stride halves the
//! row. The whole table therefore costs one running-product pass plus
//! `log₂ N − 1` filter passes.

use ark_ff::FftField;

/// Build the stage-indexed twiddle table for a domain of `size` points
/// generated by `root`. Empty for `size == 1`.
pub(crate) fn generate_twiddles<F: FftField>(size: usize, root: F) -> Vec<Vec<F>> {
    debug_assert!(size.is_power_of_two());
    if size == 1 {
        return Vec::new();
    }
    let stages = size.ilog2() as usize;
    let mut table = Vec::with_capacity(stages);

    let mut row = Vec::with_capacity(size / 2);
    let mut w = F::one();
    for _ in 0..size / 2 {
        row.push(w);
        w *= root;
    }
    table.push(row);

    for s in 1..stages {
        let filtered = filter_twiddles(&table[s - 1]);
        table.push(filtered);
    }

    table
}

/// Keep every second twiddle of the previous stage's row.
fn filter_twiddles<F: FftField>(twiddles: &[F]) -> Vec<F> {
    twiddles.iter().copied().step_by(2).collect()
}

#[cfg(test)]
mod tests {
    use ark_bls12_381::Fr;
    use ark_ff::{FftField, Field};

    use super::*;

    #[test]
    fn rows_are_stage_strided_powers() {
        let n = 16u64;
        let omega = Fr::get_root_of_unity(n).unwrap();
        let table = generate_twiddles(n as usize, omega);

        assert_eq!(table.len(), 4);
        for (s, row) in table.iter().enumerate() {
            assert_eq!(row.len(), (n as usize >> s) / 2);
            for (j, w) in row.iter().enumerate() {
                assert_eq!(*w, omega.pow([(j as u64) << s]));
            }
        }
    }

    #[test]
    fn degenerate_sizes() {
        let omega = Fr::get_root_of_unity(2).unwrap();
        assert!(generate_twiddles::<Fr>(1, Fr::from(1u64)).is_empty());
        assert_eq!(generate_twiddles(2, omega), vec![vec![Fr::from(1u64)]]);
    }
}
