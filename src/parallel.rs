//! Utilities for parallelism.

/// Runs the two closures, in parallel if and only if `parallel` is true and
/// the `parallel` feature is enabled.
///
/// The first closure is handed to the work-stealing pool as a sibling task
/// and the second runs inline; the join blocks until the spawned half
/// completes and re-raises any panic it produced. Tasks here are short and
/// CPU-bound, so the pool never blocks on anything but its own children.
#[allow(unused_variables)] // `parallel` is ignored when the feature is disabled
pub(crate) fn run_maybe_in_parallel<A, B, RA, RB>(parallel: bool, oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            chili::Scope::global().join(|_| oper_a(), |_| oper_b())
        } else {
            (oper_a(), oper_b())
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        (oper_a(), oper_b())
    }
}

/// Worker count the data-parallel loops may assume; 1 without the `parallel`
/// feature.
pub(crate) fn hardware_parallelism() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_both_closures() {
        for parallel in [false, true] {
            let (a, b) = run_maybe_in_parallel(parallel, || 1 + 1, || "two");
            assert_eq!(a, 2);
            assert_eq!(b, "two");
        }
    }

    #[test]
    fn reports_at_least_one_worker() {
        assert!(hardware_parallelism() >= 1);
    }
}
