//! Index permutations over score and label arrays.
//!
//! Rankings are always derived from a *stable* ascending sort. A descending
//! ranking is that permutation reversed, so items with equal values come out
//! in reverse input order.

/// Indices of `values` ordered by ascending value, ties kept in input order.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut ind: Vec<usize> = (0..values.len()).collect();
    // `sort_by` is stable; `total_cmp` gives NaN a fixed place instead of panicking.
    ind.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    ind
}

/// Indices of `values` ordered by descending value: the ascending
/// permutation, reversed.
pub fn argsort_descending(values: &[f64]) -> Vec<usize> {
    let mut ind = argsort(values);
    ind.reverse();
    ind
}

/// A copy of `values` sorted ascending.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    argsort(values).into_iter().map(|i| values[i]).collect()
}
